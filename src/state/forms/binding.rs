//! Typed binding of a form against the elements a page provides.
//!
//! The page contract requires, per form: a form root, one status-message
//! element, and per field an input id `X` paired with an error slot `X-error`
//! (group slots are keyed by the shared name). Binding resolves the whole
//! contract once at construction instead of re-querying per interaction; a
//! missing element is reported, and the validator does not attach.

use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    #[error("page is missing element `{0}`")]
    MissingElement(String),
}

/// The set of element ids a page provides (the markup contract)
#[derive(Debug, Default, Clone)]
pub struct PageElements {
    ids: HashSet<String>,
}

impl PageElements {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            ids: ids.iter().map(|id| id.to_string()).collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}

/// Resolved element ids for one form, checked against the page once
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct FormBinding {
    pub root: String,
    pub status_slot: String,
    pub error_slots: Vec<String>,
}

impl FormBinding {
    /// Resolve root, status slot, inputs, and their error slots. The first
    /// absent id fails the whole binding.
    pub fn resolve(
        page: &PageElements,
        root: &str,
        status_slot: &str,
        inputs: &[&str],
        group_names: &[&str],
    ) -> Result<Self, BindingError> {
        let require = |id: &str| -> Result<(), BindingError> {
            if page.contains(id) {
                Ok(())
            } else {
                Err(BindingError::MissingElement(id.to_string()))
            }
        };

        require(root)?;
        require(status_slot)?;

        let mut error_slots = Vec::new();
        for id in inputs {
            require(id)?;
            let slot = format!("{id}-error");
            require(&slot)?;
            error_slots.push(slot);
        }
        for name in group_names {
            let slot = format!("{name}-error");
            require(&slot)?;
            error_slots.push(slot);
        }

        Ok(Self {
            root: root.to_string(),
            status_slot: status_slot.to_string(),
            error_slots,
        })
    }
}
