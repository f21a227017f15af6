//! Form state: fields, choice groups, validation, and the per-form validators

mod binding;
mod field;
mod form_state;
mod group;
mod validation;

pub use binding::*;
pub use field::*;
pub use form_state::*;
pub use group::*;
pub use validation::*;
