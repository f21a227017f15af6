//! Time-of-day greeting shown on the home page

use chrono::{Local, Timelike};

/// Greeting text plus its icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting {
    pub text: &'static str,
    pub icon: &'static str,
}

/// Pick the greeting for a local hour (0-23)
pub fn for_hour(hour: u32) -> Greeting {
    if (5..12).contains(&hour) {
        Greeting {
            text: "Good morning from Dodoma! Welcome to Fadhiri Masudi's portfolio.",
            icon: "☀️",
        }
    } else if (12..18).contains(&hour) {
        Greeting {
            text: "Good afternoon from Dodoma! Hope you enjoy exploring Fadhiri Masudi's work.",
            icon: "😊",
        }
    } else if (18..22).contains(&hour) {
        Greeting {
            text: "Good evening from Dodoma! Thanks for stopping by Fadhiri Masudi's portfolio.",
            icon: "🌇",
        }
    } else {
        Greeting {
            text: "Working late or visiting from afar? Welcome to Fadhiri Masudi's portfolio, here in Dodoma!",
            icon: "🌙",
        }
    }
}

/// Greeting for the current local time
pub fn now() -> Greeting {
    for_hour(Local::now().hour())
}
