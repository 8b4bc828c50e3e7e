//! Holidaze library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod api;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Top-level screens, switchable at runtime and selectable at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Hotels,
    Messages,
    Dashboard,
}

impl Screen {
    pub fn label(self) -> &'static str {
        match self {
            Screen::Hotels => "Hotels",
            Screen::Messages => "Messages",
            Screen::Dashboard => "Dashboard",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Screen::Hotels => Screen::Messages,
            Screen::Messages => Screen::Dashboard,
            Screen::Dashboard => Screen::Hotels,
        }
    }
}
