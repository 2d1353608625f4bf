//! Top-level view switcher.
//!
//! Exactly one screen exists at a time. Selecting a view builds that screen
//! from scratch, so switching away discards the form's unsent text and the
//! dashboard's filters, page, and search.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use std::fmt;
use std::str::FromStr;

use crate::dashboard::{DashboardState, Effect};
use crate::form::FormState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewKind {
    #[default]
    Employee,
    Admin,
}

impl ViewKind {
    pub const ALL: [ViewKind; 2] = [Self::Employee, Self::Admin];

    /// Navigation label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Employee => "Employee View",
            Self::Admin => "Admin Dashboard",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Employee => Self::Admin,
            Self::Admin => Self::Employee,
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unknown view name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown view: {0} (expected employee or admin)")]
pub struct ParseViewError(pub String);

impl FromStr for ViewKind {
    type Err = ParseViewError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "employee" | "form" => Ok(Self::Employee),
            "admin" | "dashboard" => Ok(Self::Admin),
            _ => Err(ParseViewError(raw.to_owned())),
        }
    }
}

/// The currently mounted screen and its state.
#[derive(Clone, Debug)]
pub enum Screen {
    Employee(FormState),
    Admin(Box<DashboardState>),
}

impl Screen {
    #[must_use]
    pub fn kind(&self) -> ViewKind {
        match self {
            Self::Employee(_) => ViewKind::Employee,
            Self::Admin(_) => ViewKind::Admin,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Shell {
    screen: Screen,
}

impl Default for Shell {
    fn default() -> Self {
        Self { screen: Screen::Employee(FormState::new()) }
    }
}

impl Shell {
    /// Starts on the employee form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active(&self) -> ViewKind {
        self.screen.kind()
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Mount `view` with fresh state, even when it is already active.
    ///
    /// Returns the dashboard's initial fetches when switching to admin.
    pub fn select(&mut self, view: ViewKind) -> Vec<Effect> {
        tracing::debug!(from = %self.active(), to = %view, "switching view");
        match view {
            ViewKind::Employee => {
                self.screen = Screen::Employee(FormState::new());
                Vec::new()
            }
            ViewKind::Admin => {
                let mut dashboard = Box::new(DashboardState::new());
                let effects = dashboard.mount();
                self.screen = Screen::Admin(dashboard);
                effects
            }
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut FormState> {
        match &mut self.screen {
            Screen::Employee(form) => Some(form),
            Screen::Admin(_) => None,
        }
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut DashboardState> {
        match &mut self.screen {
            Screen::Admin(dashboard) => Some(dashboard.as_mut()),
            Screen::Employee(_) => None,
        }
    }
}
