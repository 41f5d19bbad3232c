//! Navigation commands.
//!
//! SYSTEM CONTEXT
//! ==============
//! Event handlers and gate logic decide *where* to go and return a
//! [`Redirect`]; only the component layer executes it against the router's
//! `use_navigate` capability. Keeps the deciding code free of router handles
//! so it can be tested directly.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos_router::NavigateOptions;

/// Path of the login view.
pub const LOGIN_PATH: &str = "/login";
/// Where a successful login lands.
pub const POST_LOGIN_PATH: &str = "/protected";

/// How the transition affects browser history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryMode {
    /// New history entry (ordinary links).
    #[default]
    Push,
    /// Replace the current entry (auth transitions).
    Replace,
}

/// An in-app transition request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub path: String,
    pub mode: HistoryMode,
}

impl Redirect {
    pub fn push(path: impl Into<String>) -> Self {
        Self { path: path.into(), mode: HistoryMode::Push }
    }

    pub fn replace(path: impl Into<String>) -> Self {
        Self { path: path.into(), mode: HistoryMode::Replace }
    }

    /// Replace-navigation to the login view, used by logout and the auth gate.
    pub fn to_login() -> Self {
        Self::replace(LOGIN_PATH)
    }

    /// Router options matching this command's history mode.
    pub fn options(&self) -> NavigateOptions {
        NavigateOptions { replace: self.mode == HistoryMode::Replace, ..NavigateOptions::default() }
    }

    /// Hand the command to a router navigate function.
    pub fn execute<F>(&self, navigate: &F)
    where
        F: Fn(&str, NavigateOptions),
    {
        leptos::logging::log!("navigate: {} ({:?})", self.path, self.mode);
        navigate(&self.path, self.options());
    }
}
