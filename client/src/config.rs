//! Build-time application configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no process environment, so `BASENAME` and
//! `BACKEND_URL` are captured at compile time. The server-rendered shell is
//! built from the same values, keeping SSR and hydration in agreement.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Routing prefix and account API location.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Path prefix the router is mounted under (`""` or `/something`).
    pub basename: String,
    /// Account API origin without a trailing slash. `None` when unset.
    pub backend_url: Option<String>,
}

impl AppConfig {
    /// Read `BASENAME` and `BACKEND_URL` captured when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("BASENAME"), option_env!("BACKEND_URL"))
    }

    /// Build a normalized config from raw values.
    pub fn new(basename: Option<&str>, backend_url: Option<&str>) -> Self {
        Self { basename: normalize_basename(basename.unwrap_or_default()), backend_url: normalize_backend_url(backend_url) }
    }

    /// Whether the account API is configured. Without it the app only renders
    /// an informational notice.
    pub fn is_configured(&self) -> bool {
        self.backend_url.is_some()
    }

    /// `POST` target for account creation.
    pub fn signup_endpoint(&self) -> Option<String> {
        self.endpoint("/api/signup")
    }

    /// `POST` target for credential exchange.
    pub fn login_endpoint(&self) -> Option<String> {
        self.endpoint("/api/login")
    }

    /// Browser URL for the in-app `path`, prefixed with the basename so the
    /// router intercepts the click instead of reloading the page.
    pub fn href(&self, path: &str) -> String {
        match path.trim_start_matches('/') {
            "" if self.basename.is_empty() => "/".to_owned(),
            "" => self.basename.clone(),
            rest => format!("{}/{rest}", self.basename),
        }
    }

    /// Remove the basename prefix from `path`, only at a segment boundary.
    pub fn strip_base<'a>(&self, path: &'a str) -> &'a str {
        if self.basename.is_empty() {
            return path;
        }
        match path.strip_prefix(self.basename.as_str()) {
            Some("") => "/",
            Some(rest) if rest.starts_with('/') => rest,
            _ => path,
        }
    }

    fn endpoint(&self, path: &str) -> Option<String> {
        self.backend_url.as_ref().map(|base| format!("{base}{path}"))
    }
}

fn normalize_basename(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    format!("/{trimmed}")
}

fn normalize_backend_url(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_owned())
}
