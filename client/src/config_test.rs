use super::*;

// =============================================================
// Normalization
// =============================================================

#[test]
fn empty_values_leave_app_unconfigured() {
    let config = AppConfig::new(None, None);
    assert_eq!(config.basename, "");
    assert!(!config.is_configured());
    assert_eq!(config.signup_endpoint(), None);
}

#[test]
fn blank_backend_url_counts_as_unset() {
    let config = AppConfig::new(None, Some("   "));
    assert!(!config.is_configured());
}

#[test]
fn backend_url_trailing_slash_trimmed() {
    let config = AppConfig::new(None, Some("https://api.example.test/"));
    assert_eq!(config.signup_endpoint().as_deref(), Some("https://api.example.test/api/signup"));
    assert_eq!(config.login_endpoint().as_deref(), Some("https://api.example.test/api/login"));
}

#[test]
fn basename_gains_leading_slash_and_loses_trailing() {
    assert_eq!(AppConfig::new(Some("app/"), None).basename, "/app");
    assert_eq!(AppConfig::new(Some("/app"), None).basename, "/app");
    assert_eq!(AppConfig::new(Some("/"), None).basename, "");
}

// =============================================================
// strip_base
// =============================================================

#[test]
fn strip_base_without_basename_is_identity() {
    let config = AppConfig::new(None, None);
    assert_eq!(config.strip_base("/demo"), "/demo");
}

#[test]
fn strip_base_removes_prefix_at_segment_boundary() {
    let config = AppConfig::new(Some("/app"), None);
    assert_eq!(config.strip_base("/app/single/42"), "/single/42");
    assert_eq!(config.strip_base("/app"), "/");
}

#[test]
fn strip_base_ignores_partial_segment_match() {
    let config = AppConfig::new(Some("/app"), None);
    assert_eq!(config.strip_base("/application"), "/application");
    assert_eq!(config.strip_base("/demo"), "/demo");
}

// =============================================================
// href
// =============================================================

#[test]
fn href_without_basename_is_the_path() {
    let config = AppConfig::new(None, None);
    assert_eq!(config.href("/signup"), "/signup");
    assert_eq!(config.href("/"), "/");
}

#[test]
fn href_prefixes_basename() {
    let config = AppConfig::new(Some("/app"), None);
    assert_eq!(config.href("/signup"), "/app/signup");
    assert_eq!(config.href("/single/2"), "/app/single/2");
    assert_eq!(config.href("/"), "/app");
}

#[test]
fn href_round_trips_through_strip_base() {
    let config = AppConfig::new(Some("/app"), None);
    for path in ["/", "/demo", "/single/7", "/login"] {
        assert_eq!(config.strip_base(&config.href(path)), path);
    }
}
