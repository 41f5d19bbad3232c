use super::*;
use crate::routes::{ROUTE_TABLE, ViewKind, resolve};
use crate::state::session::MemorySessionStore;
use crate::util::navigation::{HistoryMode, LOGIN_PATH};

fn labels(actions: &[NavAction]) -> Vec<&'static str> {
    actions
        .iter()
        .map(|a| match a {
            NavAction::Link { label, .. } => *label,
            NavAction::Logout => "Logout",
        })
        .collect()
}

#[test]
fn anonymous_sees_signup_and_login_links() {
    let actions = navbar_actions(false);
    assert_eq!(labels(&actions), vec!["Sign Up", "Login"]);
    assert!(!actions.contains(&NavAction::Logout));
    assert!(actions.contains(&NavAction::Link { label: "Sign Up", href: "/signup" }));
    assert!(actions.contains(&NavAction::Link { label: "Login", href: "/login" }));
}

#[test]
fn authenticated_sees_only_logout() {
    assert_eq!(navbar_actions(true), vec![NavAction::Logout]);
}

#[test]
fn logout_clears_token_and_redirects_to_login() {
    let session = Session::new(MemorySessionStore::with_token("t"));

    let redirect = logout(&session);

    assert_eq!(session.get_token(), None);
    assert_eq!(redirect.path, LOGIN_PATH);
    assert_eq!(redirect.mode, HistoryMode::Replace);
}

#[test]
fn actions_follow_token_changes_between_renders() {
    let session = Session::new(MemorySessionStore::new());
    assert_eq!(navbar_actions(session.is_authenticated()).len(), 2);

    session.set_token("t").unwrap();
    assert_eq!(navbar_actions(session.is_authenticated()), vec![NavAction::Logout]);
}

#[test]
fn links_stay_inside_basename() {
    let config = AppConfig::new(Some("/app"), Some("http://localhost:3001"));

    let hrefs: Vec<String> = navbar_actions(false)
        .iter()
        .filter_map(|a| match a {
            NavAction::Link { href, .. } => Some(config.href(href)),
            NavAction::Logout => None,
        })
        .collect();

    assert_eq!(hrefs, vec!["/app/signup".to_owned(), "/app/login".to_owned()]);
    let views: Vec<ViewKind> = hrefs.iter().map(|h| resolve(ROUTE_TABLE, config.strip_base(h)).view).collect();
    assert_eq!(views, vec![ViewKind::Signup, ViewKind::Login]);
}
