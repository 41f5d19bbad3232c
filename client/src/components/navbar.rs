//! Top navigation bar reflecting session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anonymous visitors get Sign Up / Login links; a visitor holding a token
//! gets a single Logout button. The token is re-read from storage on every
//! render since it can change outside this component (login page, another
//! tab sharing the session).

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::AppConfig;
use crate::state::auth::AuthState;
use crate::state::session::Session;
use crate::util::navigation::Redirect;

/// A navbar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Plain link; pushes history.
    Link { label: &'static str, href: &'static str },
    Logout,
}

/// Entries for the given token presence.
pub fn navbar_actions(authenticated: bool) -> Vec<NavAction> {
    if authenticated {
        vec![NavAction::Logout]
    } else {
        vec![
            NavAction::Link { label: "Sign Up", href: "/signup" },
            NavAction::Link { label: "Login", href: "/login" },
        ]
    }
}

/// Drop the session token and return the login redirect.
pub fn logout(session: &Session) -> Redirect {
    session.clear_token();
    Redirect::to_login()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let session = expect_context::<Session>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let brand_href = config.href("/");

    let authenticated = {
        let session = session.clone();
        move || auth.with(|state| state.authenticated(|| session.is_authenticated()))
    };

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let redirect = logout(&session);
        auth.update(AuthState::token_changed);
        redirect.execute(&navigate);
    };

    view! {
        <nav class="navbar">
            <a href=brand_href class="navbar__brand">"Authgate"</a>
            <div class="navbar__actions">
                {move || {
                    navbar_actions(authenticated())
                        .into_iter()
                        .map(|action| match action {
                            NavAction::Link { label, href } => view! {
                                <a href=config.href(href) class="navbar__link">
                                    <button class="btn" type="button">{label}</button>
                                </a>
                            }
                            .into_any(),
                            NavAction::Logout => view! {
                                <button class="btn btn--danger" type="button" on:click=on_logout.clone()>
                                    "Logout"
                                </button>
                            }
                            .into_any(),
                        })
                        .collect_view()
                }}
            </div>
        </nav>
    }
}
