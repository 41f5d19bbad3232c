//! Login page exchanging email + password for a session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! A `200` carrying `access_token` is written through the injected `Session`,
//! `AuthState` is bumped so the navbar re-reads storage, and history is
//! replaced with the protected page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::credential_fields::{CredentialFields, SubmitRow};
use crate::config::AppConfig;
use crate::net::api::SubmitError;
use crate::state::auth::AuthState;
use crate::state::credentials::CredentialForm;
use crate::state::session::Session;

/// Persist a freshly issued token.
///
/// # Errors
///
/// A token that cannot be stored is reported as `Generic`: the user would
/// otherwise appear logged in and immediately bounce off the auth gate.
pub fn store_token(session: &Session, token: &str) -> Result<(), SubmitError> {
    session.set_token(token).map_err(|e| {
        leptos::logging::warn!("could not persist session token: {e}");
        SubmitError::Generic
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let session = expect_context::<Session>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let form = RwSignal::new(CredentialForm::default());
    let signup_href = config.href("/signup");

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(CredentialForm::begin_submit).flatten() else {
            return;
        };
        let Some(endpoint) = config.login_endpoint() else {
            form.update(|f| {
                f.finish_login(Err(SubmitError::Generic));
            });
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&endpoint, &credentials)
                    .await
                    .and_then(|token| store_token(&session, &token));
                match &result {
                    Ok(()) => auth.update(AuthState::token_changed),
                    Err(e) => leptos::logging::warn!("login failed: {e}"),
                }
                if let Some(redirect) = form.try_update(|f| f.finish_login(result)).flatten() {
                    redirect.execute(&navigate);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, &session, auth, endpoint, credentials);
        }
    };

    view! {
        <div class="page page--auth">
            <div class="auth-card">
                <h2 class="auth-card__title">"Login"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <CredentialFields form=form id_prefix="login"/>
                    <SubmitRow form=form label="Login"/>
                </form>
                <p class="auth-card__alt">"No account yet? " <a href=signup_href>"Sign up"</a></p>
            </div>
        </div>
    }
}
