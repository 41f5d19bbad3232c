//! Signup page posting email + password to the account API.
//!
//! SYSTEM CONTEXT
//! ==============
//! On `201 Created` the page shows a success line and pushes `/login`.
//! Failures stay on the page with the server's message or the generic error
//! text. The submit button is disabled while the request is in
//! flight, and requests time out after `api::REQUEST_TIMEOUT`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::credential_fields::{CredentialFields, SubmitRow};
use crate::config::AppConfig;
use crate::net::api::SubmitError;
use crate::state::credentials::CredentialForm;

#[component]
pub fn SignupPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();
    let form = RwSignal::new(CredentialForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(CredentialForm::begin_submit).flatten() else {
            return;
        };
        let Some(endpoint) = config.signup_endpoint() else {
            form.update(|f| {
                f.finish_signup(Err(SubmitError::Generic));
            });
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::signup(&endpoint, &credentials).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("signup failed: {e}");
                }
                if let Some(redirect) = form.try_update(|f| f.finish_signup(result)).flatten() {
                    redirect.execute(&navigate);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, endpoint, credentials);
        }
    };

    view! {
        <div class="page page--auth">
            <div class="auth-card">
                <h2 class="auth-card__title">"Sign Up"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <CredentialFields form=form id_prefix="signup"/>
                    <SubmitRow form=form label="Submit"/>
                </form>
            </div>
        </div>
    }
}
