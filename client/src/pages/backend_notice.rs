//! Informational view rendered instead of the router when `BACKEND_URL` was
//! not set at build time.

use leptos::prelude::*;

#[component]
pub fn BackendUrlNotice() -> impl IntoView {
    view! {
        <div class="page page--backend-notice">
            <h1>"Missing BACKEND_URL"</h1>
            <p>
                "The account API location was not configured when this bundle was built. "
                "Set "
                <code>"BACKEND_URL"</code>
                " (for example "
                <code>"http://localhost:3001"</code>
                ") and rebuild."
            </p>
        </div>
    }
}
