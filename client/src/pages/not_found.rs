//! Wildcard fallback. Static; never redirects.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    // The status can only be set while rendering the initial request on the
    // server; client-side navigations to an unknown path keep the 200.
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="page page--not-found">
            <h1>"Not found!"</h1>
        </div>
    }
}
