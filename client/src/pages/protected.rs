//! Placeholder content shown only behind `AuthGate`.

use leptos::prelude::*;

#[component]
pub fn ProtectedPage() -> impl IntoView {
    view! {
        <div class="page page--protected">
            <h1>"This is the protected route!"</h1>
        </div>
    }
}
