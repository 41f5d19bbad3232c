//! Email/password inputs and feedback lines shared by signup and login.

use leptos::prelude::*;

use crate::state::credentials::CredentialForm;

/// Required email + password inputs bound to `form`.
#[component]
pub fn CredentialFields(form: RwSignal<CredentialForm>, id_prefix: &'static str) -> impl IntoView {
    let email_id = format!("{id_prefix}-email");
    let password_id = format!("{id_prefix}-password");

    view! {
        <div class="form-field">
            <label for=email_id.clone() class="form-label">"Email address"</label>
            <input
                id=email_id
                class="form-input"
                type="email"
                required=true
                prop:value=move || form.with(|f| f.email.clone())
                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
            />
            <p class="form-hint">"We'll never share your email with anyone else."</p>
        </div>
        <div class="form-field">
            <label for=password_id.clone() class="form-label">"Password"</label>
            <input
                id=password_id
                class="form-input"
                type="password"
                required=true
                prop:value=move || form.with(|f| f.password.clone())
                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
            />
        </div>
    }
}

/// Submit button, disabled while a request is in flight, plus feedback text.
#[component]
pub fn SubmitRow(form: RwSignal<CredentialForm>, label: &'static str) -> impl IntoView {
    let pending = move || form.with(|f| f.pending);

    view! {
        <button type="submit" class="btn btn--primary btn--block" disabled=pending>
            {move || if pending() { "Please wait..." } else { label }}
        </button>
        {move || {
            form.with(|f| f.error.clone())
                .map(|msg| view! { <p class="form-feedback form-feedback--error">{msg}</p> })
        }}
        {move || {
            form.with(|f| f.success.clone())
                .map(|msg| view! { <p class="form-feedback form-feedback--success">{msg}</p> })
        }}
    }
}
