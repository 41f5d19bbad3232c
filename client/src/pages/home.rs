//! Landing page.

use leptos::prelude::*;

use crate::config::AppConfig;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<AppConfig>();

    view! {
        <div class="page page--home">
            <h1>"Welcome"</h1>
            <p>"Create an account, sign in, then visit the protected page."</p>
            <p>
                <a href=config.href("/demo") class="btn">"Browse the demo"</a>
                " "
                <a href=config.href("/protected") class="btn">"Protected page"</a>
            </p>
        </div>
    }
}
