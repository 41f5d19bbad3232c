//! Demo listing linking into the parameterized `/single/:id` route.

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

use leptos::prelude::*;

use crate::config::AppConfig;

/// Fixed demo entries as `(id, title)`.
pub const DEMO_ITEMS: &[(&str, &str)] = &[("1", "First item"), ("2", "Second item"), ("3", "Third item")];

pub(crate) fn single_href(id: &str) -> String {
    format!("/single/{id}")
}

#[component]
pub fn DemoPage() -> impl IntoView {
    let config = expect_context::<AppConfig>();

    view! {
        <div class="page page--demo">
            <h1>"Demo"</h1>
            <ul class="demo-list">
                {DEMO_ITEMS
                    .iter()
                    .map(|(id, title)| {
                        view! {
                            <li class="demo-list__item">
                                <span>{*title}</span>
                                " "
                                <a href=config.href(&single_href(id))>"Open"</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <a href=config.href("/") class="btn">"Back home"</a>
        </div>
    }
}
