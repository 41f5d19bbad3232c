//! Detail page for one demo entry, keyed by the `:id` path segment.

use leptos::prelude::*;

use super::demo::DEMO_ITEMS;
use crate::config::AppConfig;

#[component]
pub fn SinglePage(id: String) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let title = DEMO_ITEMS
        .iter()
        .find(|(item_id, _)| *item_id == id)
        .map_or("Unknown item", |(_, title)| *title);

    view! {
        <div class="page page--single">
            <h1>{title}</h1>
            <p>"This will show the demo element: " <strong>{id}</strong></p>
            <a href=config.href("/demo") class="btn">"Back to demo"</a>
        </div>
    }
}
