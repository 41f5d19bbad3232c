//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::{auth_gate::AuthGate, navbar::Navbar};
use crate::config::AppConfig;
use crate::pages::{
    backend_notice::BackendUrlNotice, demo::DemoPage, home::HomePage, login::LoginPage, not_found::NotFoundPage,
    protected::ProtectedPage, signup::SignupPage, single::SinglePage,
};
use crate::routes::{ROUTE_TABLE, RouteMatch, SINGLE_ID_PARAM, ViewKind, resolve};
use crate::state::auth::AuthState;
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the config, the session capability and the reactive auth state,
/// then mounts the router. Without a configured backend URL the whole app
/// degrades to a single notice.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    if !config.is_configured() {
        leptos::logging::warn!("BACKEND_URL not set at build time; rendering notice only");
        return view! {
            <Title text="Authgate"/>
            <BackendUrlNotice/>
        }
        .into_any();
    }

    let auth = RwSignal::new(AuthState::default());
    provide_context(config.clone());
    provide_context(Session::browser());
    provide_context(auth);

    // Effects only run in the browser, after hydration.
    Effect::new(move || auth.update(AuthState::hydrated));

    view! {
        <Stylesheet id="leptos" href="/pkg/authgate.css"/>
        <Title text="Authgate"/>

        <Router base=config.basename>
            <Navbar/>
            <main>
                <Routes fallback=|| view! { <RouteOutlet/> }>
                    <Route path=StaticSegment("") view=RouteOutlet/>
                    <Route path=WildcardSegment("path") view=RouteOutlet/>
                </Routes>
            </main>
        </Router>
    }
    .into_any()
}

/// Dispatches the current location through [`ROUTE_TABLE`].
///
/// The resolved route is memoized, so the page view is rebuilt (and any
/// `AuthGate` inside it remounted) only when the match changes.
#[component]
fn RouteOutlet() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let location = use_location();
    let route = Memo::new(move |_| resolve(ROUTE_TABLE, config.strip_base(&location.pathname.get())));

    move || render_route(route.get())
}

fn render_route(route: RouteMatch) -> AnyView {
    match route.view {
        ViewKind::Home => view! { <HomePage/> }.into_any(),
        ViewKind::Demo => view! { <DemoPage/> }.into_any(),
        ViewKind::Single => {
            let id = route.param(SINGLE_ID_PARAM).unwrap_or_default().to_owned();
            view! { <SinglePage id=id/> }.into_any()
        }
        ViewKind::Signup => view! { <SignupPage/> }.into_any(),
        ViewKind::Login => view! { <LoginPage/> }.into_any(),
        ViewKind::Protected => view! {
            <AuthGate>
                <ProtectedPage/>
            </AuthGate>
        }
        .into_any(),
        ViewKind::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
