//! Route guard that requires a session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps views that must not be shown to anonymous visitors. The check runs
//! once per mount: the gate starts in `Checking`, reads the token, and settles
//! in `Resolved`. Later renders do not re-check; a route change remounts the
//! gate and starts over.
//!
//! Nothing is rendered until the gate resolves as authorized, so server
//! rendering (where storage is unreadable) never emits wrapped content.

#[cfg(test)]
#[path = "auth_gate_test.rs"]
mod auth_gate_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::navigation::Redirect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    Authorized,
    /// Anonymous; a login redirect was issued.
    Redirected,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Checking,
    Resolved(GateOutcome),
}

/// One-shot token check for a single mount of the gate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthGateMachine {
    state: GateState,
}

impl AuthGateMachine {
    pub fn state(&self) -> GateState {
        self.state
    }

    /// Run the mount-time check. Only the first call has an effect; it returns
    /// the login redirect when no token is present.
    pub fn mount(&mut self, session: &Session) -> Option<Redirect> {
        if self.state != GateState::Checking {
            return None;
        }
        if session.is_authenticated() {
            self.state = GateState::Resolved(GateOutcome::Authorized);
            None
        } else {
            self.state = GateState::Resolved(GateOutcome::Redirected);
            Some(Redirect::to_login())
        }
    }

    /// Whether wrapped content may be shown.
    pub fn renders_content(&self) -> bool {
        self.state == GateState::Resolved(GateOutcome::Authorized)
    }
}

/// Render `children` only for visitors holding a session token.
#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let gate = RwSignal::new(AuthGateMachine::default());

    // Reads are untracked so the effect runs exactly once for this mount.
    Effect::new(move || {
        let mut machine = gate.get_untracked();
        let redirect = machine.mount(&session);
        gate.set(machine);
        if let Some(redirect) = redirect {
            redirect.execute(&navigate);
        }
    });

    view! {
        <Show when=move || gate.with(AuthGateMachine::renders_content)>
            {children()}
        </Show>
    }
}
