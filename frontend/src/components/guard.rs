use crate::{
    components::layout::LoadingSpinner,
    state::auth::{use_auth, AuthState},
    utils::navigation,
};
use leptos::*;

/// What a protected route shows for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionGate {
    /// `/auth/me` has not answered yet.
    Checking,
    Open,
    SignedOut,
}

impl SessionGate {
    fn of(state: &AuthState) -> Self {
        match (state.loading, state.is_authenticated) {
            (true, _) => SessionGate::Checking,
            (false, true) => SessionGate::Open,
            (false, false) => SessionGate::SignedOut,
        }
    }
}

/// Renders its children for a signed-in session and sends everyone else to
/// the login page once the session check settles.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let gate = create_memo(move |_| auth.with(SessionGate::of));
    create_effect(move |_| {
        if gate.get() == SessionGate::SignedOut {
            log::debug!("no session, leaving protected route");
            navigation::redirect_to_login();
        }
    });
    view! {
        <Show
            when=move || gate.get() == SessionGate::Open
            fallback=move || match gate.get() {
                SessionGate::Checking => view! { <LoadingSpinner /> }.into_view(),
                _ => ().into_view(),
            }
        >
            {children()}
        </Show>
    }
}
