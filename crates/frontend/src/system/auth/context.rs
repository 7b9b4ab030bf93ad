use contracts::system::auth::SessionUser;
use leptos::prelude::*;

use super::storage;

/// Authentication state for the whole app. The session storage pair is the
/// backing store; this context only mirrors it for reactive rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
}

/// Auth context provider component, installed at the composition root.
/// Restores the session from session storage on mount, so a page reload
/// within the same tab keeps the user signed in.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        user: storage::load_session(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Perform logout: clear the session pair and the reactive state.
/// Takes the setter so callers can capture it at render time.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
