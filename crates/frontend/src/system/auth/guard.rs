use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::storage;

/// True iff `role` is a literal member of `permitted`. An absent role is
/// treated the same as a wrong one.
pub fn allowed(role: Option<&str>, permitted: &[&str]) -> bool {
    match role {
        Some(role) => permitted.iter().any(|p| *p == role),
        None => false,
    }
}

/// Route guard: renders its children only when the session role is in the
/// allow-list, otherwise redirects to the "not authorized" page. The role
/// is re-read from session storage on every navigation into the route.
#[component]
pub fn RequireRole(permitted: Vec<&'static str>, children: ChildrenFn) -> impl IntoView {
    let is_allowed = allowed(storage::get_role().as_deref(), &permitted);

    view! {
        <Show
            when=move || is_allowed
            fallback=|| view! { <Redirect path="/no-autorizado" /> }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::allowed;
    use contracts::system::auth::{ROLE_ADMIN, ROLE_RECEPTIONIST};

    #[test]
    fn member_role_is_allowed() {
        assert!(allowed(Some(ROLE_ADMIN), &[ROLE_ADMIN, ROLE_RECEPTIONIST]));
        assert!(allowed(Some(ROLE_RECEPTIONIST), &[ROLE_RECEPTIONIST]));
    }

    #[test]
    fn non_member_role_is_rejected() {
        assert!(!allowed(Some(ROLE_RECEPTIONIST), &[ROLE_ADMIN]));
        assert!(!allowed(Some("Gerente"), &[ROLE_ADMIN, ROLE_RECEPTIONIST]));
    }

    #[test]
    fn absent_role_is_rejected() {
        assert!(!allowed(None, &[ROLE_ADMIN, ROLE_RECEPTIONIST]));
    }

    #[test]
    fn comparison_is_exact_not_substring() {
        assert!(!allowed(Some("Admin"), &[ROLE_ADMIN]));
    }
}
