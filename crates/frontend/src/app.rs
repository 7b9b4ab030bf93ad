use leptos::prelude::*;

use crate::layout::notifications::NotificationBus;
use crate::routes::routes::AppRoutes;
use crate::shared::components::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    // Cross-screen services live in context, installed once at the root:
    // the reservation notification bus and the toast stack.
    provide_context(NotificationBus::new());
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
            <ToastHost />
        </AuthProvider>
    }
}
