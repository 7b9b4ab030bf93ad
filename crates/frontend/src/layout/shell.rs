use leptos::prelude::*;

use super::header::Header;
use super::sidebar::Sidebar;

/// Application frame: sidebar on the left, header on top, routed content
/// in the main area.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar />
            <div class="shell__main">
                <Header />
                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}
