use leptos::prelude::*;
use thaw::*;

use super::notifications::use_notifications;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

/// Top bar: reservation notification bell, session user, logout.
#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let bus = use_notifications();
    let events = bus.events();
    let (panel_open, set_panel_open) = signal(false);

    let username = move || {
        auth_state
            .get()
            .user
            .map(|u| format!("{} ({})", u.username, u.role))
            .unwrap_or_default()
    };

    let toggle_panel = move |_| {
        set_panel_open.update(|open| *open = !*open);
        if !panel_open.get_untracked() {
            // Closing the panel marks the buffered events as seen.
            bus.clear();
        }
    };

    view! {
        <header class="header">
            <div class="header__spacer"></div>
            <div class="header__right">
                <button class="header__bell" on:click=toggle_panel title="Nuevas reservas">
                    {icon("bell")}
                    {move || {
                        let count = events.get().len();
                        if count > 0 {
                            view! { <span class="header__badge">{count.to_string()}</span> }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </button>
                <span class="header__user">{username}</span>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| do_logout(set_auth_state)
                    attr:title="Salir"
                >
                    {icon("log-out")}
                </Button>
            </div>
            {move || if panel_open.get() {
                view! {
                    <div class="header__panel">
                        {move || {
                            let list = events.get();
                            if list.is_empty() {
                                view! { <p class="header__panel-empty">"Sin reservas nuevas"</p> }.into_any()
                            } else {
                                list.iter()
                                    .rev()
                                    .map(|e| view! {
                                        <p class="header__panel-item">
                                            {format!("Reserva de {} en hab. {} desde {}", e.client_name, e.room_number, e.start_date)}
                                        </p>
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </header>
    }
}
