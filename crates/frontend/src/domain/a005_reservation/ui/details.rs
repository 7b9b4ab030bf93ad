use chrono::NaiveDate;
use contracts::domain::a001_client::Client;
use contracts::domain::a003_room::Room;
use contracts::domain::a005_reservation::Reservation;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_client::api as client_api;
use crate::domain::a003_room::api as room_api;
use crate::domain::a005_reservation::api;
use crate::layout::notifications::{use_notifications, ReservationCreated};
use crate::shared::components::toast::use_toasts;
use crate::shared::icons::icon;

fn nights_between(start: &str, end: &str) -> Option<i64> {
    let desde = NaiveDate::parse_from_str(start.trim(), "%Y-%m-%d").ok()?;
    let hasta = NaiveDate::parse_from_str(end.trim(), "%Y-%m-%d").ok()?;
    let nights = (hasta - desde).num_days();
    (nights > 0).then_some(nights)
}

/// Modal form for creating or editing a reservation. The client and room
/// dropdowns are pre-populated with one parallel fan-out over both list
/// endpoints before the form becomes usable.
#[component]
pub fn ReservationForm(
    reservation_id: i32,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let clients: RwSignal<Vec<Client>> = RwSignal::new(Vec::new());
    let rooms: RwSignal<Vec<Room>> = RwSignal::new(Vec::new());
    let (options_ready, set_options_ready) = signal(false);

    let client_id = RwSignal::new(0_i32);
    let room_id = RwSignal::new(0_i32);
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let guest_count = RwSignal::new("1".to_string());
    let total = RwSignal::new(String::new());
    let (warning, set_warning) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let toasts = use_toasts();
    let bus = use_notifications();

    let is_new = reservation_id == 0;

    spawn_local(async move {
        let (clients_res, rooms_res) =
            futures::join!(client_api::fetch_all(), room_api::fetch_all());
        match (clients_res, rooms_res) {
            (Ok(client_list), Ok(room_list)) => {
                clients.set(client_list);
                rooms.set(room_list);
                set_options_ready.set(true);
            }
            (Err(e), _) | (_, Err(e)) => {
                set_warning.set(Some(format!("No se pudo cargar las opciones: {}", e)));
            }
        }

        if !is_new {
            match api::fetch_by_id(reservation_id).await {
                Ok(reservation) => {
                    client_id.set(reservation.client_id);
                    room_id.set(reservation.room_id);
                    start_date.set(reservation.start_date);
                    end_date.set(reservation.end_date);
                    guest_count.set(reservation.guest_count.to_string());
                    total.set(reservation.total_amount.to_string());
                }
                Err(e) => set_warning.set(Some(e)),
            }
        }
    });

    // Suggested total: nights x room price, recomputed when the room or the
    // dates change. The user can still overwrite the field afterwards.
    Effect::new(move |_| {
        let room = room_id.get();
        let start = start_date.get();
        let end = end_date.get();
        if let Some(nights) = nights_between(&start, &end) {
            let price = rooms
                .get_untracked()
                .iter()
                .find(|r| r.id == room)
                .map(|r| r.price_per_night);
            if let Some(price) = price {
                total.set(format!("{:.2}", price * nights as f64));
            }
        }
    });

    let on_save = move |_| {
        let guest_count_value = match guest_count.get().trim().parse::<i32>() {
            Ok(v) => v,
            Err(_) => {
                set_warning.set(Some("La cantidad de personas no es valida".to_string()));
                return;
            }
        };
        let total_value = match total.get().trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                set_warning.set(Some("El monto total no es un numero valido".to_string()));
                return;
            }
        };

        let selected_client = clients
            .get_untracked()
            .iter()
            .find(|c| c.id == client_id.get_untracked())
            .cloned();
        let selected_room = rooms
            .get_untracked()
            .iter()
            .find(|r| r.id == room_id.get_untracked())
            .cloned();

        let draft = Reservation {
            id: reservation_id,
            client_id: client_id.get(),
            client_name: selected_client
                .as_ref()
                .map(|c| c.full_name())
                .unwrap_or_default(),
            room_id: room_id.get(),
            room_number: selected_room
                .as_ref()
                .map(|r| r.number.clone())
                .unwrap_or_default(),
            start_date: start_date.get(),
            end_date: end_date.get(),
            guest_count: guest_count_value,
            total_amount: total_value,
        };

        if let Err(message) = draft.validate() {
            set_warning.set(Some(message));
            return;
        }

        set_saving.set(true);
        set_warning.set(None);
        spawn_local(async move {
            let result = if is_new {
                api::create(&draft).await
            } else {
                api::update(&draft).await
            };
            match result {
                Ok(()) => {
                    if is_new {
                        bus.publish(ReservationCreated {
                            client_name: draft.client_name.clone(),
                            room_number: draft.room_number.clone(),
                            start_date: draft.start_date.clone(),
                        });
                    }
                    toasts.success(if is_new {
                        "Reserva registrada"
                    } else {
                        "Reserva actualizada"
                    });
                    on_saved.run(());
                }
                Err(e) => {
                    toasts.error(format!("No se pudo guardar: {}", e));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{if is_new { "Nueva reserva" } else { "Editar reserva" }}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || warning.get().map(|w| view! { <div class="alert alert--warning">{w}</div> })}

                    <div class="form__group">
                        <Label>"Cliente"</Label>
                        <select
                            class="form__select"
                            disabled=move || !options_ready.get() || saving.get()
                            on:change=move |ev| {
                                client_id.set(event_target_value(&ev).parse().unwrap_or(0));
                            }
                            prop:value=move || client_id.get().to_string()
                        >
                            <option value="0">"-- Seleccionar --"</option>
                            <For
                                each=move || clients.get()
                                key=|c| c.id
                                children=move |client| {
                                    view! {
                                        <option value=client.id.to_string()>{client.full_name()}</option>
                                    }
                                }
                            />
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Habitacion"</Label>
                        <select
                            class="form__select"
                            disabled=move || !options_ready.get() || saving.get()
                            on:change=move |ev| {
                                room_id.set(event_target_value(&ev).parse().unwrap_or(0));
                            }
                            prop:value=move || room_id.get().to_string()
                        >
                            <option value="0">"-- Seleccionar --"</option>
                            <For
                                each=move || rooms.get()
                                key=|r| r.id
                                children=move |room| {
                                    view! {
                                        <option value=room.id.to_string()>{room.number.clone()}</option>
                                    }
                                }
                            />
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Fecha inicio"</Label>
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || start_date.get()
                            on:input=move |ev| start_date.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Fecha fin"</Label>
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || end_date.get()
                            on:input=move |ev| end_date.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        />
                    </div>
                    <div class="form__group">
                        <Label>"Cantidad de personas"</Label>
                        <Input value=guest_count disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Monto total"</Label>
                        <Input value=total disabled=Signal::derive(move || saving.get()) />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                        disabled=Signal::derive(move || saving.get())
                    >
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get() || !options_ready.get())
                    >
                        {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
