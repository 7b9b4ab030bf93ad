use contracts::domain::a003_room::{Room, ROOM_STATES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_room::api;
use crate::shared::components::toast::use_toasts;
use crate::shared::icons::icon;

#[component]
pub fn RoomForm(room_id: i32, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let number = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let room_state = RwSignal::new(ROOM_STATES[0].to_string());
    let (warning, set_warning) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let toasts = use_toasts();

    let is_new = room_id == 0;

    if !is_new {
        spawn_local(async move {
            match api::fetch_by_id(room_id).await {
                Ok(room) => {
                    number.set(room.number);
                    description.set(room.description);
                    price.set(room.price_per_night.to_string());
                    room_state.set(room.state);
                }
                Err(e) => set_warning.set(Some(e)),
            }
        });
    }

    let on_save = move |_| {
        let price_value = match price.get().trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                set_warning.set(Some("El precio no es un numero valido".to_string()));
                return;
            }
        };

        let draft = Room {
            id: room_id,
            number: number.get(),
            description: description.get(),
            price_per_night: price_value,
            state: room_state.get(),
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
                    toasts.success(if is_new {
                        "Habitacion registrada"
                    } else {
                        "Habitacion actualizada"
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
                    <h2 class="modal-title">{if is_new { "Nueva habitacion" } else { "Editar habitacion" }}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || warning.get().map(|w| view! { <div class="alert alert--warning">{w}</div> })}

                    <div class="form__group">
                        <Label>"Numero"</Label>
                        <Input value=number disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Descripcion"</Label>
                        <Textarea value=description disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Precio por noche"</Label>
                        <Input value=price disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Estado"</Label>
                        <select
                            class="form__select"
                            on:change=move |ev| room_state.set(event_target_value(&ev))
                            prop:value=move || room_state.get()
                        >
                            {ROOM_STATES.iter().map(|&s| {
                                view! {
                                    <option value=s selected=move || room_state.get() == s>{s}</option>
                                }
                            }).collect_view()}
                        </select>
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
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
