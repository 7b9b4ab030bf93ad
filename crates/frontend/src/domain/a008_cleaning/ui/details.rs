use contracts::domain::a002_employee::Employee;
use contracts::domain::a003_room::Room;
use contracts::domain::a008_cleaning::{Cleaning, CLEANING_STATES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_employee::api as employee_api;
use crate::domain::a003_room::api as room_api;
use crate::domain::a008_cleaning::api;
use crate::shared::components::toast::use_toasts;
use crate::shared::icons::icon;

/// Modal form for cleaning tasks. Room and employee dropdowns load with one
/// parallel fan-out before the form becomes usable.
#[component]
pub fn CleaningForm(
    cleaning_id: i32,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let rooms: RwSignal<Vec<Room>> = RwSignal::new(Vec::new());
    let employees: RwSignal<Vec<Employee>> = RwSignal::new(Vec::new());
    let (options_ready, set_options_ready) = signal(false);

    let room_id = RwSignal::new(0_i32);
    let employee_id = RwSignal::new(0_i32);
    let date = RwSignal::new(String::new());
    let task_state = RwSignal::new(CLEANING_STATES[0].to_string());
    let (warning, set_warning) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let toasts = use_toasts();

    let is_new = cleaning_id == 0;

    spawn_local(async move {
        let (rooms_res, employees_res) =
            futures::join!(room_api::fetch_all(), employee_api::fetch_all());
        match (rooms_res, employees_res) {
            (Ok(room_list), Ok(employee_list)) => {
                rooms.set(room_list);
                employees.set(employee_list);
                set_options_ready.set(true);
            }
            (Err(e), _) | (_, Err(e)) => {
                set_warning.set(Some(format!("No se pudo cargar las opciones: {}", e)));
            }
        }

        if !is_new {
            match api::fetch_by_id(cleaning_id).await {
                Ok(cleaning) => {
                    room_id.set(cleaning.room_id);
                    employee_id.set(cleaning.employee_id);
                    date.set(cleaning.date);
                    task_state.set(cleaning.state);
                }
                Err(e) => set_warning.set(Some(e)),
            }
        }
    });

    let on_save = move |_| {
        let room_number = rooms
            .get_untracked()
            .iter()
            .find(|r| r.id == room_id.get_untracked())
            .map(|r| r.number.clone())
            .unwrap_or_default();
        let employee_name = employees
            .get_untracked()
            .iter()
            .find(|e| e.id == employee_id.get_untracked())
            .map(|e| e.full_name.clone())
            .unwrap_or_default();

        let draft = Cleaning {
            id: cleaning_id,
            room_id: room_id.get(),
            room_number,
            employee_id: employee_id.get(),
            employee_name,
            date: date.get(),
            state: task_state.get(),
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
                        "Limpieza registrada"
                    } else {
                        "Limpieza actualizada"
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
                    <h2 class="modal-title">{if is_new { "Nueva limpieza" } else { "Editar limpieza" }}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || warning.get().map(|w| view! { <div class="alert alert--warning">{w}</div> })}

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
                        <Label>"Empleado"</Label>
                        <select
                            class="form__select"
                            disabled=move || !options_ready.get() || saving.get()
                            on:change=move |ev| {
                                employee_id.set(event_target_value(&ev).parse().unwrap_or(0));
                            }
                            prop:value=move || employee_id.get().to_string()
                        >
                            <option value="0">"-- Seleccionar --"</option>
                            <For
                                each=move || employees.get()
                                key=|e| e.id
                                children=move |employee| {
                                    view! {
                                        <option value=employee.id.to_string()>{employee.full_name.clone()}</option>
                                    }
                                }
                            />
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Fecha"</Label>
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || date.get()
                            on:input=move |ev| date.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Estado"</Label>
                        <select
                            class="form__select"
                            on:change=move |ev| task_state.set(event_target_value(&ev))
                            prop:value=move || task_state.get()
                        >
                            {CLEANING_STATES.iter().map(|&s| {
                                view! {
                                    <option value=s selected=move || task_state.get() == s>{s}</option>
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
                        disabled=Signal::derive(move || saving.get() || !options_ready.get())
                    >
                        {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
