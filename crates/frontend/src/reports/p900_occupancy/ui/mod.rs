use contracts::domain::a003_room::{OccupiedRange, Room};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_room::api as room_api;
use crate::shared::date_utils::format_date;

/// Occupancy report: pick a room and list its occupied date ranges.
#[component]
pub fn OccupancyReportPage() -> impl IntoView {
    let rooms: RwSignal<Vec<Room>> = RwSignal::new(Vec::new());
    let ranges: RwSignal<Vec<OccupiedRange>> = RwSignal::new(Vec::new());
    let selected_room = RwSignal::new(0_i32);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (consulted, set_consulted) = signal(false);

    spawn_local(async move {
        match room_api::fetch_all().await {
            Ok(list) => rooms.set(list),
            Err(e) => set_error.set(Some(format!("No se pudo cargar las habitaciones: {}", e))),
        }
    });

    let load_ranges = move |room_id: i32| {
        if room_id == 0 {
            ranges.set(Vec::new());
            set_consulted.set(false);
            return;
        }
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match room_api::fetch_occupied_ranges(room_id).await {
                Ok(list) => {
                    ranges.set(list);
                    set_consulted.set(true);
                }
                Err(e) => set_error.set(Some(format!("No se pudo cargar la ocupacion: {}", e))),
            }
            set_loading.set(false);
        });
    };

    let total_nights = move || ranges.get().iter().map(|r| r.nights()).sum::<i64>();

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Informe de ocupacion"</h1>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="filter-panel">
                <div class="form__group">
                    <Label>"Habitacion"</Label>
                    <select
                        class="form__select"
                        disabled=move || loading.get()
                        on:change=move |ev| {
                            let room_id = event_target_value(&ev).parse().unwrap_or(0);
                            selected_room.set(room_id);
                            load_ranges(room_id);
                        }
                        prop:value=move || selected_room.get().to_string()
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
            </div>

            {move || if consulted.get() {
                view! {
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Desde"</TableHeaderCell>
                                    <TableHeaderCell>"Hasta"</TableHeaderCell>
                                    <TableHeaderCell>"Noches"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || ranges.get().into_iter().enumerate()
                                    key=|(i, _)| *i
                                    children=move |(_, range)| {
                                        let start_date = format_date(&range.start_date);
                                        let end_date = format_date(&range.end_date);
                                        let nights = range.nights().to_string();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>{start_date}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{end_date}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{nights}</TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </TableBody>
                        </Table>
                        {move || if ranges.get().is_empty() {
                            view! { <p class="page__empty">"La habitacion no tiene fechas ocupadas"</p> }.into_any()
                        } else {
                            view! {
                                <p class="page__totals">
                                    {format!("Total de noches ocupadas: {}", total_nights())}
                                </p>
                            }.into_any()
                        }}
                    </div>
                }.into_any()
            } else {
                view! { <p class="page__empty">"Seleccione una habitacion para consultar su ocupacion"</p> }.into_any()
            }}
        </div>
    }
}
