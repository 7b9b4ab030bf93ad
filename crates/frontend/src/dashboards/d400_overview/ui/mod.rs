use contracts::dashboards::d400_overview::DashboardSummary;
use contracts::domain::a005_reservation::Reservation;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d400_overview::api;
use crate::domain::a005_reservation::api as reservation_api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{format_date, format_money};

const RECENT_LIMIT: usize = 5;

/// Overview dashboard: aggregate counters plus the latest reservations.
/// Both reads are issued as one parallel fan-out.
#[component]
pub fn OverviewPage() -> impl IntoView {
    let summary = RwSignal::new(DashboardSummary::default());
    let recent: RwSignal<Vec<Reservation>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        let (summary_res, reservations_res) =
            futures::join!(api::fetch_summary(), reservation_api::fetch_all());

        match summary_res {
            Ok(data) => summary.set(data),
            Err(e) => set_error.set(Some(format!("No se pudo cargar el resumen: {}", e))),
        }
        match reservations_res {
            Ok(mut list) => {
                // The API returns the list in insertion order; newest last.
                list.reverse();
                list.truncate(RECENT_LIMIT);
                recent.set(list);
            }
            Err(e) => set_error.set(Some(format!("No se pudo cargar las reservas: {}", e))),
        }
        set_loading.set(false);
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Resumen"</h1>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="stat-grid">
                <StatCard
                    title="Clientes"
                    value=Signal::derive(move || summary.get().total_clients.to_string())
                    icon_name="clients"
                />
                <StatCard
                    title="Empleados"
                    value=Signal::derive(move || summary.get().total_employees.to_string())
                    icon_name="employees"
                />
                <StatCard
                    title="Habitaciones disponibles"
                    value=Signal::derive(move || summary.get().available_rooms.to_string())
                    icon_name="rooms"
                />
                <StatCard
                    title="Reservas activas"
                    value=Signal::derive(move || summary.get().active_reservations.to_string())
                    icon_name="reservations"
                />
                <StatCard
                    title="Ingresos del mes"
                    value=Signal::derive(move || format_money(summary.get().month_income))
                    icon_name="trending-up"
                />
            </div>

            <h2 class="page__subtitle">"Ultimas reservas"</h2>
            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Cliente"</TableHeaderCell>
                            <TableHeaderCell>"Habitacion"</TableHeaderCell>
                            <TableHeaderCell>"Inicio"</TableHeaderCell>
                            <TableHeaderCell>"Fin"</TableHeaderCell>
                            <TableHeaderCell>"Monto"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || recent.get()
                            key=|r| r.id
                            children=move |reservation| {
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{reservation.client_name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{reservation.room_number.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(&reservation.start_date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(&reservation.end_date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_money(reservation.total_amount)}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
                {move || if !loading.get() && recent.get().is_empty() {
                    view! { <p class="page__empty">"Sin reservas registradas"</p> }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}
            </div>
        </div>
    }
}
