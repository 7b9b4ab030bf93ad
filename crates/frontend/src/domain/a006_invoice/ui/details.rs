use contracts::domain::a005_reservation::Reservation;
use contracts::domain::a006_invoice::Invoice;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_reservation::api as reservation_api;
use crate::domain::a006_invoice::api;
use crate::shared::components::toast::use_toasts;
use crate::shared::icons::icon;

/// Modal form for invoices. Creation pre-checks `ExistePorReserva` so a
/// reservation is never invoiced twice; this is the only duplicate guard
/// in the system.
#[component]
pub fn InvoiceForm(invoice_id: i32, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let reservations: RwSignal<Vec<Reservation>> = RwSignal::new(Vec::new());
    let (options_ready, set_options_ready) = signal(false);

    let reservation_id = RwSignal::new(0_i32);
    let issue_date = RwSignal::new(String::new());
    let total = RwSignal::new(String::new());
    let paid = RwSignal::new(false);
    let (warning, set_warning) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let (calculating, set_calculating) = signal(false);
    let toasts = use_toasts();

    let is_new = invoice_id == 0;

    spawn_local(async move {
        match reservation_api::fetch_all().await {
            Ok(list) => {
                reservations.set(list);
                set_options_ready.set(true);
            }
            Err(e) => set_warning.set(Some(format!("No se pudo cargar las reservas: {}", e))),
        }

        if !is_new {
            match api::fetch_by_id(invoice_id).await {
                Ok(invoice) => {
                    reservation_id.set(invoice.reservation_id);
                    issue_date.set(invoice.issue_date);
                    total.set(invoice.total.to_string());
                    paid.set(invoice.paid);
                }
                Err(e) => set_warning.set(Some(e)),
            }
        }
    });

    // Ask the API for the reservation's computed total (nights plus services).
    let on_calculate = move |_| {
        let selected = reservation_id.get();
        if selected == 0 {
            set_warning.set(Some("Debe seleccionar una reserva".to_string()));
            return;
        }
        set_calculating.set(true);
        spawn_local(async move {
            match api::calculate_total(selected).await {
                Ok(amount) => total.set(format!("{:.2}", amount)),
                Err(e) => set_warning.set(Some(format!("No se pudo calcular el total: {}", e))),
            }
            set_calculating.set(false);
        });
    };

    let on_save = move |_| {
        let total_value = match total.get().trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                set_warning.set(Some("El total no es un numero valido".to_string()));
                return;
            }
        };

        let client_name = reservations
            .get_untracked()
            .iter()
            .find(|r| r.id == reservation_id.get_untracked())
            .map(|r| r.client_name.clone())
            .unwrap_or_default();

        let draft = Invoice {
            id: invoice_id,
            reservation_id: reservation_id.get(),
            client_name,
            issue_date: issue_date.get(),
            total: total_value,
            paid: paid.get(),
        };

        if let Err(message) = draft.validate() {
            set_warning.set(Some(message));
            return;
        }

        set_saving.set(true);
        set_warning.set(None);
        spawn_local(async move {
            if is_new {
                // Duplicate pre-check before issuing the POST.
                match api::exists_for_reservation(draft.reservation_id).await {
                    Ok(true) => {
                        set_warning.set(Some(
                            "Ya existe una factura para esta reserva".to_string(),
                        ));
                        set_saving.set(false);
                        return;
                    }
                    Ok(false) => {}
                    Err(e) => {
                        set_warning.set(Some(format!("No se pudo verificar la reserva: {}", e)));
                        set_saving.set(false);
                        return;
                    }
                }
            }

            let result = if is_new {
                api::create(&draft).await
            } else {
                api::update(&draft).await
            };
            match result {
                Ok(()) => {
                    toasts.success(if is_new {
                        "Factura registrada"
                    } else {
                        "Factura actualizada"
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
                    <h2 class="modal-title">{if is_new { "Nueva factura" } else { "Editar factura" }}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || warning.get().map(|w| view! { <div class="alert alert--warning">{w}</div> })}

                    <div class="form__group">
                        <Label>"Reserva"</Label>
                        <select
                            class="form__select"
                            disabled=move || !options_ready.get() || saving.get() || !is_new
                            on:change=move |ev| {
                                reservation_id.set(event_target_value(&ev).parse().unwrap_or(0));
                            }
                            prop:value=move || reservation_id.get().to_string()
                        >
                            <option value="0">"-- Seleccionar --"</option>
                            <For
                                each=move || reservations.get()
                                key=|r| r.id
                                children=move |reservation| {
                                    let label = format!(
                                        "{} - hab. {} ({})",
                                        reservation.client_name, reservation.room_number, reservation.start_date
                                    );
                                    view! {
                                        <option value=reservation.id.to_string()>{label}</option>
                                    }
                                }
                            />
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Fecha de emision"</Label>
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || issue_date.get()
                            on:input=move |ev| issue_date.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        />
                    </div>

                    <div class="form__group form__group--inline">
                        <div style="flex: 1;">
                            <Label>"Total"</Label>
                            <Input value=total disabled=Signal::derive(move || saving.get()) />
                        </div>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=on_calculate
                            disabled=Signal::derive(move || calculating.get() || saving.get())
                        >
                            {move || if calculating.get() { "Calculando..." } else { "Calcular" }}
                        </Button>
                    </div>

                    <div class="form__group">
                        <Checkbox checked=paid label="Pagada" />
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
