use contracts::domain::a006_invoice::Invoice;
use contracts::domain::a007_payment::{Payment, PAYMENT_METHODS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a006_invoice::api as invoice_api;
use crate::domain::a007_payment::api;
use crate::shared::components::toast::use_toasts;
use crate::shared::date_utils::format_money;
use crate::shared::icons::icon;

#[component]
pub fn PaymentForm(payment_id: i32, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let invoices: RwSignal<Vec<Invoice>> = RwSignal::new(Vec::new());
    let (options_ready, set_options_ready) = signal(false);

    let invoice_id = RwSignal::new(0_i32);
    let amount = RwSignal::new(String::new());
    let payment_date = RwSignal::new(String::new());
    let method = RwSignal::new(PAYMENT_METHODS[0].to_string());
    let (warning, set_warning) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let toasts = use_toasts();

    let is_new = payment_id == 0;

    spawn_local(async move {
        match invoice_api::fetch_all().await {
            Ok(list) => {
                invoices.set(list);
                set_options_ready.set(true);
            }
            Err(e) => set_warning.set(Some(format!("No se pudo cargar las facturas: {}", e))),
        }

        if !is_new {
            match api::fetch_by_id(payment_id).await {
                Ok(payment) => {
                    invoice_id.set(payment.invoice_id);
                    amount.set(payment.amount.to_string());
                    payment_date.set(payment.payment_date);
                    method.set(payment.method);
                }
                Err(e) => set_warning.set(Some(e)),
            }
        }
    });

    let on_save = move |_| {
        let amount_value = match amount.get().trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                set_warning.set(Some("El monto no es un numero valido".to_string()));
                return;
            }
        };

        let client_name = invoices
            .get_untracked()
            .iter()
            .find(|i| i.id == invoice_id.get_untracked())
            .map(|i| i.client_name.clone())
            .unwrap_or_default();

        let draft = Payment {
            id: payment_id,
            invoice_id: invoice_id.get(),
            client_name,
            amount: amount_value,
            payment_date: payment_date.get(),
            method: method.get(),
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
                        "Pago registrado"
                    } else {
                        "Pago actualizado"
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
                    <h2 class="modal-title">{if is_new { "Nuevo pago" } else { "Editar pago" }}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || warning.get().map(|w| view! { <div class="alert alert--warning">{w}</div> })}

                    <div class="form__group">
                        <Label>"Factura"</Label>
                        <select
                            class="form__select"
                            disabled=move || !options_ready.get() || saving.get()
                            on:change=move |ev| {
                                invoice_id.set(event_target_value(&ev).parse().unwrap_or(0));
                            }
                            prop:value=move || invoice_id.get().to_string()
                        >
                            <option value="0">"-- Seleccionar --"</option>
                            <For
                                each=move || invoices.get()
                                key=|i| i.id
                                children=move |invoice| {
                                    let label = format!(
                                        "F-{:05} - {} ({})",
                                        invoice.id,
                                        invoice.client_name,
                                        format_money(invoice.total)
                                    );
                                    view! {
                                        <option value=invoice.id.to_string()>{label}</option>
                                    }
                                }
                            />
                        </select>
                    </div>

                    <div class="form__group">
                        <Label>"Monto"</Label>
                        <Input value=amount disabled=Signal::derive(move || saving.get()) />
                    </div>

                    <div class="form__group">
                        <Label>"Fecha de pago"</Label>
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || payment_date.get()
                            on:input=move |ev| payment_date.set(event_target_value(&ev))
                            disabled=move || saving.get()
                        />
                    </div>

                    <div class="form__group">
                        <Label>"Metodo de pago"</Label>
                        <select
                            class="form__select"
                            on:change=move |ev| method.set(event_target_value(&ev))
                            prop:value=move || method.get()
                        >
                            {PAYMENT_METHODS.iter().map(|&m| {
                                view! {
                                    <option value=m selected=move || method.get() == m>{m}</option>
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
