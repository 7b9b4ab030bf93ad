use contracts::domain::a007_payment::Payment;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::PaymentForm;
use crate::domain::a007_payment::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::list_page_header::ListPageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::toast::use_toasts;
use crate::shared::date_utils::{format_date, format_money};
use crate::shared::icons::icon;
use crate::shared::list_controller::{contains_ci, ListState, Searchable};

impl Searchable for Payment {
    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.client_name, query) || contains_ci(&self.method, query)
    }
}

#[component]
pub fn PaymentsListPage() -> impl IntoView {
    let state = RwSignal::new(ListState::<Payment>::default());
    let all_items: RwSignal<Vec<Payment>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let editing: RwSignal<Option<i32>> = RwSignal::new(None);
    let deleting: RwSignal<Option<Payment>> = RwSignal::new(None);
    let toasts = use_toasts();

    let refresh_view = move || {
        let source = all_items.get_untracked();
        state.update(|s| s.rebuild(&source));
    };

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(data) => {
                    all_items.set(data);
                    state.update(|s| {
                        s.page = 0;
                        s.is_loaded = true;
                    });
                    refresh_view();
                }
                Err(e) => set_error.set(Some(format!("No se pudo cargar los pagos: {}", e))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_data();
        }
    });

    let search_signal = RwSignal::new(String::new());

    Effect::new(move |_| {
        let query = search_signal.get();
        state.update(|s| s.set_query(query));
        refresh_view();
    });

    let go_to_page = move |page: usize| {
        state.update(|s| s.set_page(page));
        refresh_view();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.set_page_size(size));
        refresh_view();
    };

    let confirm_delete = move |payment: Payment| {
        spawn_local(async move {
            match api::delete(payment.id).await {
                Ok(()) => {
                    toasts.success("Pago eliminado");
                    load_data();
                }
                Err(e) => toasts.error(format!("No se pudo eliminar: {}", e)),
            }
            deleting.set(None);
        });
    };

    view! {
        <div class="page">
            <ListPageHeader
                title="Pagos"
                total_count=Signal::derive(move || state.get().total_count)
                loading=loading
                on_new=Callback::new(move |_| editing.set(Some(0)))
                on_refresh=Callback::new(move |_| load_data())
            />

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="filter-panel">
                <div class="filter-panel__search">
                    <Input value=search_signal placeholder="Cliente o metodo de pago..." />
                </div>
                <PaginationControls
                    current_page=Signal::derive(move || state.get().page)
                    total_pages=Signal::derive(move || state.get().total_pages)
                    total_count=Signal::derive(move || state.get().total_count)
                    page_size=Signal::derive(move || state.get().page_size)
                    on_page_change=Callback::new(go_to_page)
                    on_page_size_change=Callback::new(change_page_size)
                />
            </div>

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Factura"</TableHeaderCell>
                            <TableHeaderCell>"Cliente"</TableHeaderCell>
                            <TableHeaderCell>"Monto"</TableHeaderCell>
                            <TableHeaderCell>"Fecha"</TableHeaderCell>
                            <TableHeaderCell>"Metodo"</TableHeaderCell>
                            <TableHeaderCell></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || state.get().items
                            key=|p| p.id
                            children=move |payment| {
                                let payment_id = payment.id;
                                let payment_for_delete = payment.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="table__primary">{format!("F-{:05}", payment.invoice_id)}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{payment.client_name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_money(payment.amount)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(&payment.payment_date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{payment.method.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| editing.set(Some(payment_id))
                                                attr:title="Editar"
                                            >
                                                {icon("edit")}
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| deleting.set(Some(payment_for_delete.clone()))
                                                attr:title="Eliminar"
                                            >
                                                {icon("trash")}
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>

            {move || editing.get().map(|id| view! {
                <PaymentForm
                    payment_id=id
                    on_close=Callback::new(move |_| editing.set(None))
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        load_data();
                    })
                />
            })}

            {move || deleting.get().map(|payment| {
                let message = format!(
                    "Eliminar el pago de {} por {}?",
                    payment.client_name,
                    format_money(payment.amount)
                );
                view! {
                    <ConfirmDialog
                        message=message
                        on_confirm=Callback::new(move |_| confirm_delete(payment.clone()))
                        on_cancel=Callback::new(move |_| deleting.set(None))
                    />
                }
            })}
        </div>
    }
}
