use contracts::domain::a008_cleaning::{Cleaning, CLEANING_STATE_DONE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::CleaningForm;
use crate::domain::a008_cleaning::api;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::list_page_header::ListPageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::toast::use_toasts;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_controller::{contains_ci, ListState, Searchable};

impl Searchable for Cleaning {
    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.room_number, query) || contains_ci(&self.employee_name, query)
    }
}

#[component]
pub fn CleaningsListPage() -> impl IntoView {
    let state = RwSignal::new(ListState::<Cleaning>::default());
    let all_items: RwSignal<Vec<Cleaning>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let editing: RwSignal<Option<i32>> = RwSignal::new(None);
    let deleting: RwSignal<Option<Cleaning>> = RwSignal::new(None);
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
                Err(e) => set_error.set(Some(format!("No se pudo cargar las limpiezas: {}", e))),
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

    let confirm_delete = move |cleaning: Cleaning| {
        spawn_local(async move {
            match api::delete(cleaning.id).await {
                Ok(()) => {
                    toasts.success("Limpieza eliminada");
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
                title="Limpiezas"
                total_count=Signal::derive(move || state.get().total_count)
                loading=loading
                on_new=Callback::new(move |_| editing.set(Some(0)))
                on_refresh=Callback::new(move |_| load_data())
            />

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="filter-panel">
                <div class="filter-panel__search">
                    <Input value=search_signal placeholder="Habitacion o empleado..." />
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
                            <TableHeaderCell>"Habitacion"</TableHeaderCell>
                            <TableHeaderCell>"Empleado"</TableHeaderCell>
                            <TableHeaderCell>"Fecha"</TableHeaderCell>
                            <TableHeaderCell>"Estado"</TableHeaderCell>
                            <TableHeaderCell></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || state.get().items
                            key=|c| c.id
                            children=move |cleaning| {
                                let cleaning_id = cleaning.id;
                                let cleaning_for_delete = cleaning.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="table__primary">{cleaning.room_number.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{cleaning.employee_name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(&cleaning.date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {if cleaning.state == CLEANING_STATE_DONE {
                                                    view! { <span class="badge badge--success">{cleaning.state.clone()}</span> }.into_any()
                                                } else {
                                                    view! { <span class="badge badge--warning">{cleaning.state.clone()}</span> }.into_any()
                                                }}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| editing.set(Some(cleaning_id))
                                                attr:title="Editar"
                                            >
                                                {icon("edit")}
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| deleting.set(Some(cleaning_for_delete.clone()))
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
                <CleaningForm
                    cleaning_id=id
                    on_close=Callback::new(move |_| editing.set(None))
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        load_data();
                    })
                />
            })}

            {move || deleting.get().map(|cleaning| {
                let message = format!(
                    "Eliminar la limpieza de la habitacion {} del {}?",
                    cleaning.room_number,
                    format_date(&cleaning.date)
                );
                view! {
                    <ConfirmDialog
                        message=message
                        on_confirm=Callback::new(move |_| confirm_delete(cleaning.clone()))
                        on_cancel=Callback::new(move |_| deleting.set(None))
                    />
                }
            })}
        </div>
    }
}
