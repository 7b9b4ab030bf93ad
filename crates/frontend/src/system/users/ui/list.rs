use contracts::system::auth::ROLE_ADMIN;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::UserForm;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::list_page_header::ListPageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::toast::use_toasts;
use crate::shared::icons::icon;
use crate::shared::list_controller::{contains_ci, ListState, Searchable};
use crate::system::auth::guard::RequireRole;
use crate::system::users::api;

impl Searchable for User {
    fn matches(&self, query: &str) -> bool {
        contains_ci(&self.username, query)
            || contains_ci(&self.email, query)
            || contains_ci(&self.role_name, query)
    }
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireRole permitted=vec![ROLE_ADMIN]>
            <UsersList />
        </RequireRole>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let state = RwSignal::new(ListState::<User>::default());
    let all_items: RwSignal<Vec<User>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let editing: RwSignal<Option<i32>> = RwSignal::new(None);
    let deleting: RwSignal<Option<User>> = RwSignal::new(None);
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
                Err(e) => set_error.set(Some(format!("No se pudo cargar los usuarios: {}", e))),
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

    let confirm_delete = move |user: User| {
        spawn_local(async move {
            match api::delete(user.id).await {
                Ok(()) => {
                    toasts.success("Usuario eliminado");
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
                title="Usuarios"
                total_count=Signal::derive(move || state.get().total_count)
                loading=loading
                on_new=Callback::new(move |_| editing.set(Some(0)))
                on_refresh=Callback::new(move |_| load_data())
            />

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="filter-panel">
                <div class="filter-panel__search">
                    <Input value=search_signal placeholder="Usuario, correo o rol..." />
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
                            <TableHeaderCell>"Usuario"</TableHeaderCell>
                            <TableHeaderCell>"Correo"</TableHeaderCell>
                            <TableHeaderCell>"Rol"</TableHeaderCell>
                            <TableHeaderCell></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || state.get().items
                            key=|u| u.id
                            children=move |user| {
                                let user_id = user.id;
                                let user_for_delete = user.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span class="table__primary">{user.username.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{user.email.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {if user.role_name == ROLE_ADMIN {
                                                    view! { <span class="badge badge--warning">{user.role_name.clone()}</span> }.into_any()
                                                } else {
                                                    view! { <span class="badge badge--neutral">{user.role_name.clone()}</span> }.into_any()
                                                }}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| editing.set(Some(user_id))
                                                attr:title="Editar"
                                            >
                                                {icon("edit")}
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| deleting.set(Some(user_for_delete.clone()))
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
                <UserForm
                    user_id=id
                    on_close=Callback::new(move |_| editing.set(None))
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        load_data();
                    })
                />
            })}

            {move || deleting.get().map(|user| {
                let message = format!("Eliminar el usuario {}?", user.username);
                view! {
                    <ConfirmDialog
                        message=message
                        on_confirm=Callback::new(move |_| confirm_delete(user.clone()))
                        on_cancel=Callback::new(move |_| deleting.set(None))
                    />
                }
            })}
        </div>
    }
}
