use contracts::system::roles::Role;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::toast::use_toasts;
use crate::shared::icons::icon;
use crate::system::roles::api as role_api;
use crate::system::users::api;

/// Modal form for back-office accounts. Leaving the password blank on an
/// existing account keeps the current one.
#[component]
pub fn UserForm(user_id: i32, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let roles: RwSignal<Vec<Role>> = RwSignal::new(Vec::new());
    let (options_ready, set_options_ready) = signal(false);

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role_id = RwSignal::new(0_i32);
    let (warning, set_warning) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let toasts = use_toasts();

    let is_new = user_id == 0;

    spawn_local(async move {
        match role_api::fetch_all().await {
            Ok(list) => {
                roles.set(list);
                set_options_ready.set(true);
            }
            Err(e) => set_warning.set(Some(format!("No se pudo cargar los roles: {}", e))),
        }

        if !is_new {
            match api::fetch_by_id(user_id).await {
                Ok(user) => {
                    username.set(user.username);
                    email.set(user.email);
                    role_id.set(user.role_id);
                }
                Err(e) => set_warning.set(Some(e)),
            }
        }
    });

    let on_save = move |_| {
        let role_name = roles
            .get_untracked()
            .iter()
            .find(|r| r.id == role_id.get_untracked())
            .map(|r| r.name.clone())
            .unwrap_or_default();

        let draft = User {
            id: user_id,
            username: username.get(),
            email: email.get(),
            password: password.get(),
            role_id: role_id.get(),
            role_name,
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
                        "Usuario registrado"
                    } else {
                        "Usuario actualizado"
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
                    <h2 class="modal-title">{if is_new { "Nuevo usuario" } else { "Editar usuario" }}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || warning.get().map(|w| view! { <div class="alert alert--warning">{w}</div> })}

                    <div class="form__group">
                        <Label>"Nombre de usuario"</Label>
                        <Input value=username disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Correo"</Label>
                        <Input value=email input_type=InputType::Email disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>{if is_new { "Clave" } else { "Clave (dejar en blanco para no cambiar)" }}</Label>
                        <Input value=password input_type=InputType::Password disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Rol"</Label>
                        <select
                            class="form__select"
                            disabled=move || !options_ready.get() || saving.get()
                            on:change=move |ev| {
                                role_id.set(event_target_value(&ev).parse().unwrap_or(0));
                            }
                            prop:value=move || role_id.get().to_string()
                        >
                            <option value="0">"-- Seleccionar --"</option>
                            <For
                                each=move || roles.get()
                                key=|r| r.id
                                children=move |role| {
                                    view! {
                                        <option value=role.id.to_string()>{role.name.clone()}</option>
                                    }
                                }
                            />
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
