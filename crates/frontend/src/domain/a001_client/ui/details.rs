use contracts::domain::a001_client::Client;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_client::api;
use crate::shared::components::toast::use_toasts;
use crate::shared::icons::icon;

/// Modal form for creating (id 0) or editing a client.
#[component]
pub fn ClientForm(client_id: i32, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let document = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let (warning, set_warning) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let toasts = use_toasts();

    let is_new = client_id == 0;

    // Existing records are fetched fresh; the list row may be stale.
    if !is_new {
        spawn_local(async move {
            match api::fetch_by_id(client_id).await {
                Ok(client) => {
                    first_name.set(client.first_name);
                    last_name.set(client.last_name);
                    document.set(client.document);
                    phone.set(client.phone);
                    email.set(client.email);
                }
                Err(e) => set_warning.set(Some(e)),
            }
        });
    }

    let on_save = move |_| {
        let draft = Client {
            id: client_id,
            first_name: first_name.get(),
            last_name: last_name.get(),
            document: document.get(),
            phone: phone.get(),
            email: email.get(),
        };

        // First violation blocks the submit; no request is issued.
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
                        "Cliente registrado"
                    } else {
                        "Cliente actualizado"
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
                    <h2 class="modal-title">{if is_new { "Nuevo cliente" } else { "Editar cliente" }}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || warning.get().map(|w| view! { <div class="alert alert--warning">{w}</div> })}

                    <div class="form__group">
                        <Label>"Nombre"</Label>
                        <Input value=first_name disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Apellido"</Label>
                        <Input value=last_name disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Documento"</Label>
                        <Input value=document disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Telefono"</Label>
                        <Input value=phone disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Correo"</Label>
                        <Input value=email input_type=InputType::Email disabled=Signal::derive(move || saving.get()) />
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
