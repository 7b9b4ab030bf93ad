use contracts::domain::a004_service::Service;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_service::api;
use crate::shared::components::toast::use_toasts;
use crate::shared::icons::icon;

#[component]
pub fn ServiceForm(service_id: i32, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let (warning, set_warning) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let toasts = use_toasts();

    let is_new = service_id == 0;

    if !is_new {
        spawn_local(async move {
            match api::fetch_by_id(service_id).await {
                Ok(service) => {
                    name.set(service.name);
                    description.set(service.description);
                    price.set(service.price.to_string());
                }
                Err(e) => set_warning.set(Some(e)),
            }
        });
    }

    let on_save = move |_| {
        let price_value = match price.get().trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                set_warning.set(Some("El precio no es un numero valido".to_string()));
                return;
            }
        };

        let draft = Service {
            id: service_id,
            name: name.get(),
            description: description.get(),
            price: price_value,
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
                        "Servicio registrado"
                    } else {
                        "Servicio actualizado"
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
                    <h2 class="modal-title">{if is_new { "Nuevo servicio" } else { "Editar servicio" }}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || warning.get().map(|w| view! { <div class="alert alert--warning">{w}</div> })}

                    <div class="form__group">
                        <Label>"Nombre"</Label>
                        <Input value=name disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Descripcion"</Label>
                        <Textarea value=description disabled=Signal::derive(move || saving.get()) />
                    </div>
                    <div class="form__group">
                        <Label>"Precio"</Label>
                        <Input value=price disabled=Signal::derive(move || saving.get()) />
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
