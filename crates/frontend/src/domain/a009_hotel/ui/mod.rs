use contracts::domain::a009_hotel::Hotel;
use contracts::system::auth::ROLE_ADMIN;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a009_hotel::api;
use crate::shared::components::toast::use_toasts;
use crate::system::auth::guard::RequireRole;

#[component]
pub fn HotelSettingsPage() -> impl IntoView {
    view! {
        <RequireRole permitted=vec![ROLE_ADMIN]>
            <HotelSettings />
        </RequireRole>
    }
}

/// Single-record settings form: loads the hotel record on mount and only
/// ever issues `Editar`.
#[component]
fn HotelSettings() -> impl IntoView {
    let hotel_id = RwSignal::new(1_i32);
    let name = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let (warning, set_warning) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let toasts = use_toasts();

    spawn_local(async move {
        match api::fetch().await {
            Ok(hotel) => {
                hotel_id.set(hotel.id);
                name.set(hotel.name);
                address.set(hotel.address);
                phone.set(hotel.phone);
                email.set(hotel.email);
            }
            Err(e) => set_warning.set(Some(format!("No se pudo cargar los datos: {}", e))),
        }
        set_loading.set(false);
    });

    let on_save = move |_| {
        let draft = Hotel {
            id: hotel_id.get(),
            name: name.get(),
            address: address.get(),
            phone: phone.get(),
            email: email.get(),
        };

        if let Err(message) = draft.validate() {
            set_warning.set(Some(message));
            return;
        }

        set_saving.set(true);
        set_warning.set(None);
        spawn_local(async move {
            match api::update(&draft).await {
                Ok(()) => toasts.success("Datos del hotel actualizados"),
                Err(e) => toasts.error(format!("No se pudo guardar: {}", e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Hotel"</h1>
                </div>
            </div>

            <div class="page__content page__content--narrow">
                {move || warning.get().map(|w| view! { <div class="alert alert--warning">{w}</div> })}

                <div class="form__group">
                    <Label>"Nombre"</Label>
                    <Input value=name disabled=Signal::derive(move || loading.get() || saving.get()) />
                </div>
                <div class="form__group">
                    <Label>"Direccion"</Label>
                    <Input value=address disabled=Signal::derive(move || loading.get() || saving.get()) />
                </div>
                <div class="form__group">
                    <Label>"Telefono"</Label>
                    <Input value=phone disabled=Signal::derive(move || loading.get() || saving.get()) />
                </div>
                <div class="form__group">
                    <Label>"Correo"</Label>
                    <Input value=email input_type=InputType::Email disabled=Signal::derive(move || loading.get() || saving.get()) />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_save
                    disabled=Signal::derive(move || loading.get() || saving.get())
                >
                    {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                </Button>
            </div>
        </div>
    }
}
