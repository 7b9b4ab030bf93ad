use contracts::domain::a002_employee::Employee;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_employee::api;
use crate::shared::components::toast::use_toasts;
use crate::shared::icons::icon;

#[component]
pub fn EmployeeForm(
    employee_id: i32,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let full_name = RwSignal::new(String::new());
    let document = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    // Numeric wire field edited as text; parsed on submit.
    let salary = RwSignal::new(String::new());
    let (warning, set_warning) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);
    let toasts = use_toasts();

    let is_new = employee_id == 0;

    if !is_new {
        spawn_local(async move {
            match api::fetch_by_id(employee_id).await {
                Ok(employee) => {
                    full_name.set(employee.full_name);
                    document.set(employee.document);
                    phone.set(employee.phone);
                    email.set(employee.email);
                    salary.set(employee.salary.to_string());
                }
                Err(e) => set_warning.set(Some(e)),
            }
        });
    }

    let on_save = move |_| {
        let salary_value = match salary.get().trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                set_warning.set(Some("El sueldo no es un numero valido".to_string()));
                return;
            }
        };

        let draft = Employee {
            id: employee_id,
            full_name: full_name.get(),
            document: document.get(),
            phone: phone.get(),
            email: email.get(),
            salary: salary_value,
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
                        "Empleado registrado"
                    } else {
                        "Empleado actualizado"
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
                    <h2 class="modal-title">{if is_new { "Nuevo empleado" } else { "Editar empleado" }}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || warning.get().map(|w| view! { <div class="alert alert--warning">{w}</div> })}

                    <div class="form__group">
                        <Label>"Nombre completo"</Label>
                        <Input value=full_name disabled=Signal::derive(move || saving.get()) />
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
                    <div class="form__group">
                        <Label>"Sueldo"</Label>
                        <Input value=salary disabled=Signal::derive(move || saving.get()) />
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
