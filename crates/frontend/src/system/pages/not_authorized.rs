use leptos::prelude::*;

use crate::shared::icons::icon;

/// Fixed landing page for unauthorized route access.
#[component]
pub fn NotAuthorizedPage() -> impl IntoView {
    view! {
        <div class="not-authorized">
            {icon("alert")}
            <h1>"Acceso no autorizado"</h1>
            <p>"Su rol no tiene permisos para ver esta pagina."</p>
            <a href="/">"Volver al inicio"</a>
        </div>
    }
}
