use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Standard header of a list screen: title, filtered-count badge, and the
/// "new" / "refresh" actions wired by the parent.
#[component]
pub fn ListPageHeader(
    title: &'static str,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] loading: Signal<bool>,
    on_new: Callback<()>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                <Badge>{move || total_count.get().to_string()}</Badge>
            </div>
            <div class="page__header-right">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_new.run(())
                >
                    {icon("plus")}
                    " Nuevo"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_refresh.run(())
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Cargando..." } else { " Actualizar" }}
                </Button>
            </div>
        </div>
    }
}
