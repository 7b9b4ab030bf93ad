use leptos::prelude::*;

use crate::shared::icons::icon;

/// Dashboard counter card.
#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    icon_name: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <span class="stat-card__title">{title}</span>
                <span class="stat-card__value">{move || value.get()}</span>
            </div>
        </div>
    }
}
