use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Blocking confirmation shown before every delete.
#[component]
pub fn ConfirmDialog(
    /// Question shown to the user, e.g. "Eliminar el cliente Ana Torres?"
    message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal modal--confirm" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-body">
                    <div class="confirm-dialog__icon">{icon("alert")}</div>
                    <p class="confirm-dialog__message">{message}</p>
                </div>
                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                    >
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_confirm.run(())
                    >
                        "Eliminar"
                    </Button>
                </div>
            </div>
        </div>
    }
}
