//! Delete Button Component
//!
//! Row delete action behind a blocking browser confirmation.

use leptos::prelude::*;

use crate::dialog;

/// # Arguments
/// * `prompt` - Question shown in the confirm dialog
/// * `on_confirm` - Runs only when the user accepts
#[component]
pub fn DeleteButton(
    #[prop(into)] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="btn btn-danger"
            on:click=move |ev| {
                ev.stop_propagation();
                if dialog::confirm(&prompt) {
                    on_confirm.run(());
                }
            }
        >
            "Delete"
        </button>
    }
}
