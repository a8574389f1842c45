//! Form Actions Component
//!
//! Submit / Reset pair shared by the add forms.

use leptos::prelude::*;

#[component]
pub fn FormActions(
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="form-actions">
            <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { "Submit" }}
            </button>
            <button type="button" class="btn" on:click=move |_| on_reset.run(())>"Reset"</button>
        </div>
    }
}
