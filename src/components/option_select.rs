//! Option Select Component
//!
//! `<select>` over `(id, label)` pairs with a blank placeholder entry.

use leptos::prelude::*;

#[component]
pub fn OptionSelect(
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] placeholder: String,
    #[prop(into, default = false.into())] disabled: Signal<bool>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="option-select"
            prop:value=move || value.get()
            disabled=move || disabled.get()
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            <option value="" selected=move || value.get().is_empty()>{placeholder}</option>
            <For
                each=move || options.get()
                key=|(id, label)| (id.clone(), label.clone())
                children=move |(id, label)| {
                    let current = id.clone();
                    view! {
                        <option value=id selected=move || value.get() == current>{label}</option>
                    }
                }
            />
        </select>
    }
}
