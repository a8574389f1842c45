//! Status Select Component
//!
//! Active / Inactive selector for setup records.

use leptos::prelude::*;

use crate::models::RecordStatus;

#[component]
pub fn StatusSelect(
    #[prop(into)] value: Signal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select class="status-select" on:change=move |ev| on_change(event_target_value(&ev))>
            {RecordStatus::ALL.into_iter().map(|status| {
                let is_selected = move || RecordStatus::parse(&value.get()) == status;
                view! {
                    <option value=status.as_str() selected=is_selected>{status.as_str()}</option>
                }
            }).collect_view()}
        </select>
    }
}

/// Table cell badge for a stored status
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = match RecordStatus::parse(&status) {
        RecordStatus::Active => "badge badge-approved",
        RecordStatus::Inactive => "badge badge-rejected",
    };
    view! { <span class=class>{status}</span> }
}
