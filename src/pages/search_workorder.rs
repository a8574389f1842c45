//! Search Work Order Page
//!
//! Look up a work order by number, review its children and close it with
//! closing images once every child is closed.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::closing::{self, ChildFilter, SearchMiss};
use crate::components::{clear_images, ImagePicker, PickedImage};
use crate::format::{or_placeholder, timestamp};
use crate::models::{WorkOrder, WorkOrderStatus};
use crate::store::{store_notify, use_app_store, Notice};

#[component]
pub fn SearchWorkOrderPage() -> impl IntoView {
    let store = use_app_store();
    let (query, set_query) = signal(String::new());
    let (selected, set_selected) = signal::<Option<WorkOrder>>(None);
    let (children, set_children) = signal(Vec::<WorkOrder>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (searching, set_searching) = signal(false);
    let (submitting, set_submitting) = signal(false);
    let (child_filter, set_child_filter) = signal(ChildFilter::default());
    let images = RwSignal::new(Vec::<PickedImage>::new());

    let clear = move || {
        set_selected.set(None);
        set_children.set(Vec::new());
        set_error.set(None);
        clear_images(images);
    };

    let load_children = move |parent: String| {
        spawn_local(async move {
            let loaded = match api::client().child_workorders(&parent).await {
                Ok(list) => closing::relevant_children(list),
                Err(e) => {
                    log::warn!("[WorkOrder] children of {} unavailable: {}", parent, e);
                    Vec::new()
                }
            };
            // Ignore children of a work order that is no longer shown
            if selected.with_untracked(|wo| wo.as_ref().is_some_and(|wo| wo.workorder == parent)) {
                set_children.set(loaded);
            }
        });
    };

    let search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let term = query.get();
        if term.is_empty() {
            clear();
            return;
        }
        set_searching.set(true);
        spawn_local(async move {
            let result = api::client().search_workorders(&term).await;
            set_searching.set(false);
            match closing::resolve_search(result, &term) {
                Ok(workorder) => {
                    log::info!("[WorkOrder] selected {}", workorder.workorder);
                    let parent = workorder.workorder.clone();
                    clear();
                    set_selected.set(Some(workorder));
                    load_children(parent);
                }
                Err(miss) => {
                    if let SearchMiss::Failed(e) = &miss {
                        log::error!("[WorkOrder] search {} failed: {}", term, e);
                    }
                    clear();
                    set_error.set(Some(miss.to_string()));
                }
            }
        });
    };

    let close = move |_| {
        let current = selected.get();
        let blocked = children.with(|list| closing::check_close(current.as_ref(), list, images.with(Vec::len)));
        if let Err(reason) = blocked {
            store_notify(&store, Notice::error(reason.to_string()));
            return;
        }
        let Some(workorder) = current else { return };
        let uploads = images.with(|list| list.iter().map(|img| img.upload.clone()).collect::<Vec<_>>());
        set_submitting.set(true);
        spawn_local(async move {
            let outcome = api::client().close_workorder(&workorder.id, uploads).await;
            set_submitting.set(false);
            match outcome {
                Ok(()) => {
                    set_selected.update(|wo| {
                        if let Some(wo) = wo {
                            wo.status = WorkOrderStatus::Closed;
                        }
                    });
                    clear_images(images);
                    load_children(workorder.workorder.clone());
                    store_notify(&store, Notice::success("Workorder closed successfully"));
                }
                Err(e) => store_notify(&store, Notice::error(format!("Failed to close workorder: {}", e))),
            }
        });
    };

    let visible_children = Memo::new(move |_| {
        let filter = child_filter.get();
        children.with(|list| list.iter().filter(|c| filter.matches(c)).cloned().collect::<Vec<_>>())
    });

    view! {
        <section class="page">
            <h1>"Search Work Order"</h1>
            <form class="search-form" on:submit=search>
                <input
                    type="text"
                    placeholder="Enter workorder number"
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        let cleaned = closing::sanitize_query(&event_target_value(&ev));
                        if cleaned.is_empty() {
                            clear();
                        }
                        set_query.set(cleaned);
                    }
                />
                <button type="submit" class="btn btn-primary" disabled=move || searching.get()>
                    {move || if searching.get() { "Searching..." } else { "Search" }}
                </button>
            </form>
            {move || error.get().map(|e| view! { <p class="load-error">{e}</p> })}

            {move || selected.get().map(|wo| view! {
                <div class="workorder-details">
                    <dl class="detail-grid">
                        <dt>"Workorder"</dt><dd>{wo.workorder.clone()}</dd>
                        <dt>"Region"</dt><dd>{or_placeholder(wo.region_name.as_deref(), "—")}</dd>
                        <dt>"Category"</dt><dd>{or_placeholder(wo.category_name.as_deref(), "—")}</dd>
                        <dt>"Requested Close"</dt><dd>{timestamp(wo.requested_time_close.as_deref())}</dd>
                        <dt>"Remarks"</dt><dd>{or_placeholder(wo.remarks.as_deref(), "—")}</dd>
                        <dt>"Client"</dt><dd>{or_placeholder(wo.client.as_deref(), "—")}</dd>
                        <dt>"Created"</dt><dd>{timestamp(wo.created_t.as_deref())}</dd>
                        <dt>"Status"</dt><dd>{wo.status.label().to_string()}</dd>
                        <dt>"Contractor"</dt><dd>{or_placeholder(wo.contractor_name.as_deref(), "—")}</dd>
                    </dl>
                </div>
            })}

            <Show when=move || selected.with(|wo| wo.as_ref().is_some_and(closing::can_offer_close))>
                <div class="close-section">
                    <h2>"Close Workorder"</h2>
                    <label>"Upload Closing Image:"</label>
                    <ImagePicker images=images />
                    <button class="btn btn-danger" disabled=move || submitting.get() on:click=close>
                        {move || if submitting.get() { "Closing..." } else { "Close Workorder" }}
                    </button>
                </div>
            </Show>

            <Show when=move || !children.with(Vec::is_empty)>
                <div class="child-section">
                    <h2>"Child Workorders"</h2>
                    <label>
                        "Filter Child Workorders: "
                        <select on:change=move |ev| set_child_filter.set(ChildFilter::parse(&event_target_value(&ev)))>
                            {ChildFilter::ALL.into_iter().map(|filter| view! {
                                <option value=filter.value() selected=move || child_filter.get() == filter>
                                    {filter.label()}
                                </option>
                            }).collect_view()}
                        </select>
                    </label>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"WorkOrder"</th>
                                <th>"Type"</th>
                                <th>"Area"</th>
                                <th>"Requested Time Closing"</th>
                                <th>"Remarks"</th>
                                <th>"Contractor"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || visible_children.get().into_iter().map(|c| view! {
                                <tr>
                                    <td>{c.workorder.clone()}</td>
                                    <td>{or_placeholder(c.work_type.as_deref(), "—")}</td>
                                    <td>{or_placeholder(c.item.as_deref(), "—")}</td>
                                    <td>{timestamp(c.requested_time_close.as_deref())}</td>
                                    <td>{or_placeholder(c.remarks.as_deref(), "—")}</td>
                                    <td>{or_placeholder(c.contractor_name.as_deref(), "-")}</td>
                                    <td>{c.status.label().to_string()}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
            </Show>
        </section>
    }
}
