//! Item Page
//!
//! Items are grouped under a category.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{label_for, load_into, pairs, LoadError, LoadFailures};
use crate::api::{self, ItemArgs};
use crate::components::{DeleteButton, FormActions, OptionSelect, StatusBadge, StatusSelect};
use crate::context::{use_reloader, Reloader};
use crate::crud::{self, Mutation};
use crate::models::{CatalogItem, Category, RecordStatus};
use crate::store::{store_notify, use_app_store, Notice};

fn category_field(category: &Category) -> (&str, &str) {
    (&category.category_id, &category.category_name)
}

#[component]
pub fn ItemPage() -> impl IntoView {
    let reloader = Reloader::provide();
    let (items, set_items) = signal(Vec::<CatalogItem>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let load_errors = RwSignal::new(LoadFailures::default());

    Effect::new(move |_| {
        load_into("Item", "categories", set_categories, load_errors, |api| async move { api.list_categories().await });
    });
    Effect::new(move |_| {
        reloader.track();
        load_into("Item", "items", set_items, load_errors, |api| async move { api.list_items().await });
    });

    let category_options = Memo::new(move |_| categories.with(|list| pairs(list, category_field)));

    view! {
        <section class="page">
            <h1>"Items"</h1>
            <ItemForm category_options=category_options />
            <LoadError errors=load_errors />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Category"</th>
                        <th>"Item Name"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|item| item.clone()
                        children=move |item| {
                            let category_name = Signal::derive({
                                let category_id = item.category_id.clone();
                                move || categories.with(|list| label_for(list, &category_id, category_field))
                            });
                            view! {
                                <ItemRow item=item category_name=category_name category_options=category_options />
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn ItemForm(category_options: Memo<Vec<(String, String)>>) -> impl IntoView {
    let store = use_app_store();
    let reloader = use_reloader();
    let (category_id, set_category_id) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (status, set_status) = signal(RecordStatus::default().as_str().to_string());
    let (busy, set_busy) = signal(false);

    let reset = move || {
        set_category_id.set(String::new());
        set_name.set(String::new());
        set_status.set(RecordStatus::default().as_str().to_string());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let category = category_id.get();
        let item_name = name.get().trim().to_string();
        if category.is_empty() || item_name.is_empty() {
            store_notify(&store, Notice::error("Category and item name are required"));
            return;
        }
        let status = status.get();
        set_busy.set(true);
        spawn_local(async move {
            let args = ItemArgs { category_id: &category, item_name: &item_name, status: &status };
            let outcome = api::client().create_item(&args).await;
            if outcome.is_ok() {
                reset();
            }
            set_busy.set(false);
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Create, "item"));
        });
    };

    view! {
        <form class="record-form" on:submit=submit>
            <label>
                "Category"
                <OptionSelect
                    options=category_options
                    value=category_id
                    placeholder="Select category"
                    on_change=move |v| set_category_id.set(v)
                />
            </label>
            <label>
                "Item Name"
                <input
                    type="text"
                    required=true
                    placeholder="Enter item name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Status"
                <StatusSelect value=status on_change=move |v| set_status.set(v) />
            </label>
            <FormActions busy=busy on_reset=Callback::new(move |_| reset()) />
        </form>
    }
}

#[component]
fn ItemRow(
    item: CatalogItem,
    category_name: Signal<String>,
    category_options: Memo<Vec<(String, String)>>,
) -> impl IntoView {
    let store = use_app_store();
    let reloader = use_reloader();
    let stored = StoredValue::new(item.clone());
    let (editing, set_editing) = signal(false);
    let (category_id, set_category_id) = signal(item.category_id);
    let (name, set_name) = signal(item.item_name);
    let (status, set_status) = signal(item.status);

    let cancel = move |_| {
        stored.with_value(|i| {
            set_category_id.set(i.category_id.clone());
            set_name.set(i.item_name.clone());
            set_status.set(i.status.clone());
        });
        set_editing.set(false);
    };

    let save = move |_| {
        let category = category_id.get();
        let item_name = name.get().trim().to_string();
        if category.is_empty() || item_name.is_empty() {
            store_notify(&store, Notice::error("Category and item name are required"));
            return;
        }
        let status = status.get();
        let id = stored.with_value(|i| i.id.clone());
        spawn_local(async move {
            let args = ItemArgs { category_id: &category, item_name: &item_name, status: &status };
            let outcome = api::client().update_item(&id, &args).await;
            if outcome.is_ok() {
                set_editing.set(false);
            }
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Update, "item"));
        });
    };

    let delete = Callback::new(move |_| {
        let id = stored.with_value(|i| i.id.clone());
        spawn_local(async move {
            let outcome = api::client().delete_item(&id).await;
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Delete, "item"));
        });
    });

    view! {
        <tr>
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <td>{move || category_name.get()}</td>
                    <td>{move || name.get()}</td>
                    <td><StatusBadge status=status.get() /></td>
                    <td class="row-actions">
                        <button class="btn" on:click=move |_| set_editing.set(true)>"Edit"</button>
                        <DeleteButton prompt="Delete this item?" on_confirm=delete />
                    </td>
                }
            >
                <td>
                    <OptionSelect
                        options=category_options
                        value=category_id
                        placeholder="Select category"
                        on_change=move |v| set_category_id.set(v)
                    />
                </td>
                <td>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </td>
                <td><StatusSelect value=status on_change=move |v| set_status.set(v) /></td>
                <td class="row-actions">
                    <button class="btn btn-primary" on:click=save>"Save"</button>
                    <button class="btn" on:click=cancel>"Cancel"</button>
                </td>
            </Show>
        </tr>
    }
}
