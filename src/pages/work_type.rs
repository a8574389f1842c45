//! Type Page
//!
//! Work types hang off a category/item pair.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{label_for, load_into, LoadError, LoadFailures};
use crate::api::{self, TypeArgs};
use crate::cascade::CatalogSelection;
use crate::components::{CascadeDepth, CatalogCascade, DeleteButton, FormActions, StatusBadge, StatusSelect};
use crate::context::{use_reloader, Reloader};
use crate::crud::{self, Mutation};
use crate::models::{CatalogItem, Category, RecordStatus, WorkType};
use crate::store::{store_notify, use_app_store, Notice};

#[component]
pub fn WorkTypePage() -> impl IntoView {
    let reloader = Reloader::provide();
    let (types, set_types) = signal(Vec::<WorkType>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (all_items, set_all_items) = signal(Vec::<CatalogItem>::new());
    let load_errors = RwSignal::new(LoadFailures::default());

    Effect::new(move |_| {
        load_into("Type", "categories", set_categories, load_errors, |api| async move { api.list_categories().await });
    });
    Effect::new(move |_| {
        reloader.track();
        load_into("Type", "items", set_all_items, load_errors, |api| async move { api.list_items().await });
        load_into("Type", "types", set_types, load_errors, |api| async move { api.list_types().await });
    });

    view! {
        <section class="page">
            <h1>"Types"</h1>
            <WorkTypeForm categories=categories />
            <LoadError errors=load_errors />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Category"</th>
                        <th>"Item"</th>
                        <th>"Type Name"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || types.get()
                        key=|work_type| work_type.clone()
                        children=move |work_type| {
                            let names = Signal::derive({
                                let (category_id, item_id) = (work_type.category_id.clone(), work_type.item_id.clone());
                                move || {
                                    let category = categories.with(|list| {
                                        label_for(list, &category_id, |c| (c.category_id.as_str(), c.category_name.as_str()))
                                    });
                                    let item = all_items.with(|list| label_for(list, &item_id, |i| (i.item_id.as_str(), i.item_name.as_str())));
                                    (category, item)
                                }
                            });
                            view! { <WorkTypeRow work_type=work_type names=names categories=categories /> }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn WorkTypeForm(categories: ReadSignal<Vec<Category>>) -> impl IntoView {
    let store = use_app_store();
    let reloader = use_reloader();
    let selection = RwSignal::new(CatalogSelection::default());
    let (name, set_name) = signal(String::new());
    let (status, set_status) = signal(RecordStatus::default().as_str().to_string());
    let (busy, set_busy) = signal(false);

    let reset = move || {
        selection.set(CatalogSelection::default());
        set_name.set(String::new());
        set_status.set(RecordStatus::default().as_str().to_string());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let CatalogSelection { category_id, item_id, .. } = selection.get();
        let type_name = name.get().trim().to_string();
        if category_id.is_empty() || item_id.is_empty() || type_name.is_empty() {
            store_notify(&store, Notice::error("Category, item and type name are required"));
            return;
        }
        let status = status.get();
        set_busy.set(true);
        spawn_local(async move {
            let args = TypeArgs {
                category_id: &category_id,
                item_id: &item_id,
                type_name: &type_name,
                status: &status,
            };
            let outcome = api::client().create_type(&args).await;
            if outcome.is_ok() {
                reset();
            }
            set_busy.set(false);
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Create, "type"));
        });
    };

    view! {
        <form class="record-form" on:submit=submit>
            <CatalogCascade selection=selection categories=categories depth=CascadeDepth::Item />
            <label>
                "Type Name"
                <input
                    type="text"
                    required=true
                    placeholder="Enter type name"
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
fn WorkTypeRow(
    work_type: WorkType,
    names: Signal<(String, String)>,
    categories: ReadSignal<Vec<Category>>,
) -> impl IntoView {
    let store = use_app_store();
    let reloader = use_reloader();
    let stored = StoredValue::new(work_type.clone());
    let row_selection = move || {
        stored.with_value(|t| CatalogSelection::from_row(&t.category_id, &t.item_id, &t.type_id))
    };
    let selection = RwSignal::new(row_selection());
    let (editing, set_editing) = signal(false);
    let (name, set_name) = signal(work_type.type_name);
    let (status, set_status) = signal(work_type.status);

    let cancel = move |_| {
        stored.with_value(|t| {
            set_name.set(t.type_name.clone());
            set_status.set(t.status.clone());
        });
        selection.set(row_selection());
        set_editing.set(false);
    };

    let save = move |_| {
        let CatalogSelection { category_id, item_id, .. } = selection.get();
        let type_name = name.get().trim().to_string();
        if item_id.is_empty() || type_name.is_empty() {
            store_notify(&store, Notice::error("Item and type name are required"));
            return;
        }
        let status = status.get();
        let id = stored.with_value(|t| t.id.clone());
        spawn_local(async move {
            let args = TypeArgs {
                category_id: &category_id,
                item_id: &item_id,
                type_name: &type_name,
                status: &status,
            };
            let outcome = api::client().update_type(&id, &args).await;
            if outcome.is_ok() {
                set_editing.set(false);
            }
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Update, "type"));
        });
    };

    let delete = Callback::new(move |_| {
        let id = stored.with_value(|t| t.id.clone());
        spawn_local(async move {
            let outcome = api::client().delete_type(&id).await;
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Delete, "type"));
        });
    });

    view! {
        <tr>
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <td>{move || names.get().0}</td>
                    <td>{move || names.get().1}</td>
                    <td>{move || name.get()}</td>
                    <td><StatusBadge status=status.get() /></td>
                    <td class="row-actions">
                        <button class="btn" on:click=move |_| set_editing.set(true)>"Edit"</button>
                        <DeleteButton prompt="Delete this type?" on_confirm=delete />
                    </td>
                }
            >
                <td colspan="2">
                    <CatalogCascade
                        selection=selection
                        categories=categories
                        depth=CascadeDepth::Item
                        lock_category=true
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
