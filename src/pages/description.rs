//! Description Page
//!
//! Descriptions sit at the bottom of the catalog chain. The add form runs the
//! full category → item → type cascade; edit rows keep their category and
//! reload the item/type lists from the stored ids.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{label_for, load_into, LoadError, LoadFailures};
use crate::api::{self, DescriptionArgs};
use crate::cascade::CatalogSelection;
use crate::components::{CascadeDepth, CatalogCascade, DeleteButton, FormActions, StatusBadge, StatusSelect};
use crate::context::{use_reloader, Reloader};
use crate::crud::{self, Mutation};
use crate::models::{CatalogItem, Category, Description, RecordStatus, WorkType};
use crate::store::{store_notify, use_app_store, Notice};

/// Display names for one row's category, item and type
#[derive(Debug, Clone, PartialEq, Default)]
struct RowNames {
    category: String,
    item: String,
    work_type: String,
}

#[component]
pub fn DescriptionPage() -> impl IntoView {
    let reloader = Reloader::provide();
    let (descriptions, set_descriptions) = signal(Vec::<Description>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (all_items, set_all_items) = signal(Vec::<CatalogItem>::new());
    let (all_types, set_all_types) = signal(Vec::<WorkType>::new());
    let load_errors = RwSignal::new(LoadFailures::default());

    Effect::new(move |_| {
        reloader.track();
        load_into("Description", "categories", set_categories, load_errors, |api| async move {
            api.list_categories().await
        });
        load_into("Description", "items", set_all_items, load_errors, |api| async move { api.list_items().await });
        load_into("Description", "types", set_all_types, load_errors, |api| async move { api.list_types().await });
        load_into("Description", "descriptions", set_descriptions, load_errors, |api| async move {
            api.list_descriptions().await
        });
    });

    view! {
        <section class="page">
            <h1>"Descriptions"</h1>
            <DescriptionForm categories=categories />
            <LoadError errors=load_errors />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Category"</th>
                        <th>"Item"</th>
                        <th>"Type"</th>
                        <th>"Description"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || descriptions.get()
                        key=|row| row.clone()
                        children=move |row| {
                            let names = Signal::derive({
                                let row = row.clone();
                                move || RowNames {
                                    category: categories.with(|list| {
                                        label_for(list, &row.category_id, |c| (c.category_id.as_str(), c.category_name.as_str()))
                                    }),
                                    item: all_items.with(|list| {
                                        label_for(list, &row.item_id, |i| (i.item_id.as_str(), i.item_name.as_str()))
                                    }),
                                    work_type: all_types.with(|list| {
                                        label_for(list, &row.type_id, |t| (t.type_id.as_str(), t.type_name.as_str()))
                                    }),
                                }
                            });
                            view! { <DescriptionRow row=row names=names categories=categories /> }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn DescriptionForm(categories: ReadSignal<Vec<Category>>) -> impl IntoView {
    let store = use_app_store();
    let reloader = use_reloader();
    let selection = RwSignal::new(CatalogSelection::default());
    let (text, set_text) = signal(String::new());
    let (status, set_status) = signal(RecordStatus::default().as_str().to_string());
    let (busy, set_busy) = signal(false);

    let reset = move || {
        selection.set(CatalogSelection::default());
        set_text.set(String::new());
        set_status.set(RecordStatus::default().as_str().to_string());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let chosen = selection.get();
        let description = text.get().trim().to_string();
        if !chosen.is_complete() || description.is_empty() {
            store_notify(&store, Notice::error("Category, item, type and description are required"));
            return;
        }
        let status = status.get();
        set_busy.set(true);
        spawn_local(async move {
            let args = DescriptionArgs {
                description: &description,
                category_id: &chosen.category_id,
                item_id: &chosen.item_id,
                type_id: &chosen.type_id,
                status: &status,
            };
            let outcome = api::client().create_description(&args).await;
            if outcome.is_ok() {
                reset();
            }
            set_busy.set(false);
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Create, "description"));
        });
    };

    view! {
        <form class="record-form" on:submit=submit>
            <CatalogCascade selection=selection categories=categories depth=CascadeDepth::Type />
            <label>
                "Description"
                <textarea
                    required=true
                    placeholder="Enter description"
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                ></textarea>
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
fn DescriptionRow(
    row: Description,
    names: Signal<RowNames>,
    categories: ReadSignal<Vec<Category>>,
) -> impl IntoView {
    let store = use_app_store();
    let reloader = use_reloader();
    let stored = StoredValue::new(row.clone());
    let row_selection = move || {
        stored.with_value(|r| CatalogSelection::from_row(&r.category_id, &r.item_id, &r.type_id))
    };
    let selection = RwSignal::new(row_selection());
    let (editing, set_editing) = signal(false);
    let (text, set_text) = signal(row.description_name);
    let (status, set_status) = signal(row.status);

    let start_edit = move |_| {
        selection.set(row_selection());
        set_editing.set(true);
    };

    let cancel = move |_| {
        stored.with_value(|r| {
            set_text.set(r.description_name.clone());
            set_status.set(r.status.clone());
        });
        set_editing.set(false);
    };

    let save = move |_| {
        let chosen = selection.get();
        let description = text.get().trim().to_string();
        if !chosen.is_complete() || description.is_empty() {
            store_notify(&store, Notice::error("Item, type and description are required"));
            return;
        }
        let status = status.get();
        let id = stored.with_value(|r| r.id.clone());
        spawn_local(async move {
            let args = DescriptionArgs {
                description: &description,
                category_id: &chosen.category_id,
                item_id: &chosen.item_id,
                type_id: &chosen.type_id,
                status: &status,
            };
            let outcome = api::client().update_description(&id, &args).await;
            if outcome.is_ok() {
                set_editing.set(false);
            }
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Update, "description"));
        });
    };

    let delete = Callback::new(move |_| {
        let id = stored.with_value(|r| r.id.clone());
        spawn_local(async move {
            let outcome = api::client().delete_description(&id).await;
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Delete, "description"));
        });
    });

    view! {
        <tr>
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <td>{move || names.get().category}</td>
                    <td>{move || names.get().item}</td>
                    <td>{move || names.get().work_type}</td>
                    <td>{move || text.get()}</td>
                    <td><StatusBadge status=status.get() /></td>
                    <td class="row-actions">
                        <button class="btn" on:click=start_edit>"Edit"</button>
                        <DeleteButton prompt="Delete this description?" on_confirm=delete />
                    </td>
                }
            >
                <td colspan="3">
                    <CatalogCascade
                        selection=selection
                        categories=categories
                        depth=CascadeDepth::Type
                        lock_category=true
                    />
                </td>
                <td>
                    <textarea
                        prop:value=move || text.get()
                        on:input=move |ev| set_text.set(event_target_value(&ev))
                    ></textarea>
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
