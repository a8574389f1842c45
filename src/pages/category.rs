//! Category Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{load_into, LoadError, LoadFailures};
use crate::api::{self, CategoryArgs};
use crate::components::{DeleteButton, FormActions, StatusBadge, StatusSelect};
use crate::context::{use_reloader, Reloader};
use crate::crud::{self, Mutation};
use crate::models::{Category, RecordStatus};
use crate::store::{store_notify, use_app_store, Notice};

#[component]
pub fn CategoryPage() -> impl IntoView {
    let reloader = Reloader::provide();
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let load_errors = RwSignal::new(LoadFailures::default());

    Effect::new(move |_| {
        reloader.track();
        load_into("Category", "categories", set_categories, load_errors, |api| async move {
            api.list_categories().await
        });
    });

    view! {
        <section class="page">
            <h1>"Categories"</h1>
            <CategoryForm />
            <LoadError errors=load_errors />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Category Name"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || categories.get()
                        key=|category| category.clone()
                        children=move |category| view! { <CategoryRow category=category /> }
                    />
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn CategoryForm() -> impl IntoView {
    let store = use_app_store();
    let reloader = use_reloader();
    let (name, set_name) = signal(String::new());
    let (status, set_status) = signal(RecordStatus::default().as_str().to_string());
    let (busy, set_busy) = signal(false);

    let reset = move || {
        set_name.set(String::new());
        set_status.set(RecordStatus::default().as_str().to_string());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let category_name = name.get().trim().to_string();
        if category_name.is_empty() {
            store_notify(&store, Notice::error("Category name is required"));
            return;
        }
        let status = status.get();
        set_busy.set(true);
        spawn_local(async move {
            let args = CategoryArgs { category_name: &category_name, status: &status };
            let outcome = api::client().create_category(&args).await;
            if outcome.is_ok() {
                reset();
            }
            set_busy.set(false);
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Create, "category"));
        });
    };

    view! {
        <form class="record-form" on:submit=submit>
            <label>
                "Category Name"
                <input
                    type="text"
                    required=true
                    placeholder="Enter category name"
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
fn CategoryRow(category: Category) -> impl IntoView {
    let store = use_app_store();
    let reloader = use_reloader();
    let stored = StoredValue::new(category.clone());
    let (editing, set_editing) = signal(false);
    let (name, set_name) = signal(category.category_name);
    let (status, set_status) = signal(category.status);

    let cancel = move |_| {
        stored.with_value(|c| {
            set_name.set(c.category_name.clone());
            set_status.set(c.status.clone());
        });
        set_editing.set(false);
    };

    let save = move |_| {
        let category_name = name.get().trim().to_string();
        if category_name.is_empty() {
            store_notify(&store, Notice::error("Category name is required"));
            return;
        }
        let status = status.get();
        let id = stored.with_value(|c| c.id.clone());
        spawn_local(async move {
            let args = CategoryArgs { category_name: &category_name, status: &status };
            let outcome = api::client().update_category(&id, &args).await;
            if outcome.is_ok() {
                set_editing.set(false);
            }
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Update, "category"));
        });
    };

    let delete = Callback::new(move |_| {
        let id = stored.with_value(|c| c.id.clone());
        spawn_local(async move {
            let outcome = api::client().delete_category(&id).await;
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Delete, "category"));
        });
    });

    view! {
        <tr>
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <td>{move || name.get()}</td>
                    <td><StatusBadge status=status.get() /></td>
                    <td class="row-actions">
                        <button class="btn" on:click=move |_| set_editing.set(true)>"Edit"</button>
                        <DeleteButton prompt="Delete this category?" on_confirm=delete />
                    </td>
                }
            >
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
