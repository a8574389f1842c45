//! Region Page
//!
//! Top of the location hierarchy.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{load_into, LoadError, LoadFailures};
use crate::api::{self, RegionArgs};
use crate::components::{DeleteButton, FormActions, StatusBadge, StatusSelect};
use crate::context::{use_reloader, Reloader};
use crate::crud::{self, Mutation};
use crate::models::{RecordStatus, Region};
use crate::store::{store_notify, use_app_store, Notice};

#[component]
pub fn RegionPage() -> impl IntoView {
    let reloader = Reloader::provide();
    let (regions, set_regions) = signal(Vec::<Region>::new());
    let load_errors = RwSignal::new(LoadFailures::default());

    Effect::new(move |_| {
        reloader.track();
        load_into("Region", "regions", set_regions, load_errors, |api| async move { api.list_regions().await });
    });

    view! {
        <section class="page">
            <h1>"Regions"</h1>
            <RegionForm />
            <LoadError errors=load_errors />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Region Name"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || regions.get()
                        key=|region| region.clone()
                        children=move |region| view! { <RegionRow region=region /> }
                    />
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn RegionForm() -> impl IntoView {
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
        let region_name = name.get().trim().to_string();
        if region_name.is_empty() {
            store_notify(&store, Notice::error("Region name is required"));
            return;
        }
        let status = status.get();
        set_busy.set(true);
        spawn_local(async move {
            let args = RegionArgs { region_name: &region_name, status: &status };
            let outcome = api::client().create_region(&args).await;
            if outcome.is_ok() {
                reset();
            }
            set_busy.set(false);
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Create, "region"));
        });
    };

    view! {
        <form class="record-form" on:submit=submit>
            <label>
                "Region Name"
                <input
                    type="text"
                    required=true
                    placeholder="Enter region name"
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
fn RegionRow(region: Region) -> impl IntoView {
    let store = use_app_store();
    let reloader = use_reloader();
    let id = StoredValue::new(region.id.clone());
    let (editing, set_editing) = signal(false);
    let (name, set_name) = signal(region.region_name.clone());
    let (status, set_status) = signal(region.status.clone());

    let cancel = {
        let region = region.clone();
        move |_| {
            set_name.set(region.region_name.clone());
            set_status.set(region.status.clone());
            set_editing.set(false);
        }
    };

    let save = move |_| {
        let region_name = name.get().trim().to_string();
        if region_name.is_empty() {
            store_notify(&store, Notice::error("Region name is required"));
            return;
        }
        let status = status.get();
        spawn_local(async move {
            let args = RegionArgs { region_name: &region_name, status: &status };
            let outcome = api::client().update_region(&id.get_value(), &args).await;
            if outcome.is_ok() {
                set_editing.set(false);
            }
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Update, "region"));
        });
    };

    let delete = Callback::new(move |_| {
        spawn_local(async move {
            let outcome = api::client().delete_region(&id.get_value()).await;
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Delete, "region"));
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
                        <DeleteButton prompt="Delete this region?" on_confirm=delete />
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
                    <button class="btn" on:click=cancel.clone()>"Cancel"</button>
                </td>
            </Show>
        </tr>
    }
}
