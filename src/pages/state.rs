//! State Page
//!
//! States belong to a region; only name and status are editable afterwards.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{label_for, load_into, pairs, LoadError, LoadFailures};
use crate::api::{self, CreateStateArgs, UpdateStateArgs};
use crate::components::{DeleteButton, FormActions, OptionSelect, StatusBadge, StatusSelect};
use crate::context::{use_reloader, Reloader};
use crate::crud::{self, Mutation};
use crate::models::{RecordStatus, Region, State};
use crate::store::{store_notify, use_app_store, Notice};

fn region_field(region: &Region) -> (&str, &str) {
    (&region.region_id, &region.region_name)
}

#[component]
pub fn StatePage() -> impl IntoView {
    let reloader = Reloader::provide();
    let (states, set_states) = signal(Vec::<State>::new());
    let (regions, set_regions) = signal(Vec::<Region>::new());
    let load_errors = RwSignal::new(LoadFailures::default());

    Effect::new(move |_| {
        load_into("State", "regions", set_regions, load_errors, |api| async move { api.list_regions().await });
    });
    Effect::new(move |_| {
        reloader.track();
        load_into("State", "states", set_states, load_errors, |api| async move { api.list_states().await });
    });

    let region_options = Memo::new(move |_| regions.with(|list| pairs(list, region_field)));

    view! {
        <section class="page">
            <h1>"States"</h1>
            <StateForm region_options=region_options />
            <LoadError errors=load_errors />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Region Name"</th>
                        <th>"State Name"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || states.get()
                        key=|state| state.clone()
                        children=move |state| {
                            let region_name = Signal::derive({
                                let state = state.clone();
                                move || match &state.region_name {
                                    Some(name) => name.clone(),
                                    None => regions.with(|list| label_for(list, &state.region_id, region_field)),
                                }
                            });
                            view! { <StateRow state=state region_name=region_name /> }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn StateForm(region_options: Memo<Vec<(String, String)>>) -> impl IntoView {
    let store = use_app_store();
    let reloader = use_reloader();
    let (region_id, set_region_id) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (status, set_status) = signal(RecordStatus::default().as_str().to_string());
    let (busy, set_busy) = signal(false);

    let reset = move || {
        set_region_id.set(String::new());
        set_name.set(String::new());
        set_status.set(RecordStatus::default().as_str().to_string());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let region = region_id.get();
        let state_name = name.get().trim().to_string();
        if region.is_empty() || state_name.is_empty() {
            store_notify(&store, Notice::error("Region and state name are required"));
            return;
        }
        let status = status.get();
        set_busy.set(true);
        spawn_local(async move {
            let args = CreateStateArgs { region_id: &region, state_name: &state_name, status: &status };
            let outcome = api::client().create_state(&args).await;
            if outcome.is_ok() {
                reset();
            }
            set_busy.set(false);
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Create, "state"));
        });
    };

    view! {
        <form class="record-form" on:submit=submit>
            <label>
                "Region"
                <OptionSelect
                    options=region_options
                    value=region_id
                    placeholder="Select region"
                    on_change=move |v| set_region_id.set(v)
                />
            </label>
            <label>
                "State Name"
                <input
                    type="text"
                    required=true
                    placeholder="Enter state name"
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
fn StateRow(state: State, region_name: Signal<String>) -> impl IntoView {
    let store = use_app_store();
    let reloader = use_reloader();
    let id = StoredValue::new(state.id.clone());
    let stored = StoredValue::new(state.clone());
    let (editing, set_editing) = signal(false);
    let (name, set_name) = signal(state.state_name.clone());
    let (status, set_status) = signal(state.status.clone());

    let cancel = move |_| {
        stored.with_value(|state| {
            set_name.set(state.state_name.clone());
            set_status.set(state.status.clone());
        });
        set_editing.set(false);
    };

    let save = move |_| {
        let state_name = name.get().trim().to_string();
        if state_name.is_empty() {
            store_notify(&store, Notice::error("State name is required"));
            return;
        }
        let status = status.get();
        spawn_local(async move {
            let args = UpdateStateArgs { state_name: &state_name, status: &status };
            let outcome = api::client().update_state(&id.get_value(), &args).await;
            if outcome.is_ok() {
                set_editing.set(false);
            }
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Update, "state"));
        });
    };

    let delete = Callback::new(move |_| {
        spawn_local(async move {
            let outcome = api::client().delete_state(&id.get_value()).await;
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Delete, "state"));
        });
    });

    view! {
        <tr>
            <td>{move || region_name.get()}</td>
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <td>{move || name.get()}</td>
                    <td><StatusBadge status=status.get() /></td>
                    <td class="row-actions">
                        <button class="btn" on:click=move |_| set_editing.set(true)>"Edit"</button>
                        <DeleteButton prompt="Delete this state?" on_confirm=delete />
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
