//! City Page
//!
//! The add form cascades region → state; the state list is reloaded for
//! every region change.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{label_for, load_into, pairs, LoadError, LoadFailures};
use crate::api::{self, CreateCityArgs, UpdateCityArgs};
use crate::cascade::{LocationSelection, OptionsFetch};
use crate::components::{DeleteButton, FormActions, OptionSelect, StatusBadge, StatusSelect};
use crate::context::{use_reloader, Reloader};
use crate::crud::{self, Mutation};
use crate::models::{City, RecordStatus, Region, State};
use crate::store::{store_notify, use_app_store, Notice};

fn region_field(region: &Region) -> (&str, &str) {
    (&region.region_id, &region.region_name)
}

/// Row's own region name, else the name looked up once regions arrive
fn region_label(row_name: Option<String>, region_id: String, regions: ReadSignal<Vec<Region>>) -> Signal<String> {
    Signal::derive(move || match &row_name {
        Some(name) => name.clone(),
        None => regions.with(|list| label_for(list, &region_id, region_field)),
    })
}

fn state_field(state: &State) -> (&str, &str) {
    (&state.state_id, &state.state_name)
}

#[component]
pub fn CityPage() -> impl IntoView {
    let reloader = Reloader::provide();
    let (cities, set_cities) = signal(Vec::<City>::new());
    let (regions, set_regions) = signal(Vec::<Region>::new());
    let load_errors = RwSignal::new(LoadFailures::default());

    Effect::new(move |_| {
        load_into("City", "regions", set_regions, load_errors, |api| async move { api.list_regions().await });
    });
    Effect::new(move |_| {
        reloader.track();
        load_into("City", "cities", set_cities, load_errors, |api| async move { api.list_cities().await });
    });

    view! {
        <section class="page">
            <h1>"Cities"</h1>
            <CityForm regions=regions />
            <LoadError errors=load_errors />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Region Name"</th>
                        <th>"State Name"</th>
                        <th>"City Name"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || cities.get()
                        key=|city| city.clone()
                        children=move |city| {
                            let region_name = region_label(city.region_name.clone(), city.region_id.clone(), regions);
                            view! { <CityRow city=city region_name=region_name /> }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn CityForm(regions: ReadSignal<Vec<Region>>) -> impl IntoView {
    let store = use_app_store();
    let reloader = use_reloader();
    let selection = RwSignal::new(LocationSelection::default());
    let (states, set_states) = signal(Vec::<State>::new());
    let (name, set_name) = signal(String::new());
    let (status, set_status) = signal(RecordStatus::default().as_str().to_string());
    let (busy, set_busy) = signal(false);

    let region_options = Memo::new(move |_| regions.with(|list| pairs(list, region_field)));
    let state_options = Memo::new(move |_| states.with(|list| pairs(list, state_field)));

    let load_states = move |fetch: OptionsFetch| {
        let OptionsFetch::States { region_id } = fetch.clone() else { return };
        spawn_local(async move {
            let loaded = api::client().states_by_region(&region_id).await;
            if !selection.with_untracked(|sel| sel.wants(&fetch)) {
                log::debug!("[City] dropping stale states for region {}", region_id);
                return;
            }
            match loaded {
                Ok(list) => set_states.set(list),
                Err(e) => {
                    log::error!("[City] states for region {} failed: {}", region_id, e);
                    set_states.set(Vec::new());
                }
            }
        });
    };

    let on_region = move |region_id: String| {
        set_states.set(Vec::new());
        let fetch = selection.write().select_region(&region_id);
        if let Some(fetch) = fetch {
            load_states(fetch);
        }
    };

    let reset = move || {
        selection.set(LocationSelection::default());
        set_states.set(Vec::new());
        set_name.set(String::new());
        set_status.set(RecordStatus::default().as_str().to_string());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let LocationSelection { region_id, state_id } = selection.get();
        let city_name = name.get().trim().to_string();
        if region_id.is_empty() || state_id.is_empty() || city_name.is_empty() {
            store_notify(&store, Notice::error("Region, state and city name are required"));
            return;
        }
        let status = status.get();
        set_busy.set(true);
        spawn_local(async move {
            let args = CreateCityArgs {
                region_id: &region_id,
                state_id: &state_id,
                city_name: &city_name,
                status: &status,
            };
            let outcome = api::client().create_city(&args).await;
            if outcome.is_ok() {
                reset();
            }
            set_busy.set(false);
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Create, "city"));
        });
    };

    view! {
        <form class="record-form" on:submit=submit>
            <label>
                "Region"
                <OptionSelect
                    options=region_options
                    value=Signal::derive(move || selection.with(|sel| sel.region_id.clone()))
                    placeholder="Select region"
                    on_change=on_region
                />
            </label>
            <label>
                "State"
                <OptionSelect
                    options=state_options
                    value=Signal::derive(move || selection.with(|sel| sel.state_id.clone()))
                    placeholder="Select state"
                    disabled=Signal::derive(move || !selection.with(LocationSelection::state_enabled))
                    on_change=move |v: String| selection.write().select_state(&v)
                />
            </label>
            <label>
                "City Name"
                <input
                    type="text"
                    required=true
                    placeholder="Enter city name"
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
fn CityRow(city: City, region_name: Signal<String>) -> impl IntoView {
    let store = use_app_store();
    let reloader = use_reloader();
    let id = StoredValue::new(city.id.clone());
    let stored = StoredValue::new(city.clone());
    let (editing, set_editing) = signal(false);
    let (name, set_name) = signal(city.city_name.clone());
    let (status, set_status) = signal(city.status.clone());

    let cancel = move |_| {
        stored.with_value(|city| {
            set_name.set(city.city_name.clone());
            set_status.set(city.status.clone());
        });
        set_editing.set(false);
    };

    let save = move |_| {
        let city_name = name.get().trim().to_string();
        if city_name.is_empty() {
            store_notify(&store, Notice::error("City name is required"));
            return;
        }
        let status = status.get();
        spawn_local(async move {
            let args = UpdateCityArgs { city_name: &city_name, status: &status };
            let outcome = api::client().update_city(&id.get_value(), &args).await;
            if outcome.is_ok() {
                set_editing.set(false);
            }
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Update, "city"));
        });
    };

    let delete = Callback::new(move |_| {
        spawn_local(async move {
            let outcome = api::client().delete_city(&id.get_value()).await;
            crud::apply(&store, &reloader, crud::complete(&outcome, Mutation::Delete, "city"));
        });
    });

    view! {
        <tr>
            <td>{move || region_name.get()}</td>
            <td>{city.state_name.clone().unwrap_or(city.state_id.clone())}</td>
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <td>{move || name.get()}</td>
                    <td><StatusBadge status=status.get() /></td>
                    <td class="row-actions">
                        <button class="btn" on:click=move |_| set_editing.set(true)>"Edit"</button>
                        <DeleteButton prompt="Delete this city?" on_confirm=delete />
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_label_follows_late_region_list() {
        let owner = Owner::new();
        owner.set();
        let (regions, set_regions) = signal(Vec::<Region>::new());
        let label = region_label(None, "R1".into(), regions);
        assert_eq!(label.get_untracked(), "R1");

        let north: Region = serde_json::from_value(serde_json::json!({
            "id": 1, "region_id": "R1", "region_name": "North", "status": "Active"
        }))
        .unwrap();
        set_regions.set(vec![north]);
        assert_eq!(label.get_untracked(), "North");

        let named = region_label(Some("South".into()), "R2".into(), regions);
        assert_eq!(named.get_untracked(), "South");
    }
}
