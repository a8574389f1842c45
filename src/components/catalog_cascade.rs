//! Catalog Cascade Component
//!
//! Category → item (→ type) selects driven by a shared `CatalogSelection`.
//! Dependent lists are fetched per parent change; a response that arrives
//! after the selection moved on is dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::OptionSelect;
use crate::api;
use crate::cascade::{CatalogSelection, OptionsFetch};
use crate::models::{CatalogItem, Category, WorkType};

/// How far down the chain the selects go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeDepth {
    Item,
    Type,
}

impl CascadeDepth {
    fn wants(&self, fetch: &OptionsFetch) -> bool {
        match fetch {
            OptionsFetch::Items { .. } => true,
            OptionsFetch::Types { .. } => *self == CascadeDepth::Type,
            OptionsFetch::States { .. } => false,
        }
    }
}

/// # Arguments
/// * `selection` - Current ids; stored values are restored on mount
/// * `lock_category` - Edit rows keep their category fixed
#[component]
pub fn CatalogCascade(
    selection: RwSignal<CatalogSelection>,
    #[prop(into)] categories: Signal<Vec<Category>>,
    depth: CascadeDepth,
    #[prop(optional)] lock_category: bool,
) -> impl IntoView {
    let (items, set_items) = signal(Vec::<CatalogItem>::new());
    let (types, set_types) = signal(Vec::<WorkType>::new());

    let load = move |fetch: OptionsFetch| {
        if !depth.wants(&fetch) {
            return;
        }
        spawn_local(async move {
            let client = api::client();
            match &fetch {
                OptionsFetch::Items { category_id } => {
                    let loaded = client.items_for_category(category_id).await;
                    if !selection.with_untracked(|sel| sel.wants(&fetch)) {
                        log::debug!("[Cascade] dropping stale items for category {}", category_id);
                        return;
                    }
                    set_items.set(loaded.unwrap_or_else(|e| {
                        log::error!("[Cascade] items for category {} failed: {}", category_id, e);
                        Vec::new()
                    }));
                }
                OptionsFetch::Types { category_id, item_id } => {
                    let loaded = client.types_for_item(category_id, item_id).await;
                    if !selection.with_untracked(|sel| sel.wants(&fetch)) {
                        log::debug!("[Cascade] dropping stale types for item {}", item_id);
                        return;
                    }
                    set_types.set(loaded.unwrap_or_else(|e| {
                        log::error!("[Cascade] types for item {} failed: {}", item_id, e);
                        Vec::new()
                    }));
                }
                OptionsFetch::States { .. } => {}
            }
        });
    };

    // Edit rows arrive with ids already chosen
    for fetch in selection.with_untracked(CatalogSelection::restore_fetches) {
        load(fetch);
    }

    let on_category = move |category_id: String| {
        let fetch = selection.write().select_category(&category_id);
        set_items.set(Vec::new());
        set_types.set(Vec::new());
        if let Some(fetch) = fetch {
            load(fetch);
        }
    };

    let on_item = move |item_id: String| {
        let fetch = selection.write().select_item(&item_id);
        set_types.set(Vec::new());
        if let Some(fetch) = fetch {
            load(fetch);
        }
    };

    let category_options = Memo::new(move |_| {
        categories.with(|list| {
            list.iter()
                .map(|c| (c.category_id.clone(), c.category_name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let item_options = Memo::new(move |_| {
        if !selection.with(CatalogSelection::item_enabled) {
            return Vec::new();
        }
        items.with(|list| {
            list.iter()
                .map(|i| (i.item_id.clone(), i.item_name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let type_options = Memo::new(move |_| {
        if !selection.with(CatalogSelection::type_enabled) {
            return Vec::new();
        }
        types.with(|list| {
            list.iter()
                .map(|t| (t.type_id.clone(), t.type_name.clone()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="catalog-cascade">
            <label>
                "Category"
                <OptionSelect
                    options=category_options
                    value=Signal::derive(move || selection.with(|sel| sel.category_id.clone()))
                    placeholder="Select category"
                    disabled=lock_category
                    on_change=on_category
                />
            </label>
            <label>
                "Item"
                <OptionSelect
                    options=item_options
                    value=Signal::derive(move || selection.with(|sel| sel.item_id.clone()))
                    placeholder="Select item"
                    disabled=Signal::derive(move || !selection.with(CatalogSelection::item_enabled))
                    on_change=on_item
                />
            </label>
            <Show when=move || depth == CascadeDepth::Type>
                <label>
                    "Type"
                    <OptionSelect
                        options=type_options
                        value=Signal::derive(move || selection.with(|sel| sel.type_id.clone()))
                        placeholder="Select type"
                        disabled=Signal::derive(move || !selection.with(CatalogSelection::type_enabled))
                        on_change=move |v: String| selection.write().select_type(&v)
                    />
                </label>
            </Show>
        </div>
    }
}
