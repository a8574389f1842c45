//! Sidebar Component
//!
//! Section links for every screen plus the admin session controls.

use leptos::prelude::*;

use crate::routes::{Page, SECTIONS};
use crate::session;
use crate::store::{store_navigate, use_app_store, AppStateStoreFields};

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_app_store();

    let sign_out = move |_| {
        session::clear();
        store.admin().set(None);
        log::info!("[Session] admin signed out");
        store_navigate(&store, Page::AdminLogin);
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar-brand">"Workforce Admin"</div>
            {SECTIONS.iter().map(|(heading, pages)| view! {
                <div class="sidebar-section">
                    <h3 class="sidebar-heading">{*heading}</h3>
                    {pages.iter().copied().map(|page| {
                        let is_active = move || store.page().get() == page;
                        view! {
                            <button
                                class=move || if is_active() { "sidebar-link active" } else { "sidebar-link" }
                                on:click=move |_| store_navigate(&store, page)
                            >
                                {page.title()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            }).collect_view()}

            <div class="sidebar-session">
                {move || match store.admin().get() {
                    Some(admin) => view! {
                        <span class="sidebar-email">{admin.email}</span>
                        <button class="sidebar-link" on:click=sign_out>"Sign out"</button>
                    }.into_any(),
                    None => view! {
                        <button class="sidebar-link" on:click=move |_| store_navigate(&store, Page::AdminLogin)>
                            "Admin sign-in"
                        </button>
                    }.into_any(),
                }}
            </div>
        </nav>
    }
}
