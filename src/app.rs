//! Workforce Admin App
//!
//! Sidebar plus one content page chosen by the URL hash.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::{NoticeBanner, Sidebar};
use crate::pages::{
    AdminDashboardPage, AdminLoginPage, CategoryPage, CityPage, DescriptionPage, ItemPage, RegionPage,
    SearchWorkOrderPage, StatePage, WorkTypePage,
};
use crate::routes::{self, Page};
use crate::session;
use crate::store::{store_navigate, AppState, AppStateStoreFields, AppStore};

/// Follow back/forward and hand-edited hashes
fn listen_hash_changes(store: AppStore) {
    let Some(window) = web_sys::window() else { return };
    let on_change = Closure::<dyn Fn()>::new(move || {
        let page = routes::read_hash();
        if store.page().get_untracked() != page {
            log::debug!("[Route] hash changed to {}", page.path());
            store.page().set(page);
        }
    });
    if window
        .add_event_listener_with_callback("hashchange", on_change.as_ref().unchecked_ref())
        .is_ok()
    {
        // Lives as long as the page
        on_change.forget();
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = AppStore::new(AppState::new(routes::read_hash(), session::load()));
    provide_context(store);
    listen_hash_changes(store);

    // Admin screens bounce to sign-in without a session flag
    Effect::new(move |_| {
        let page = store.page().get();
        if page.requires_admin() && store.admin().with(Option::is_none) {
            log::info!("[Route] {} needs an admin session", page.path());
            store_navigate(&store, Page::AdminLogin);
        }
    });

    let content = move || {
        let page = store.page().get();
        if page.requires_admin() && store.admin().with(Option::is_none) {
            return view! { <AdminLoginPage /> }.into_any();
        }
        match page {
            Page::Region => view! { <RegionPage /> }.into_any(),
            Page::State => view! { <StatePage /> }.into_any(),
            Page::City => view! { <CityPage /> }.into_any(),
            Page::Category => view! { <CategoryPage /> }.into_any(),
            Page::Item => view! { <ItemPage /> }.into_any(),
            Page::Type => view! { <WorkTypePage /> }.into_any(),
            Page::Description => view! { <DescriptionPage /> }.into_any(),
            Page::SearchWorkOrder => view! { <SearchWorkOrderPage /> }.into_any(),
            Page::AdminDashboard => view! { <AdminDashboardPage /> }.into_any(),
            Page::AdminLogin => view! { <AdminLoginPage /> }.into_any(),
        }
    };

    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="main-content">
                <NoticeBanner />
                {content}
            </main>
        </div>
    }
}
