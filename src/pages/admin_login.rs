//! Admin Login Page
//!
//! Records the admin session flag locally; the backend is not consulted.

use leptos::prelude::*;

use crate::routes::Page;
use crate::session::{self, AdminSession};
use crate::store::{store_navigate, store_notify, use_app_store, AppStateStoreFields, Notice};

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let store = use_app_store();
    let (email, set_email) = signal(String::new());

    let sign_in = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(admin) = AdminSession::new(&email.get()) else {
            store_notify(&store, Notice::error("Enter a valid admin email"));
            return;
        };
        session::save(&admin);
        log::info!("[Session] admin signed in as {}", admin.email);
        store.admin().set(Some(admin));
        set_email.set(String::new());
        store_navigate(&store, Page::AdminDashboard);
    };

    view! {
        <section class="page page-narrow">
            <h1>"Admin Sign-in"</h1>
            <form class="record-form" on:submit=sign_in>
                <label>
                    "Email"
                    <input
                        type="email"
                        required=true
                        placeholder="admin@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">"Sign in"</button>
                </div>
            </form>
        </section>
    }
}
