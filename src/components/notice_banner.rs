//! Notice Banner Component
//!
//! Inline replacement for blocking alerts. A notice dismisses itself unless a
//! newer one replaced it in the meantime.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{store_clear_notice, use_app_store, AppStateStoreFields};

const SUCCESS_MS: u32 = 4_000;
const ERROR_MS: u32 = 8_000;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let store = use_app_store();

    Effect::new(move |_| {
        let serial = store.notice_serial().get();
        let Some(notice) = store.notice().get_untracked() else { return };
        let delay = if notice.is_error() { ERROR_MS } else { SUCCESS_MS };
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if store.notice_serial().get_untracked() == serial {
                store_clear_notice(&store);
            }
        });
    });

    view! {
        {move || store.notice().get().map(|notice| {
            let class = if notice.is_error() { "notice notice-error" } else { "notice notice-success" };
            view! {
                <div class=class role="status">
                    <span class="notice-text">{notice.text}</span>
                    <button class="notice-close" on:click=move |_| store_clear_notice(&store)>"×"</button>
                </div>
            }
        })}
    }
}
