//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::routes::Page;
use crate::session::AdminSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Inline banner message shown after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Screen shown in the content area
    pub page: Page,
    /// Admin session flag mirrored from localStorage
    pub admin: Option<AdminSession>,
    /// Latest action outcome, cleared by the banner
    pub notice: Option<Notice>,
    /// Bumped on every notice so identical messages re-arm the banner timer
    pub notice_serial: u32,
}

impl AppState {
    pub fn new(page: Page, admin: Option<AdminSession>) -> Self {
        Self { page, admin, ..Default::default() }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show a banner message
pub fn store_notify(store: &AppStore, notice: Notice) {
    if notice.is_error() {
        log::warn!("[Notice] {}", notice.text);
    } else {
        log::info!("[Notice] {}", notice.text);
    }
    store.notice().set(Some(notice));
    store.notice_serial().update(|n| *n = n.wrapping_add(1));
}

pub fn store_clear_notice(store: &AppStore) {
    store.notice().set(None);
}

/// Switch screens; the URL hash follows
pub fn store_navigate(store: &AppStore, page: Page) {
    store.page().set(page);
    crate::routes::write_hash(page);
}
