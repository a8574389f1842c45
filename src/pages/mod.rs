//! Pages
//!
//! One component per screen, plus the list-loading helpers they share.

mod admin_dashboard;
mod admin_login;
mod category;
mod city;
mod description;
mod item;
mod region;
mod search_workorder;
mod state;
mod work_type;

pub use admin_dashboard::AdminDashboardPage;
pub use admin_login::AdminLoginPage;
pub use category::CategoryPage;
pub use city::CityPage;
pub use description::DescriptionPage;
pub use item::ItemPage;
pub use region::RegionPage;
pub use search_workorder::SearchWorkOrderPage;
pub use state::StatePage;
pub use work_type::WorkTypePage;

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiClient, ApiError};

/// Failed list loads on one page, one entry per list
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct LoadFailures(Vec<(&'static str, String)>);

impl LoadFailures {
    /// Replace what `list` last reported; `None` means it loaded
    pub fn record(&mut self, list: &'static str, failure: Option<String>) {
        self.0.retain(|(name, _)| *name != list);
        if let Some(message) = failure {
            self.0.push((list, message));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, String)> {
        self.0.iter()
    }
}

/// Fetch a list into `rows`; a failure keeps the previous rows and is
/// recorded under `list` until that list loads again
pub(crate) fn load_into<T, Fut>(
    area: &'static str,
    list: &'static str,
    rows: WriteSignal<Vec<T>>,
    errors: RwSignal<LoadFailures>,
    fetch: impl FnOnce(ApiClient) -> Fut + 'static,
) where
    T: Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    spawn_local(async move {
        match fetch(api::client()).await {
            Ok(loaded) => {
                log::debug!("[{}] loaded {} {}", area, loaded.len(), list);
                rows.set(loaded);
                errors.update(|failures| failures.record(list, None));
            }
            Err(e) => {
                match e.status() {
                    Some(status) => log::error!("[{}] loading {} failed with HTTP {}: {}", area, list, status, e),
                    None => log::error!("[{}] loading {} failed: {}", area, list, e),
                }
                errors.update(|failures| failures.record(list, Some(e.to_string())));
            }
        }
    });
}

/// `(value, label)` pairs for an option select
pub(crate) fn pairs<T>(records: &[T], field: impl Fn(&T) -> (&str, &str)) -> Vec<(String, String)> {
    records
        .iter()
        .map(|record| {
            let (value, label) = field(record);
            (value.to_string(), label.to_string())
        })
        .collect()
}

/// Label of the record keyed by `key`; unknown keys show as-is
pub(crate) fn label_for<T>(records: &[T], key: &str, field: impl Fn(&T) -> (&str, &str)) -> String {
    records
        .iter()
        .map(&field)
        .find(|(value, _)| *value == key)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Inline messages for failed list loads
#[component]
pub(crate) fn LoadError(errors: RwSignal<LoadFailures>) -> impl IntoView {
    move || {
        errors.with(|failures| {
            failures
                .iter()
                .map(|(list, e)| view! { <p class="load-error">{format!("Could not load {}: {}", list, e)}</p> })
                .collect_view()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_and_labels() {
        let rows = vec![("R1", "North"), ("R2", "South")];
        assert_eq!(
            pairs(&rows, |row| (row.0, row.1)),
            vec![("R1".to_string(), "North".to_string()), ("R2".to_string(), "South".to_string())]
        );
        assert_eq!(label_for(&rows, "R2", |row| (row.0, row.1)), "South");
        assert_eq!(label_for(&rows, "R9", |row| (row.0, row.1)), "R9");
    }

    #[test]
    fn test_load_failure_survives_sibling_success() {
        let mut failures = LoadFailures::default();
        failures.record("cities", Some("HTTP 500 Internal Server Error".into()));
        failures.record("regions", None);
        assert_eq!(
            failures.iter().cloned().collect::<Vec<_>>(),
            vec![("cities", "HTTP 500 Internal Server Error".to_string())]
        );

        failures.record("regions", Some("timeout".into()));
        failures.record("cities", Some("HTTP 502 Bad Gateway".into()));
        assert_eq!(failures.iter().count(), 2);
        assert!(failures.iter().any(|(list, e)| *list == "cities" && e == "HTTP 502 Bad Gateway"));

        failures.record("cities", None);
        failures.record("regions", None);
        assert_eq!(failures, LoadFailures::default());
    }
}
