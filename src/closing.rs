//! Work Order Close Flow
//!
//! Search-result selection, child filtering and the close gate.

use thiserror::Error;

use crate::api::ApiError;
use crate::models::{WorkOrder, WorkOrderStatus};

/// Why the close button did nothing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CloseBlocked {
    #[error("No workorder selected!")]
    NoWorkOrder,
    #[error("Close all child workorders first ({0} still open).")]
    OpenChildren(usize),
    #[error("Upload at least 1 closing image.")]
    NoImages,
}

/// Work order numbers are upper-case alphanumerics
pub fn sanitize_query(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Exact number match wins, otherwise the first result
pub fn pick_match(results: Vec<WorkOrder>, query: &str) -> Option<WorkOrder> {
    let exact = results.iter().position(|wo| wo.workorder == query);
    let mut results = results;
    match exact {
        Some(index) => Some(results.swap_remove(index)),
        None => results.into_iter().next(),
    }
}

/// A search that selected nothing
#[derive(Debug, Error)]
pub enum SearchMiss {
    #[error("Workorder not found")]
    NotFound,
    #[error(transparent)]
    Failed(#[from] ApiError),
}

/// Work order a search selects; any miss leaves nothing selected
pub fn resolve_search(result: Result<Vec<WorkOrder>, ApiError>, query: &str) -> Result<WorkOrder, SearchMiss> {
    pick_match(result?, query).ok_or(SearchMiss::NotFound)
}

/// Children in OPEN, ACCEPTED or CLOSED; anything else is not tracked
pub fn relevant_children(children: Vec<WorkOrder>) -> Vec<WorkOrder> {
    children
        .into_iter()
        .filter(|c| {
            matches!(
                c.status,
                WorkOrderStatus::Open | WorkOrderStatus::Accepted | WorkOrderStatus::Closed
            )
        })
        .collect()
}

/// Close is offered while the work order is still in progress
pub fn can_offer_close(workorder: &WorkOrder) -> bool {
    matches!(workorder.status, WorkOrderStatus::Open | WorkOrderStatus::Accepted)
}

pub fn check_close(
    workorder: Option<&WorkOrder>,
    children: &[WorkOrder],
    image_count: usize,
) -> Result<(), CloseBlocked> {
    if workorder.is_none() {
        return Err(CloseBlocked::NoWorkOrder);
    }
    let open = children
        .iter()
        .filter(|c| c.status != WorkOrderStatus::Closed)
        .count();
    if open > 0 {
        return Err(CloseBlocked::OpenChildren(open));
    }
    if image_count == 0 {
        return Err(CloseBlocked::NoImages);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildFilter {
    #[default]
    All,
    Open,
    Closed,
}

impl ChildFilter {
    pub const ALL: [ChildFilter; 3] = [ChildFilter::All, ChildFilter::Open, ChildFilter::Closed];

    pub fn value(&self) -> &'static str {
        match self {
            ChildFilter::All => "ALL",
            ChildFilter::Open => "OPEN",
            ChildFilter::Closed => "CLOSED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChildFilter::All => "All",
            ChildFilter::Open => "Open",
            ChildFilter::Closed => "Closed",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "OPEN" => ChildFilter::Open,
            "CLOSED" => ChildFilter::Closed,
            _ => ChildFilter::All,
        }
    }

    pub fn matches(&self, child: &WorkOrder) -> bool {
        match self {
            ChildFilter::All => true,
            ChildFilter::Open => child.status == WorkOrderStatus::Open,
            ChildFilter::Closed => child.status == WorkOrderStatus::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wo(number: &str, status: &str) -> WorkOrder {
        WorkOrder {
            id: number.to_lowercase(),
            workorder: number.to_string(),
            status: WorkOrderStatus::from(status.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_sanitize_query() {
        assert_eq!(sanitize_query("wo-12 3a"), "WO123A");
        assert_eq!(sanitize_query("  "), "");
    }

    #[test]
    fn test_pick_exact_match_else_first() {
        let results = vec![wo("WO100", "OPEN"), wo("WO10", "OPEN"), wo("WO1000", "OPEN")];
        assert_eq!(pick_match(results.clone(), "WO10").unwrap().workorder, "WO10");
        assert_eq!(pick_match(results, "WO1").unwrap().workorder, "WO100");
        assert_eq!(pick_match(Vec::new(), "WO1"), None);
    }

    #[test]
    fn test_resolve_search_outcomes() {
        let found = resolve_search(Ok(vec![wo("WO1", "OPEN"), wo("WO12", "OPEN")]), "WO12").unwrap();
        assert_eq!(found.workorder, "WO12");

        let miss = resolve_search(Ok(Vec::new()), "WO2").unwrap_err();
        assert!(matches!(miss, SearchMiss::NotFound));
        assert_eq!(miss.to_string(), "Workorder not found");

        let failed = resolve_search(
            Err(ApiError::Status { status: 500, message: "database offline".into() }),
            "WO2",
        )
        .unwrap_err();
        assert!(matches!(failed, SearchMiss::Failed(ref e) if e.status() == Some(500)));
        assert_eq!(failed.to_string(), "database offline");
    }

    #[test]
    fn test_relevant_children_drop_unknown_statuses() {
        let kids = vec![wo("A", "open"), wo("B", "CANCELLED"), wo("C", "Closed"), wo("D", "ACCEPTED")];
        let kept: Vec<_> = relevant_children(kids).into_iter().map(|w| w.workorder).collect();
        assert_eq!(kept, vec!["A", "C", "D"]);
    }

    #[test]
    fn test_close_requires_workorder() {
        assert_eq!(check_close(None, &[], 1), Err(CloseBlocked::NoWorkOrder));
    }

    #[test]
    fn test_close_blocked_by_unclosed_children() {
        let parent = wo("WO1", "OPEN");
        let kids = vec![wo("WO1A", "CLOSED"), wo("WO1B", "ACCEPTED"), wo("WO1C", "OPEN")];
        assert_eq!(check_close(Some(&parent), &kids, 3), Err(CloseBlocked::OpenChildren(2)));
    }

    #[test]
    fn test_close_blocked_without_images() {
        let parent = wo("WO1", "ACCEPTED");
        let kids = vec![wo("WO1A", "closed")];
        assert_eq!(check_close(Some(&parent), &kids, 0), Err(CloseBlocked::NoImages));
    }

    #[test]
    fn test_close_allowed() {
        let parent = wo("WO1", "OPEN");
        let kids = vec![wo("WO1A", "CLOSED"), wo("WO1B", "closed")];
        assert_eq!(check_close(Some(&parent), &kids, 1), Ok(()));
        assert_eq!(check_close(Some(&parent), &[], 2), Ok(()));
    }

    #[test]
    fn test_close_offered_only_in_progress() {
        assert!(can_offer_close(&wo("WO1", "open")));
        assert!(can_offer_close(&wo("WO1", "ACCEPTED")));
        assert!(!can_offer_close(&wo("WO1", "CLOSED")));
        assert!(!can_offer_close(&wo("WO1", "")));
    }

    #[test]
    fn test_child_filter() {
        let open = wo("A", "OPEN");
        let accepted = wo("B", "ACCEPTED");
        let closed = wo("C", "CLOSED");
        assert!(ChildFilter::All.matches(&accepted));
        assert!(ChildFilter::Open.matches(&open));
        assert!(!ChildFilter::Open.matches(&accepted));
        assert!(ChildFilter::Closed.matches(&closed));
        assert_eq!(ChildFilter::parse("CLOSED"), ChildFilter::Closed);
        assert_eq!(ChildFilter::parse("bogus"), ChildFilter::All);
    }
}
