//! Mutation Completion
//!
//! Every add/update/delete/approve/reject ends the same way: one notice, and
//! one list refetch if and only if the backend accepted the change.

use crate::api::ApiError;
use crate::context::Reloader;
use crate::store::{store_notify, AppStore, Notice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Update,
    Delete,
}

impl Mutation {
    fn done(&self) -> &'static str {
        match self {
            Mutation::Create => "added",
            Mutation::Update => "updated",
            Mutation::Delete => "deleted",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Mutation::Create => "add",
            Mutation::Update => "update",
            Mutation::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub notice: Notice,
    pub refetch: bool,
}

impl Completion {
    pub fn from_outcome<T>(outcome: &Result<T, ApiError>, success: String, failure: &str) -> Self {
        match outcome {
            Ok(_) => Self { notice: Notice::success(success), refetch: true },
            Err(e) => Self { notice: Notice::error(format!("{}: {}", failure, e)), refetch: false },
        }
    }
}

/// Completion for a setup-record mutation, e.g. `City added successfully`
pub fn complete<T>(outcome: &Result<T, ApiError>, mutation: Mutation, noun: &str) -> Completion {
    Completion::from_outcome(
        outcome,
        format!("{} {} successfully", capitalize(noun), mutation.done()),
        &format!("Failed to {} {}", mutation.verb(), noun),
    )
}

/// Show the notice and refetch the page's list when the change was accepted
pub fn apply(store: &AppStore, reloader: &Reloader, completion: Completion) {
    let Completion { notice, refetch } = completion;
    store_notify(store, notice);
    if refetch {
        reloader.reload();
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::NoticeKind;

    fn rejected(message: &str) -> Result<(), ApiError> {
        Err(ApiError::Rejected(message.to_string()))
    }

    #[test]
    fn test_success_refetches_once() {
        let done = complete(&Ok::<(), ApiError>(()), Mutation::Create, "city");
        assert!(done.refetch);
        assert_eq!(done.notice, Notice::success("City added successfully"));
    }

    #[test]
    fn test_failure_never_refetches() {
        let done = complete(&rejected("City exists"), Mutation::Update, "city");
        assert!(!done.refetch);
        assert_eq!(done.notice.kind, NoticeKind::Error);
        assert_eq!(done.notice.text, "Failed to update city: City exists");
    }

    #[test]
    fn test_status_error_message_is_carried() {
        let outcome: Result<(), ApiError> = Err(ApiError::Status { status: 500, message: "HTTP 500".into() });
        let done = complete(&outcome, Mutation::Delete, "region");
        assert_eq!(done.notice.text, "Failed to delete region: HTTP 500");
    }

    #[test]
    fn test_custom_outcome_text() {
        let done = Completion::from_outcome(&Ok::<(), ApiError>(()), "Provider approved".into(), "Error approving provider");
        assert_eq!(done.notice.text, "Provider approved");
        let done = Completion::from_outcome(&rejected("not pending"), "Provider approved".into(), "Error approving provider");
        assert_eq!(done.notice.text, "Error approving provider: not pending");
    }
}
