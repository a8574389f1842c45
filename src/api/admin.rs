//! Admin Endpoints
//!
//! Provider / contractor approval and messaging.

use reqwest::Method;
use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::models::{Contractor, Provider};

/// Which account table an action targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Provider,
    Contractor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl AccountKind {
    pub fn noun(&self) -> &'static str {
        match self {
            AccountKind::Provider => "provider",
            AccountKind::Contractor => "contractor",
        }
    }

    pub fn decision_path(&self, decision: Decision) -> String {
        let verb = match decision {
            Decision::Approve => "approve",
            Decision::Reject => "reject",
        };
        format!("/api/admin/{}_{}", verb, self.noun())
    }

    pub fn message_path(&self) -> &'static str {
        match self {
            AccountKind::Provider => "/api/admin/send_message",
            AccountKind::Contractor => "/api/admin/send_message_contractor",
        }
    }

    /// Image kinds linked from the dashboard rows
    pub fn image_kinds(&self) -> [(&'static str, &'static str); 2] {
        match self {
            AccountKind::Provider => [("profile", "Profile"), ("certificate", "Certificate")],
            AccountKind::Contractor => [("contractor_logo", "Logo"), ("contractor_certificate", "Certificate")],
        }
    }
}

#[derive(Serialize)]
struct EmailArgs<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct MessageArgs<'a> {
    email: &'a str,
    message: &'a str,
}

impl ApiClient {
    pub async fn list_providers(&self) -> Result<Vec<Provider>, ApiError> {
        self.get_list("/api/admin/providers").await
    }

    pub async fn list_contractors(&self) -> Result<Vec<Contractor>, ApiError> {
        self.get_list("/api/admin/contractors").await
    }

    pub async fn decide_account(&self, kind: AccountKind, decision: Decision, email: &str) -> Result<(), ApiError> {
        self.submit(Method::POST, &kind.decision_path(decision), &EmailArgs { email })
            .await
            .map(|_| ())
    }

    pub async fn send_account_message(&self, kind: AccountKind, email: &str, message: &str) -> Result<(), ApiError> {
        self.submit(Method::POST, kind.message_path(), &MessageArgs { email, message })
            .await
            .map(|_| ())
    }

    pub fn account_image_url(&self, email: &str, kind: &str) -> String {
        self.config().image_url(email, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_paths() {
        assert_eq!(AccountKind::Provider.decision_path(Decision::Approve), "/api/admin/approve_provider");
        assert_eq!(AccountKind::Provider.decision_path(Decision::Reject), "/api/admin/reject_provider");
        assert_eq!(AccountKind::Contractor.decision_path(Decision::Approve), "/api/admin/approve_contractor");
        assert_eq!(AccountKind::Contractor.decision_path(Decision::Reject), "/api/admin/reject_contractor");
    }

    #[test]
    fn test_message_paths() {
        assert_eq!(AccountKind::Provider.message_path(), "/api/admin/send_message");
        assert_eq!(AccountKind::Contractor.message_path(), "/api/admin/send_message_contractor");
    }
}
