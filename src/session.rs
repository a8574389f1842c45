//! Admin Session Flag
//!
//! The admin screens are gated by a JSON record in `localStorage["admin"]`.
//! It is a UI gate only; the backend decides what an admin may do.

use serde::{Deserialize, Serialize};

pub const STORAGE_KEY: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub email: String,
}

impl AdminSession {
    /// Valid when the email looks like an address
    pub fn new(email: &str) -> Option<Self> {
        let email = email.trim();
        let (user, domain) = email.split_once('@')?;
        (!user.is_empty() && !domain.is_empty()).then(|| Self { email: email.to_string() })
    }
}

/// Parse the stored record; anything unreadable means "signed out"
pub fn parse_session(raw: Option<&str>) -> Option<AdminSession> {
    let session: AdminSession = serde_json::from_str(raw?).ok()?;
    AdminSession::new(&session.email)
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn load() -> Option<AdminSession> {
    let raw = storage()?.get_item(STORAGE_KEY).ok()?;
    parse_session(raw.as_deref())
}

pub fn save(session: &AdminSession) {
    let Some(storage) = storage() else { return };
    match serde_json::to_string(session) {
        Ok(raw) => {
            if storage.set_item(STORAGE_KEY, &raw).is_err() {
                log::warn!("[Session] localStorage rejected the admin session");
            }
        }
        Err(e) => log::error!("[Session] cannot encode session: {}", e),
    }
}

pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session() {
        assert_eq!(
            parse_session(Some(r#"{"email":"ops@example.com","name":"Ops"}"#)),
            Some(AdminSession { email: "ops@example.com".into() })
        );
        assert_eq!(parse_session(None), None);
        assert_eq!(parse_session(Some("true")), None);
        assert_eq!(parse_session(Some(r#"{"email":""}"#)), None);
    }

    #[test]
    fn test_new_requires_address_shape() {
        assert!(AdminSession::new(" ops@example.com ").is_some());
        assert!(AdminSession::new("ops").is_none());
        assert!(AdminSession::new("@example.com").is_none());
    }
}
