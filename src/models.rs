//! Frontend Models
//!
//! Records exactly as the backend sends them. Identifiers arrive as either
//! JSON numbers or strings and are kept as strings.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ========================
// Identifiers & Status
// ========================

/// Accept `7`, `"7"` or `null` and keep the textual form
fn flexible_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(de::Error::custom(format!("expected id or text, got {}", other))),
    }
}

fn flexible_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = flexible_string(deserializer)?;
    Ok(if text.is_empty() { None } else { Some(text) })
}

/// Setup records are either Active or Inactive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecordStatus {
    #[default]
    Active,
    Inactive,
}

impl RecordStatus {
    pub const ALL: [RecordStatus; 2] = [RecordStatus::Active, RecordStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Inactive => "Inactive",
        }
    }

    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("inactive") {
            RecordStatus::Inactive
        } else {
            RecordStatus::Active
        }
    }
}

// ========================
// Locations
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Region {
    #[serde(deserialize_with = "flexible_string")]
    pub id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub region_id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub region_name: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct State {
    #[serde(deserialize_with = "flexible_string")]
    pub id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub state_id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub region_id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub state_name: String,
    /// Joined in by the list endpoint
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct City {
    #[serde(deserialize_with = "flexible_string")]
    pub id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub city_id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub region_id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub state_id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub city_name: String,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub state_name: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub status: String,
}

// ========================
// Catalog (category → item → type → description)
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "flexible_string")]
    pub id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub category_id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub category_name: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct CatalogItem {
    #[serde(deserialize_with = "flexible_string")]
    pub id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub item_id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub category_id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub item_name: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct WorkType {
    #[serde(deserialize_with = "flexible_string")]
    pub id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub type_id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub category_id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub item_id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub type_name: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Description {
    #[serde(deserialize_with = "flexible_string")]
    pub id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub category_id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub item_id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub type_id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub description_name: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub status: String,
}

// ========================
// Work Orders
// ========================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkOrderStatus {
    Open,
    Accepted,
    Closed,
    Other(String),
}

impl From<String> for WorkOrderStatus {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "OPEN" => WorkOrderStatus::Open,
            "ACCEPTED" => WorkOrderStatus::Accepted,
            "CLOSED" => WorkOrderStatus::Closed,
            _ => WorkOrderStatus::Other(value),
        }
    }
}

impl<'de> Deserialize<'de> for WorkOrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(WorkOrderStatus::from(flexible_string(deserializer)?))
    }
}

impl Default for WorkOrderStatus {
    fn default() -> Self {
        WorkOrderStatus::Other(String::new())
    }
}

impl WorkOrderStatus {
    pub fn label(&self) -> &str {
        match self {
            WorkOrderStatus::Open => "OPEN",
            WorkOrderStatus::Accepted => "ACCEPTED",
            WorkOrderStatus::Closed => "CLOSED",
            WorkOrderStatus::Other(raw) => raw,
        }
    }
}

/// Parent and child work orders share one shape; `work_type`/`item` are
/// only filled for child rows.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct WorkOrder {
    #[serde(default, deserialize_with = "flexible_string")]
    pub id: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub workorder: String,
    #[serde(default)]
    pub status: WorkOrderStatus,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub contractor_name: Option<String>,
    #[serde(default)]
    pub requested_time_close: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub created_t: Option<String>,
    #[serde(default, deserialize_with = "flexible_opt_string")]
    pub parent_workorder: Option<String>,
    #[serde(default, rename = "type")]
    pub work_type: Option<String>,
    #[serde(default)]
    pub item: Option<String>,
}

// ========================
// Accounts
// ========================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountStatus {
    Pending,
    Approved,
    Rejected,
    Other(String),
}

impl<'de> Deserialize<'de> for AccountStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = flexible_string(deserializer)?;
        Ok(match raw.to_ascii_lowercase().as_str() {
            "pending" => AccountStatus::Pending,
            "approved" => AccountStatus::Approved,
            "rejected" => AccountStatus::Rejected,
            _ => AccountStatus::Other(raw),
        })
    }
}

impl Default for AccountStatus {
    fn default() -> Self {
        AccountStatus::Pending
    }
}

impl AccountStatus {
    pub fn label(&self) -> &str {
        match self {
            AccountStatus::Pending => "pending",
            AccountStatus::Approved => "approved",
            AccountStatus::Rejected => "rejected",
            AccountStatus::Other(raw) => raw,
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            AccountStatus::Approved => "badge badge-approved",
            AccountStatus::Pending => "badge badge-pending",
            _ => "badge badge-rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub service_location: Option<String>,
    #[serde(default, deserialize_with = "flexible_opt_string")]
    pub service_rate: Option<String>,
}

/// Services arrive as an array, an object of services, or null
fn service_list<'de, D>(deserializer: D) -> Result<Vec<Service>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = match Value::deserialize(deserializer)? {
        Value::Array(values) => values,
        Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
        _ => Vec::new(),
    };
    values
        .into_iter()
        .map(|v| serde_json::from_value(v).map_err(de::Error::custom))
        .collect()
}

/// Individual service provider account
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Provider {
    #[serde(default, deserialize_with = "flexible_string")]
    pub provider_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub email_id: String,
    #[serde(default, deserialize_with = "flexible_opt_string")]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub status: AccountStatus,
    #[serde(default, deserialize_with = "service_list")]
    pub services: Vec<Service>,
}

/// Company account
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contractor {
    #[serde(default, deserialize_with = "flexible_string")]
    pub company_id: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub email_id: String,
    #[serde(default, deserialize_with = "flexible_opt_string")]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub status: AccountStatus,
    #[serde(default, deserialize_with = "service_list")]
    pub services: Vec<Service>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_and_string_ids() {
        let region: Region = serde_json::from_value(json!({
            "id": 3, "region_id": "R01", "region_name": "North", "status": "Active"
        }))
        .unwrap();
        assert_eq!(region.id, "3");
        assert_eq!(region.region_id, "R01");

        let city: City = serde_json::from_value(json!({
            "id": "9", "city_id": 12, "region_id": 1, "state_id": 4,
            "city_name": "Ipoh", "state_name": "Perak", "status": "Inactive"
        }))
        .unwrap();
        assert_eq!(city.state_id, "4");
        assert_eq!(city.region_name, None);
        assert_eq!(RecordStatus::parse(&city.status), RecordStatus::Inactive);
    }

    #[test]
    fn test_workorder_status_is_case_insensitive() {
        let wo: WorkOrder = serde_json::from_value(json!({
            "id": 1, "workorder": "WO100", "status": "accepted", "parent_workorder": null
        }))
        .unwrap();
        assert_eq!(wo.status, WorkOrderStatus::Accepted);
        assert_eq!(wo.parent_workorder, None);

        let child: WorkOrder = serde_json::from_value(json!({
            "workorder": "WO100-1", "status": "On Hold", "type": "Repair", "item": "Pipe"
        }))
        .unwrap();
        assert_eq!(child.status, WorkOrderStatus::Other("On Hold".into()));
        assert_eq!(child.work_type.as_deref(), Some("Repair"));
    }

    #[test]
    fn test_services_accept_array_object_or_null() {
        let provider: Provider = serde_json::from_value(json!({
            "provider_id": 1, "email_id": "p@x.com", "status": "pending",
            "services": [{"service_name": "Plumbing", "service_rate": 45}]
        }))
        .unwrap();
        assert_eq!(provider.services.len(), 1);
        assert_eq!(provider.services[0].service_rate.as_deref(), Some("45"));

        let contractor: Contractor = serde_json::from_value(json!({
            "company_id": 2, "company_name": "Acme", "email_id": "c@x.com", "status": "APPROVED",
            "services": {"a": {"service_name": "Wiring"}, "b": {"service_name": "Paint"}}
        }))
        .unwrap();
        assert_eq!(contractor.services.len(), 2);
        assert_eq!(contractor.status, AccountStatus::Approved);

        let empty: Provider = serde_json::from_value(json!({
            "email_id": "e@x.com", "status": "rejected", "services": null
        }))
        .unwrap();
        assert!(empty.services.is_empty());
        assert_eq!(empty.status.badge_class(), "badge badge-rejected");
    }
}
