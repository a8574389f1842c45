//! Location Endpoints
//!
//! Regions, states and cities.

use reqwest::Method;
use serde::Serialize;

use super::{accepted, ApiClient, ApiError};
use crate::config::segment;
use crate::models::{City, Region, State};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct RegionArgs<'a> {
    pub region_name: &'a str,
    pub status: &'a str,
}

#[derive(Serialize)]
pub struct CreateStateArgs<'a> {
    pub region_id: &'a str,
    pub state_name: &'a str,
    pub status: &'a str,
}

#[derive(Serialize)]
pub struct UpdateStateArgs<'a> {
    pub state_name: &'a str,
    pub status: &'a str,
}

#[derive(Serialize)]
pub struct CreateCityArgs<'a> {
    pub region_id: &'a str,
    pub state_id: &'a str,
    pub city_name: &'a str,
    pub status: &'a str,
}

#[derive(Serialize)]
pub struct UpdateCityArgs<'a> {
    pub city_name: &'a str,
    pub status: &'a str,
}

pub fn states_by_region_path(region_id: &str) -> String {
    format!("/api/state/by-region/{}", segment(region_id))
}

// ========================
// Commands
// ========================

impl ApiClient {
    pub async fn list_regions(&self) -> Result<Vec<Region>, ApiError> {
        self.get_list("/api/region/").await
    }

    pub async fn create_region(&self, args: &RegionArgs<'_>) -> Result<(), ApiError> {
        self.submit(Method::POST, "/api/region/", args).await.map(|_| ())
    }

    pub async fn update_region(&self, id: &str, args: &RegionArgs<'_>) -> Result<(), ApiError> {
        let path = format!("/api/region/{}", segment(id));
        self.submit(Method::PUT, &path, args).await.map(|_| ())
    }

    pub async fn delete_region(&self, id: &str) -> Result<(), ApiError> {
        accepted(self.delete(&format!("/api/region/{}", segment(id))).await?).map(|_| ())
    }

    pub async fn list_states(&self) -> Result<Vec<State>, ApiError> {
        self.get_list("/api/state/").await
    }

    /// Dependent option list for the state select
    pub async fn states_by_region(&self, region_id: &str) -> Result<Vec<State>, ApiError> {
        self.get_list(&states_by_region_path(region_id)).await
    }

    pub async fn create_state(&self, args: &CreateStateArgs<'_>) -> Result<(), ApiError> {
        self.submit(Method::POST, "/api/state/", args).await.map(|_| ())
    }

    pub async fn update_state(&self, id: &str, args: &UpdateStateArgs<'_>) -> Result<(), ApiError> {
        let path = format!("/api/state/{}", segment(id));
        self.submit(Method::PUT, &path, args).await.map(|_| ())
    }

    pub async fn delete_state(&self, id: &str) -> Result<(), ApiError> {
        accepted(self.delete(&format!("/api/state/{}", segment(id))).await?).map(|_| ())
    }

    pub async fn list_cities(&self) -> Result<Vec<City>, ApiError> {
        self.get_list("/api/city/").await
    }

    pub async fn create_city(&self, args: &CreateCityArgs<'_>) -> Result<(), ApiError> {
        self.submit(Method::POST, "/api/city/", args).await.map(|_| ())
    }

    pub async fn update_city(&self, id: &str, args: &UpdateCityArgs<'_>) -> Result<(), ApiError> {
        let path = format!("/api/city/{}", segment(id));
        self.submit(Method::PUT, &path, args).await.map(|_| ())
    }

    pub async fn delete_city(&self, id: &str) -> Result<(), ApiError> {
        accepted(self.delete(&format!("/api/city/{}", segment(id))).await?).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use axum::extract::Path;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    #[test]
    fn test_states_by_region_path() {
        assert_eq!(states_by_region_path("R01"), "/api/state/by-region/R01");
        assert_eq!(states_by_region_path("a/b"), "/api/state/by-region/a%2Fb");
    }

    #[test]
    fn test_city_payload_shape() {
        let args = CreateCityArgs { region_id: "1", state_id: "4", city_name: "Ipoh", status: "Active" };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({"region_id": "1", "state_id": "4", "city_name": "Ipoh", "status": "Active"})
        );
    }

    #[tokio::test]
    async fn test_states_by_region_and_create() {
        let app = Router::new()
            .route(
                "/api/state/by-region/{region}",
                get(|Path(region): Path<String>| async move {
                    Json(json!([{"id": 1, "state_id": 10, "region_id": region, "state_name": "Perak"}]))
                }),
            )
            .route(
                "/api/state/",
                post(|Json(body): Json<Value>| async move {
                    if body["state_name"] == "" {
                        Json(json!({"error": "State name required"}))
                    } else {
                        Json(json!({"message": "created"}))
                    }
                }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move { axum::serve(listener, app).await.expect("serve") });
        let client = ApiClient::new(ApiConfig::with_base(format!("http://{}", addr)));

        let states = client.states_by_region("7").await.expect("states");
        assert_eq!(states.len(), 1);
        assert_eq!(states[0].region_id, "7");
        assert_eq!(states[0].state_id, "10");

        let ok = CreateStateArgs { region_id: "7", state_name: "Perak", status: "Active" };
        client.create_state(&ok).await.expect("create state");

        let rejected = CreateStateArgs { region_id: "7", state_name: "", status: "Active" };
        let err = client.create_state(&rejected).await.unwrap_err();
        assert_eq!(err.to_string(), "State name required");
    }
}
