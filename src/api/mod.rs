//! REST API Bindings
//!
//! One shared client plus endpoint wrappers, organized by domain.

mod admin;
mod catalog;
mod client;
mod error;
mod location;
mod workorder;

pub use admin::*;
pub use catalog::*;
pub use client::{accepted, ApiClient, MultipartField, Upload};
pub use error::ApiError;
pub use location::*;

use crate::config::ApiConfig;

thread_local! {
    static CLIENT: ApiClient = ApiClient::new(ApiConfig::from_env());
}

/// The client for this build's backend
pub fn client() -> ApiClient {
    CLIENT.with(ApiClient::clone)
}
