//! Booking platform DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::platform::Platform;

/// Booking platform metadata in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct PlatformDto {
    pub id: i32,
    pub name: String,
    pub api_key: Option<String>,
    pub webhook_url: Option<String>,
}

impl From<Platform> for PlatformDto {
    fn from(p: Platform) -> Self {
        Self {
            id: p.id,
            name: p.name,
            api_key: p.api_key,
            webhook_url: p.webhook_url,
        }
    }
}

/// Request to register a booking platform
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePlatformRequest {
    /// Airbnb, Agoda, Hotels.com, ...
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    pub api_key: Option<String>,
    #[validate(url)]
    pub webhook_url: Option<String>,
}
