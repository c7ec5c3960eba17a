//! Admin DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::admin::Admin;

/// Admin details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminDto {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub is_active: bool,
}

impl From<Admin> for AdminDto {
    fn from(a: Admin) -> Self {
        Self {
            id: a.id,
            name: a.name,
            email: a.email,
            phone: a.phone,
            role: a.role,
            is_active: a.is_active,
        }
    }
}

/// Request to create an admin
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAdminRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    /// manager, staff, ...
    pub role: Option<String>,
}
