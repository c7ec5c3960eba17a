//! Customer DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::customer::Customer;
use crate::interfaces::http::modules::reservations::dto::ReservationDto;

/// Customer details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerDto {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub nationality: Option<String>,
}

impl From<Customer> for CustomerDto {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
            nationality: c.nationality,
        }
    }
}

/// Request to create a customer
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub nationality: Option<String>,
}

/// A customer's reservation history
#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerReservationsResponse {
    pub customer_id: i32,
    pub reservations: Vec<ReservationDto>,
}
