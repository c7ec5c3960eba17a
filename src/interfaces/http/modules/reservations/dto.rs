//! Reservation DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::reservation::Reservation;

/// Reservation details in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub customer_id: i32,
    pub room_id: i32,
    pub platform_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub total_price: f64,
    /// Canonical status: `Reserved`, `Checked in` or `Checked out`
    pub status: String,
    pub booking_reference: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            customer_id: r.customer_id,
            room_id: r.room_id,
            platform_id: r.platform_id,
            check_in: r.check_in,
            check_out: r.check_out,
            guests: r.guests,
            total_price: r.total_price,
            status: r.status.as_str().to_string(),
            booking_reference: r.booking_reference,
            notes: r.notes,
            created_at: r.created_at,
        }
    }
}

/// Request to create a new reservation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReservationRequest {
    pub customer_id: i32,
    pub room_id: i32,
    pub platform_id: i32,
    /// Arrival date; any accepted date format
    pub check_in: String,
    /// Departure date; any accepted date format
    pub check_out: String,
    #[validate(range(min = 1, message = "at least one guest"))]
    pub guests: i32,
    #[validate(range(min = 0.0, message = "cannot be negative"))]
    pub total_price: f64,
    /// The external platform's confirmation code
    #[validate(length(min = 1, message = "is required"))]
    pub booking_reference: String,
    pub notes: Option<String>,
    /// Optional initial status; defaults to `Reserved`
    pub status: Option<String>,
}

/// Availability query window
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct AvailabilityParams {
    /// Start of the window; any accepted date format
    pub check_in: String,
    /// End of the window; any accepted date format
    pub check_out: String,
}

/// Room availability for a date window
#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityResponse {
    pub room_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub available: bool,
}

/// Target status for the status-transition endpoint
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct StatusParams {
    /// `Reserved`, `Checked in` or `Checked out`
    pub status: String,
}
