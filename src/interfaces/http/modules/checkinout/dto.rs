//! Check-in/check-out DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::interfaces::http::modules::reservations::dto::ReservationDto;

/// Window for the upcoming check-ins/check-outs listing
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct UpcomingParams {
    /// Days ahead to look. Default: 7
    #[serde(default = "default_days")]
    pub days: i64,
}

fn default_days() -> i64 {
    7
}

/// Check-ins and check-outs due within the window
#[derive(Debug, Serialize, ToSchema)]
pub struct UpcomingResponse {
    pub days: i64,
    pub upcoming_checkins: Vec<ReservationDto>,
    pub upcoming_checkouts: Vec<ReservationDto>,
}
