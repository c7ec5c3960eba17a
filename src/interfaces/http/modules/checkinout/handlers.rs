//! Check-in/check-out HTTP handlers
//!
//! Convenience wrappers over the status transition with the
//! already-in-state guard, plus the upcoming-arrivals listing.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, Utc};

use crate::domain::reservation::ReservationStatus;
use crate::interfaces::http::common::{error_reply, ApiResponse};
use crate::interfaces::http::modules::reservations::dto::ReservationDto;
use crate::interfaces::http::ApiState;

use super::dto::*;

#[utoipa::path(
    post,
    path = "/api/checkinout/checkin/{id}",
    tag = "CheckInOut",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Checked in", body = ApiResponse<ReservationDto>),
        (status = 400, description = "Already checked in"),
        (status = 404, description = "Not found")
    )
)]
pub async fn check_in(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ReservationDto>>, (StatusCode, Json<ApiResponse<ReservationDto>>)> {
    let reservation = state.booking.check_in(id).await.map_err(error_reply)?;
    Ok(Json(ApiResponse::success(ReservationDto::from(reservation))))
}

#[utoipa::path(
    post,
    path = "/api/checkinout/checkout/{id}",
    tag = "CheckInOut",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Checked out", body = ApiResponse<ReservationDto>),
        (status = 400, description = "Already checked out"),
        (status = 404, description = "Not found")
    )
)]
pub async fn check_out(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ReservationDto>>, (StatusCode, Json<ApiResponse<ReservationDto>>)> {
    let reservation = state.booking.check_out(id).await.map_err(error_reply)?;
    Ok(Json(ApiResponse::success(ReservationDto::from(reservation))))
}

#[utoipa::path(
    get,
    path = "/api/checkinout/upcoming",
    tag = "CheckInOut",
    params(UpcomingParams),
    responses(
        (status = 200, description = "Upcoming check-ins and check-outs", body = ApiResponse<UpcomingResponse>)
    )
)]
pub async fn upcoming(
    State(state): State<ApiState>,
    Query(params): Query<UpcomingParams>,
) -> Result<Json<ApiResponse<UpcomingResponse>>, (StatusCode, Json<ApiResponse<UpcomingResponse>>)>
{
    let days = params.days.max(0);
    let today = Utc::now().date_naive();
    let end = today + Duration::days(days);

    let reservations = state
        .repos
        .reservations()
        .find_all()
        .await
        .map_err(error_reply)?;

    let mut upcoming_checkins = Vec::new();
    let mut upcoming_checkouts = Vec::new();

    for r in reservations {
        // A checked-in guest no longer shows up as an arrival
        if r.status == ReservationStatus::Reserved && today <= r.check_in && r.check_in <= end {
            upcoming_checkins.push(ReservationDto::from(r.clone()));
        }
        if r.status != ReservationStatus::CheckedOut && today <= r.check_out && r.check_out <= end
        {
            upcoming_checkouts.push(ReservationDto::from(r));
        }
    }

    Ok(Json(ApiResponse::success(UpcomingResponse {
        days,
        upcoming_checkins,
        upcoming_checkouts,
    })))
}
