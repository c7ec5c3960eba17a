//! Calendar HTTP handlers
//!
//! Windowed views over the reservation data for the front end's month and
//! week grids. Pure presentation; a reservation is included when its date
//! range intersects the window.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, NaiveDate, Weekday};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::interfaces::http::common::{error_reply, ApiResponse};
use crate::interfaces::http::modules::reservations::dto::ReservationDto;
use crate::interfaces::http::ApiState;

/// Reservations overlapping a calendar month
#[derive(Debug, Serialize, ToSchema)]
pub struct MonthReservationsResponse {
    pub year: i32,
    pub month: u32,
    pub reservations: Vec<ReservationDto>,
}

/// Reservations overlapping an ISO week
#[derive(Debug, Serialize, ToSchema)]
pub struct WeekReservationsResponse {
    pub year: i32,
    pub week: u32,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub reservations: Vec<ReservationDto>,
}

#[utoipa::path(
    get,
    path = "/api/calendar/month/{year}/{month}",
    tag = "Calendar",
    params(
        ("year" = i32, Path, description = "Calendar year"),
        ("month" = u32, Path, description = "Month 1-12")
    ),
    responses(
        (status = 200, description = "Reservations overlapping the month", body = ApiResponse<MonthReservationsResponse>),
        (status = 400, description = "Invalid month")
    )
)]
pub async fn month_reservations(
    State(state): State<ApiState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<
    Json<ApiResponse<MonthReservationsResponse>>,
    (StatusCode, Json<ApiResponse<MonthReservationsResponse>>),
> {
    let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        error_reply(DomainError::Validation(format!(
            "invalid month: {}-{}",
            year, month
        )))
    })?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| {
        error_reply(DomainError::Validation(format!(
            "invalid month: {}-{}",
            year, month
        )))
    })?;

    let reservations = state
        .repos
        .reservations()
        .find_all()
        .await
        .map_err(error_reply)?;

    let reservations: Vec<ReservationDto> = reservations
        .into_iter()
        .filter(|r| r.check_in < end && r.check_out >= start)
        .map(ReservationDto::from)
        .collect();

    Ok(Json(ApiResponse::success(MonthReservationsResponse {
        year,
        month,
        reservations,
    })))
}

#[utoipa::path(
    get,
    path = "/api/calendar/week/{year}/{week}",
    tag = "Calendar",
    params(
        ("year" = i32, Path, description = "ISO week year"),
        ("week" = u32, Path, description = "ISO week 1-53")
    ),
    responses(
        (status = 200, description = "Reservations overlapping the week", body = ApiResponse<WeekReservationsResponse>),
        (status = 400, description = "Invalid week")
    )
)]
pub async fn week_reservations(
    State(state): State<ApiState>,
    Path((year, week)): Path<(i32, u32)>,
) -> Result<
    Json<ApiResponse<WeekReservationsResponse>>,
    (StatusCode, Json<ApiResponse<WeekReservationsResponse>>),
> {
    let week_start = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).ok_or_else(|| {
        error_reply(DomainError::Validation(format!(
            "invalid week: {}-W{}",
            year, week
        )))
    })?;
    let week_end = week_start + Duration::days(6);

    let reservations = state
        .repos
        .reservations()
        .find_all()
        .await
        .map_err(error_reply)?;

    let reservations: Vec<ReservationDto> = reservations
        .into_iter()
        .filter(|r| r.check_in <= week_end && r.check_out >= week_start)
        .map(ReservationDto::from)
        .collect();

    Ok(Json(ApiResponse::success(WeekReservationsResponse {
        year,
        week,
        week_start,
        week_end,
        reservations,
    })))
}
