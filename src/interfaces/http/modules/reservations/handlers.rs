//! Reservation HTTP handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::BookingRequest;
use crate::domain::reservation::ReservationStatus;
use crate::domain::{parse_date, DomainError};
use crate::interfaces::http::common::{error_reply, ApiResponse, ValidatedJson};
use crate::interfaces::http::ApiState;

use super::dto::*;

#[utoipa::path(
    get,
    path = "/api/reservations",
    tag = "Reservations",
    responses(
        (status = 200, description = "All reservations", body = ApiResponse<Vec<ReservationDto>>)
    )
)]
pub async fn list_reservations(
    State(state): State<ApiState>,
) -> Result<
    Json<ApiResponse<Vec<ReservationDto>>>,
    (StatusCode, Json<ApiResponse<Vec<ReservationDto>>>),
> {
    let reservations = state
        .repos
        .reservations()
        .find_all()
        .await
        .map_err(error_reply)?;

    let dtos: Vec<ReservationDto> = reservations.into_iter().map(ReservationDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/reservations/{id}",
    tag = "Reservations",
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation details", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_reservation(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ReservationDto>>, (StatusCode, Json<ApiResponse<ReservationDto>>)> {
    let reservation = state
        .repos
        .reservations()
        .find_by_id(id)
        .await
        .map_err(error_reply)?;

    let Some(r) = reservation else {
        return Err(error_reply(DomainError::not_found("Reservation", "id", id)));
    };

    Ok(Json(ApiResponse::success(ReservationDto::from(r))))
}

#[utoipa::path(
    post,
    path = "/api/reservations",
    tag = "Reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ApiResponse<ReservationDto>),
        (status = 400, description = "Overlap conflict or invalid request"),
        (status = 404, description = "Unknown room"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_reservation(
    State(state): State<ApiState>,
    ValidatedJson(request): ValidatedJson<CreateReservationRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<ReservationDto>>),
    (StatusCode, Json<ApiResponse<ReservationDto>>),
> {
    let check_in = parse_date(&request.check_in).map_err(error_reply)?;
    let check_out = parse_date(&request.check_out).map_err(error_reply)?;

    let status = match request.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            ReservationStatus::parse(raw)
                .ok_or_else(|| error_reply(DomainError::InvalidStatus(raw.to_string())))?,
        ),
    };

    let reservation = state
        .booking
        .create_reservation(BookingRequest {
            customer_id: request.customer_id,
            room_id: request.room_id,
            platform_id: request.platform_id,
            check_in,
            check_out,
            guests: request.guests,
            total_price: request.total_price,
            booking_reference: request.booking_reference,
            notes: request.notes,
            status,
        })
        .await
        .map_err(error_reply)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ReservationDto::from(reservation))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/reservations/{id}/status",
    tag = "Reservations",
    params(
        ("id" = i32, Path, description = "Reservation ID"),
        StatusParams
    ),
    responses(
        (status = 200, description = "Updated reservation", body = ApiResponse<ReservationDto>),
        (status = 400, description = "Invalid status value"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_reservation_status(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    Query(params): Query<StatusParams>,
) -> Result<Json<ApiResponse<ReservationDto>>, (StatusCode, Json<ApiResponse<ReservationDto>>)> {
    let status = ReservationStatus::parse(&params.status)
        .ok_or_else(|| error_reply(DomainError::InvalidStatus(params.status.trim().to_string())))?;

    let reservation = state
        .booking
        .set_status(id, status)
        .await
        .map_err(error_reply)?;

    Ok(Json(ApiResponse::success(ReservationDto::from(reservation))))
}

#[utoipa::path(
    get,
    path = "/api/reservations/room/{room_id}/availability",
    tag = "Reservations",
    params(
        ("room_id" = i32, Path, description = "Room ID"),
        AvailabilityParams
    ),
    responses(
        (status = 200, description = "Availability for the window", body = ApiResponse<AvailabilityResponse>),
        (status = 400, description = "Unparseable dates")
    )
)]
pub async fn check_room_availability(
    State(state): State<ApiState>,
    Path(room_id): Path<i32>,
    Query(params): Query<AvailabilityParams>,
) -> Result<
    Json<ApiResponse<AvailabilityResponse>>,
    (StatusCode, Json<ApiResponse<AvailabilityResponse>>),
> {
    let check_in = parse_date(&params.check_in).map_err(error_reply)?;
    let check_out = parse_date(&params.check_out).map_err(error_reply)?;

    let available = state
        .booking
        .is_available(room_id, check_in, check_out)
        .await
        .map_err(error_reply)?;

    Ok(Json(ApiResponse::success(AvailabilityResponse {
        room_id,
        check_in,
        check_out,
        available,
    })))
}
