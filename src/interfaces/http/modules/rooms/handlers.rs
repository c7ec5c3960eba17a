//! Room HTTP handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::room::{NewRoom, RoomStatus};
use crate::domain::DomainError;
use crate::interfaces::http::common::{error_reply, ApiResponse, ValidatedJson};
use crate::interfaces::http::ApiState;

use super::dto::*;

#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = "Rooms",
    responses(
        (status = 200, description = "All rooms", body = ApiResponse<Vec<RoomDto>>)
    )
)]
pub async fn list_rooms(
    State(state): State<ApiState>,
) -> Result<Json<ApiResponse<Vec<RoomDto>>>, (StatusCode, Json<ApiResponse<Vec<RoomDto>>>)> {
    let rooms = state.repos.rooms().find_all().await.map_err(error_reply)?;
    let dtos: Vec<RoomDto> = rooms.into_iter().map(RoomDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/rooms/{room}",
    tag = "Rooms",
    params(("room" = String, Path, description = "Room number or numeric ID")),
    responses(
        (status = 200, description = "Room details", body = ApiResponse<RoomDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_room(
    State(state): State<ApiState>,
    Path(room): Path<String>,
) -> Result<Json<ApiResponse<RoomDto>>, (StatusCode, Json<ApiResponse<RoomDto>>)> {
    let found = state
        .repos
        .rooms()
        .find_by_number_or_id(&room)
        .await
        .map_err(error_reply)?;

    let Some(r) = found else {
        return Err(error_reply(DomainError::not_found(
            "Room",
            "number_or_id",
            room,
        )));
    };

    Ok(Json(ApiResponse::success(RoomDto::from(r))))
}

#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = "Rooms",
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "Room created", body = ApiResponse<RoomDto>),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_room(
    State(state): State<ApiState>,
    ValidatedJson(request): ValidatedJson<CreateRoomRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RoomDto>>), (StatusCode, Json<ApiResponse<RoomDto>>)> {
    let room = state
        .repos
        .rooms()
        .save(NewRoom {
            room_number: request.room_number,
            room_type: request.room_type,
            max_guests: request.max_guests,
            price_per_night: request.price_per_night,
            status: RoomStatus::Available,
        })
        .await
        .map_err(error_reply)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(RoomDto::from(room))),
    ))
}
