//! Housekeeping HTTP handlers
//!
//! The cleaning queue is a projection over room status; completion is the
//! one external action allowed to write a room's status besides the
//! reservation transitions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::room::RoomStatus;
use crate::domain::DomainError;
use crate::interfaces::http::common::{error_reply, ApiResponse};
use crate::interfaces::http::modules::rooms::dto::RoomDto;
use crate::interfaces::http::ApiState;

/// Rooms waiting to be serviced
#[derive(Debug, Serialize, ToSchema)]
pub struct CleaningRoomsResponse {
    pub cleaning_rooms: Vec<RoomDto>,
    pub count: usize,
}

#[utoipa::path(
    get,
    path = "/api/cleaning/rooms",
    tag = "Cleaning",
    responses(
        (status = 200, description = "Rooms in cleaning status", body = ApiResponse<CleaningRoomsResponse>)
    )
)]
pub async fn list_cleaning_rooms(
    State(state): State<ApiState>,
) -> Result<
    Json<ApiResponse<CleaningRoomsResponse>>,
    (StatusCode, Json<ApiResponse<CleaningRoomsResponse>>),
> {
    let rooms = state.repos.rooms().find_all().await.map_err(error_reply)?;

    let cleaning_rooms: Vec<RoomDto> = rooms
        .into_iter()
        .filter(|r| r.status == RoomStatus::Cleaning)
        .map(RoomDto::from)
        .collect();
    let count = cleaning_rooms.len();

    Ok(Json(ApiResponse::success(CleaningRoomsResponse {
        cleaning_rooms,
        count,
    })))
}

#[utoipa::path(
    post,
    path = "/api/cleaning/complete/{room}",
    tag = "Cleaning",
    params(("room" = String, Path, description = "Room number or numeric ID")),
    responses(
        (status = 200, description = "Room back to available", body = ApiResponse<RoomDto>),
        (status = 404, description = "Unknown room")
    )
)]
pub async fn complete_cleaning(
    State(state): State<ApiState>,
    Path(room): Path<String>,
) -> Result<Json<ApiResponse<RoomDto>>, (StatusCode, Json<ApiResponse<RoomDto>>)> {
    let found = state
        .repos
        .rooms()
        .find_by_number_or_id(&room)
        .await
        .map_err(error_reply)?;

    let Some(mut r) = found else {
        return Err(error_reply(DomainError::not_found(
            "Room",
            "number_or_id",
            room,
        )));
    };

    state
        .repos
        .rooms()
        .update_status(r.id, RoomStatus::Available)
        .await
        .map_err(error_reply)?;

    r.status = RoomStatus::Available;
    Ok(Json(ApiResponse::success(RoomDto::from(r))))
}
