//! Room note HTTP handlers
//!
//! Create accepts the quirks the front end relies on: the admin may be
//! given by display name instead of id, and a numeric room key is
//! resolved to its room number before storing.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::room_note::{NewRoomNote, NoteType, PROGRESS_VALUES};
use crate::domain::DomainError;
use crate::interfaces::http::common::{error_reply, ApiResponse, ValidatedJson};
use crate::interfaces::http::ApiState;

use super::dto::*;

#[utoipa::path(
    get,
    path = "/api/room-notes",
    tag = "RoomNotes",
    params(ListNotesParams),
    responses(
        (status = 200, description = "Notes matching the filters", body = ApiResponse<Vec<RoomNoteDto>>)
    )
)]
pub async fn list_room_notes(
    State(state): State<ApiState>,
    Query(params): Query<ListNotesParams>,
) -> Result<Json<ApiResponse<Vec<RoomNoteDto>>>, (StatusCode, Json<ApiResponse<Vec<RoomNoteDto>>>)>
{
    let notes = state
        .repos
        .room_notes()
        .find_all()
        .await
        .map_err(error_reply)?;

    let notes = notes.into_iter().filter(|n| {
        let progress_ok = match params.progress.as_deref() {
            None => true,
            // Empty string selects notes that have no progress yet
            Some("") => n.progress.is_none(),
            Some(p) => n.progress.as_deref() == Some(p),
        };
        let room_ok = params
            .room_id
            .as_deref()
            .map_or(true, |room| n.room_id == room);
        progress_ok && room_ok
    });

    let dtos: Vec<RoomNoteDto> = notes.map(RoomNoteDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/room-notes/urgent",
    tag = "RoomNotes",
    responses(
        (status = 200, description = "Pending urgent notes", body = ApiResponse<Vec<RoomNoteDto>>)
    )
)]
pub async fn list_urgent_notes(
    State(state): State<ApiState>,
) -> Result<Json<ApiResponse<Vec<RoomNoteDto>>>, (StatusCode, Json<ApiResponse<Vec<RoomNoteDto>>>)>
{
    let notes = state
        .repos
        .room_notes()
        .find_all()
        .await
        .map_err(error_reply)?;

    let dtos: Vec<RoomNoteDto> = notes
        .into_iter()
        .filter(|n| n.note_type == NoteType::Urgent && n.status == "pending")
        .map(RoomNoteDto::from)
        .collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/room-notes/{id}",
    tag = "RoomNotes",
    params(("id" = i32, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Note details", body = ApiResponse<RoomNoteDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_room_note(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<RoomNoteDto>>, (StatusCode, Json<ApiResponse<RoomNoteDto>>)> {
    let note = state
        .repos
        .room_notes()
        .find_by_id(id)
        .await
        .map_err(error_reply)?;

    let Some(n) = note else {
        return Err(error_reply(DomainError::not_found("RoomNote", "id", id)));
    };

    Ok(Json(ApiResponse::success(RoomNoteDto::from(n))))
}

#[utoipa::path(
    post,
    path = "/api/room-notes",
    tag = "RoomNotes",
    request_body = CreateRoomNoteRequest,
    responses(
        (status = 201, description = "Note created", body = ApiResponse<RoomNoteDto>),
        (status = 400, description = "Unknown admin or bad note type"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_room_note(
    State(state): State<ApiState>,
    ValidatedJson(request): ValidatedJson<CreateRoomNoteRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<RoomNoteDto>>),
    (StatusCode, Json<ApiResponse<RoomNoteDto>>),
> {
    let note_type = NoteType::parse(&request.note_type).ok_or_else(|| {
        error_reply(DomainError::Validation(format!(
            "note_type must be urgent or after_checkout, got '{}'",
            request.note_type
        )))
    })?;

    // Admin may arrive as a numeric id or a display name
    let admin_id = match request.admin_id.trim().parse::<i32>() {
        Ok(id) => id,
        Err(_) => {
            let admin = state
                .repos
                .admins()
                .find_by_name(request.admin_id.trim())
                .await
                .map_err(error_reply)?;
            admin
                .ok_or_else(|| {
                    error_reply(DomainError::not_found(
                        "Admin",
                        "name",
                        request.admin_id.trim(),
                    ))
                })?
                .id
        }
    };

    // Notes store the room number; resolve a numeric key to it
    let room_id = if request.room_id.trim().parse::<i32>().is_ok() {
        match state
            .repos
            .rooms()
            .find_by_number_or_id(request.room_id.trim())
            .await
            .map_err(error_reply)?
        {
            Some(room) => room.room_number,
            None => request.room_id.trim().to_string(),
        }
    } else {
        request.room_id.trim().to_string()
    };

    let note = state
        .repos
        .room_notes()
        .save(NewRoomNote {
            room_id,
            admin_id,
            note_type,
            title: request.title,
            description: request.description,
            reservation_id: request.reservation_id,
            progress: request.progress.filter(|p| !p.trim().is_empty()),
        })
        .await
        .map_err(error_reply)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(RoomNoteDto::from(note))),
    ))
}

#[utoipa::path(
    put,
    path = "/api/room-notes/{id}/progress",
    tag = "RoomNotes",
    params(
        ("id" = i32, Path, description = "Note ID"),
        ProgressParams
    ),
    responses(
        (status = 200, description = "Updated note", body = ApiResponse<RoomNoteDto>),
        (status = 400, description = "Invalid progress value"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_note_progress(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    Query(params): Query<ProgressParams>,
) -> Result<Json<ApiResponse<RoomNoteDto>>, (StatusCode, Json<ApiResponse<RoomNoteDto>>)> {
    let progress = params.progress.trim();
    if !PROGRESS_VALUES.contains(&progress) {
        return Err(error_reply(DomainError::Validation(format!(
            "progress must be one of: {}",
            PROGRESS_VALUES.join(", ")
        ))));
    }

    state
        .repos
        .room_notes()
        .update_progress(id, progress)
        .await
        .map_err(error_reply)?;

    let note = state
        .repos
        .room_notes()
        .find_by_id(id)
        .await
        .map_err(error_reply)?
        .ok_or_else(|| error_reply(DomainError::not_found("RoomNote", "id", id)))?;

    Ok(Json(ApiResponse::success(RoomNoteDto::from(note))))
}
