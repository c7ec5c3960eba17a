//! Booking platform HTTP handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::domain::platform::NewPlatform;
use crate::interfaces::http::common::{error_reply, ApiResponse, ValidatedJson};
use crate::interfaces::http::ApiState;

use super::dto::*;

#[utoipa::path(
    get,
    path = "/api/platforms",
    tag = "Platforms",
    responses(
        (status = 200, description = "All booking platforms", body = ApiResponse<Vec<PlatformDto>>)
    )
)]
pub async fn list_platforms(
    State(state): State<ApiState>,
) -> Result<Json<ApiResponse<Vec<PlatformDto>>>, (StatusCode, Json<ApiResponse<Vec<PlatformDto>>>)>
{
    let platforms = state
        .repos
        .platforms()
        .find_all()
        .await
        .map_err(error_reply)?;
    let dtos: Vec<PlatformDto> = platforms.into_iter().map(PlatformDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/platforms",
    tag = "Platforms",
    request_body = CreatePlatformRequest,
    responses(
        (status = 201, description = "Platform registered", body = ApiResponse<PlatformDto>),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_platform(
    State(state): State<ApiState>,
    ValidatedJson(request): ValidatedJson<CreatePlatformRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<PlatformDto>>),
    (StatusCode, Json<ApiResponse<PlatformDto>>),
> {
    let platform = state
        .repos
        .platforms()
        .save(NewPlatform {
            name: request.name,
            api_key: request.api_key,
            webhook_url: request.webhook_url,
        })
        .await
        .map_err(error_reply)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(PlatformDto::from(platform))),
    ))
}
