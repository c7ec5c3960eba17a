//! Admin HTTP handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::admin::NewAdmin;
use crate::domain::DomainError;
use crate::interfaces::http::common::{error_reply, ApiResponse, ValidatedJson};
use crate::interfaces::http::ApiState;

use super::dto::*;

#[utoipa::path(
    get,
    path = "/api/admins",
    tag = "Admins",
    responses(
        (status = 200, description = "All admins", body = ApiResponse<Vec<AdminDto>>)
    )
)]
pub async fn list_admins(
    State(state): State<ApiState>,
) -> Result<Json<ApiResponse<Vec<AdminDto>>>, (StatusCode, Json<ApiResponse<Vec<AdminDto>>>)> {
    let admins = state.repos.admins().find_all().await.map_err(error_reply)?;
    let dtos: Vec<AdminDto> = admins.into_iter().map(AdminDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/admins/{id}",
    tag = "Admins",
    params(("id" = i32, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "Admin details", body = ApiResponse<AdminDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_admin(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<AdminDto>>, (StatusCode, Json<ApiResponse<AdminDto>>)> {
    let admin = state
        .repos
        .admins()
        .find_by_id(id)
        .await
        .map_err(error_reply)?;

    let Some(a) = admin else {
        return Err(error_reply(DomainError::not_found("Admin", "id", id)));
    };

    Ok(Json(ApiResponse::success(AdminDto::from(a))))
}

#[utoipa::path(
    post,
    path = "/api/admins",
    tag = "Admins",
    request_body = CreateAdminRequest,
    responses(
        (status = 201, description = "Admin created", body = ApiResponse<AdminDto>),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_admin(
    State(state): State<ApiState>,
    ValidatedJson(request): ValidatedJson<CreateAdminRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AdminDto>>), (StatusCode, Json<ApiResponse<AdminDto>>)>
{
    let admin = state
        .repos
        .admins()
        .save(NewAdmin {
            name: request.name,
            email: request.email,
            phone: request.phone,
            role: request.role,
        })
        .await
        .map_err(error_reply)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AdminDto::from(admin))),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/admins/{id}",
    tag = "Admins",
    params(("id" = i32, Path, description = "Admin ID")),
    responses(
        (status = 200, description = "Admin deleted", body = ApiResponse<String>),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_admin(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<String>>, (StatusCode, Json<ApiResponse<String>>)> {
    state.repos.admins().delete(id).await.map_err(error_reply)?;
    Ok(Json(ApiResponse::success(
        "Admin deleted successfully".to_string(),
    )))
}
