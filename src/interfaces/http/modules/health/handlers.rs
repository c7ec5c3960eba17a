//! Health and service info handlers

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Service metadata
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub docs: &'static str,
}

/// Health probe payload
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: &'static str,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses((status = 200, description = "Service info", body = ServiceInfo))
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Hotel Management API",
        version: env!("CARGO_PKG_VERSION"),
        docs: "/docs",
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is healthy", body = HealthStatus))
)]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy" })
}
