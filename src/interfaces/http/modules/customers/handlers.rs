//! Customer HTTP handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::domain::customer::NewCustomer;
use crate::domain::DomainError;
use crate::interfaces::http::common::{error_reply, ApiResponse, ValidatedJson};
use crate::interfaces::http::modules::reservations::dto::ReservationDto;
use crate::interfaces::http::ApiState;

use super::dto::*;

#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Customers",
    responses(
        (status = 200, description = "All customers", body = ApiResponse<Vec<CustomerDto>>)
    )
)]
pub async fn list_customers(
    State(state): State<ApiState>,
) -> Result<Json<ApiResponse<Vec<CustomerDto>>>, (StatusCode, Json<ApiResponse<Vec<CustomerDto>>>)>
{
    let customers = state
        .repos
        .customers()
        .find_all()
        .await
        .map_err(error_reply)?;
    let dtos: Vec<CustomerDto> = customers.into_iter().map(CustomerDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = "Customers",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer details", body = ApiResponse<CustomerDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_customer(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<CustomerDto>>, (StatusCode, Json<ApiResponse<CustomerDto>>)> {
    let customer = state
        .repos
        .customers()
        .find_by_id(id)
        .await
        .map_err(error_reply)?;

    let Some(c) = customer else {
        return Err(error_reply(DomainError::not_found("Customer", "id", id)));
    };

    Ok(Json(ApiResponse::success(CustomerDto::from(c))))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}/reservations",
    tag = "Customers",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Reservation history", body = ApiResponse<CustomerReservationsResponse>)
    )
)]
pub async fn get_customer_reservations(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<
    Json<ApiResponse<CustomerReservationsResponse>>,
    (StatusCode, Json<ApiResponse<CustomerReservationsResponse>>),
> {
    let reservations = state
        .repos
        .reservations()
        .find_all()
        .await
        .map_err(error_reply)?;

    let reservations: Vec<ReservationDto> = reservations
        .into_iter()
        .filter(|r| r.customer_id == id)
        .map(ReservationDto::from)
        .collect();

    Ok(Json(ApiResponse::success(CustomerReservationsResponse {
        customer_id: id,
        reservations,
    })))
}

#[utoipa::path(
    post,
    path = "/api/customers",
    tag = "Customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = ApiResponse<CustomerDto>),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_customer(
    State(state): State<ApiState>,
    ValidatedJson(request): ValidatedJson<CreateCustomerRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<CustomerDto>>),
    (StatusCode, Json<ApiResponse<CustomerDto>>),
> {
    let customer = state
        .repos
        .customers()
        .save(NewCustomer {
            name: request.name,
            email: request.email,
            phone: request.phone,
            nationality: request.nationality,
        })
        .await
        .map_err(error_reply)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CustomerDto::from(customer))),
    ))
}
