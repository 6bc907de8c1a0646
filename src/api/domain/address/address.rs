use crate::application::address::address_service_interface::AddressServiceInterface;
use crate::core::app_state::AppState;
use crate::infrastructure::error::{AppError, AppResult};
use crate::core::response::ClientResponseError;
use crate::presentation::address::address::{AddressRequest, AddressSerializer};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::WithRejection;

#[utoipa::path(
    post,
    path = "/address",
    tags = ["address_service"],
    request_body = AddressRequest,
    responses(
        (status = 201, description = "Address created successfully", body = AddressSerializer),
        (status = 400, description = "Malformed request body", body = ClientResponseError),
        (status = 422, description = "Address failed validation", body = ClientResponseError),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_create_address(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<AddressRequest>, AppError>,
) -> AppResult<(StatusCode, Json<AddressSerializer>)> {
    log::info!("Creating address in city: {:?}", request.city);

    match state.address_service.create_address(request).await {
        Ok(result) => Ok((StatusCode::CREATED, Json(result))),
        Err(err) => {
            log::error!("Failed to create address: {err:?}");
            Err(err)
        },
    }
}

#[utoipa::path(
    put,
    path = "/address/{id}",
    tags = ["address_service"],
    request_body = AddressRequest,
    params(
        ("id" = i64, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "Address updated successfully", body = AddressSerializer),
        (status = 400, description = "Malformed request body", body = ClientResponseError),
        (status = 404, description = "Address not found", body = ClientResponseError),
        (status = 422, description = "Address failed validation", body = ClientResponseError),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_update_address(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    WithRejection(Json(request), _): WithRejection<Json<AddressRequest>, AppError>,
) -> AppResult<Json<AddressSerializer>> {
    log::info!("Updating address with id: {}", id);

    match state.address_service.update_address(id, request).await {
        Ok(result) => Ok(Json(result)),
        Err(err) => {
            log::error!("Failed to update address: {err:?}");
            Err(err)
        },
    }
}

#[utoipa::path(
    get,
    path = "/address/{id}",
    tags = ["address_service"],
    params(
        ("id" = i64, Path, description = "Address ID")
    ),
    responses(
        (status = 200, description = "Address retrieved successfully", body = AddressSerializer),
        (status = 404, description = "Address not found", body = ClientResponseError),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_get_address_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AddressSerializer>> {
    log::info!("Getting address with id: {}", id);

    match state.address_service.get_address_by_id(id).await {
        Ok(result) => Ok(Json(result)),
        Err(err) => {
            log::warn!("Failed to get address: {err:?}");
            Err(err)
        },
    }
}

#[utoipa::path(
    delete,
    path = "/address/{id}",
    tags = ["address_service"],
    params(
        ("id" = i64, Path, description = "Address ID")
    ),
    responses(
        (status = 204, description = "Address deleted successfully"),
        (status = 404, description = "Address not found", body = ClientResponseError),
        (status = 500, description = "Internal server error", body = ClientResponseError)
    )
)]
pub async fn controller_delete_address(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    log::info!("Deleting address with id: {}", id);

    match state.address_service.delete_address(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(err) => {
            log::error!("Failed to delete address: {err:?}");
            Err(err)
        },
    }
}
