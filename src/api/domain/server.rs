use crate::core::response::HealthResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    tags = ["server"],
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok".to_string() })
}
