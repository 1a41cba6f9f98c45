//! Liveness handler.

use axum::Json;

use crate::bootstrap::SERVICE_NAME;
use crate::dto::ServiceStatus;

/// GET /
pub async fn root() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        message: format!("{SERVICE_NAME} is running"),
    })
}
