//! HTTP API for the simulated fleet.
//!
//! Thin plumbing over [`InstanceService`]: routing, JSON shapes, and status
//! code mapping. Business declines (stop refused by the state machine) come
//! back as 400 with the full stop response body, distinct from 404 for
//! unknown ids and 500 for internal failures.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::models::{Instance, StopResponse};
use crate::service::{InstanceService, ServiceError};

pub const SERVICE_NAME: &str = "Tiny Fleet API";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Standard error body for non-2xx responses
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Service banner returned from the root endpoint
#[derive(Debug, Serialize)]
pub struct Banner {
    pub message: &'static str,
    pub status: &'static str,
    pub version: &'static str,
}

/// Health report with per-subsystem checks
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub api: &'static str,
    pub registry: &'static str,
}

/// Create the API router with all endpoints
pub fn create_router(service: InstanceService) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/instances", get(list_instances))
        .route("/instances/:instance_id", get(get_instance))
        .route("/instances/:instance_id/stop", post(stop_instance))
        .with_state(service)
}

fn error_response(status: StatusCode, error: &str, message: String) -> Response {
    let body = ErrorBody {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    };
    (status, Json(body)).into_response()
}

fn map_service_error(err: ServiceError) -> Response {
    match err {
        ServiceError::NotFound { instance_id } => error_response(
            StatusCode::NOT_FOUND,
            "Not Found",
            format!("Instance {instance_id} not found"),
        ),
        ServiceError::Internal(reason) => {
            error!(reason, "Internal service failure");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "An unexpected error occurred".to_string(),
            )
        }
    }
}

async fn root() -> Json<Banner> {
    Json(Banner {
        message: SERVICE_NAME,
        status: "healthy",
        version: SERVICE_VERSION,
    })
}

async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        checks: HealthChecks {
            api: "ok",
            registry: "ok",
        },
    })
}

async fn list_instances(State(service): State<InstanceService>) -> Response {
    info!("GET /instances");
    match service.list_all() {
        Ok(instances) => Json::<Vec<Instance>>(instances).into_response(),
        Err(err) => map_service_error(err),
    }
}

async fn get_instance(
    State(service): State<InstanceService>,
    Path(instance_id): Path<String>,
) -> Response {
    info!(instance_id, "GET /instances/{{id}}");
    match service.get_by_id(&instance_id) {
        Ok(Some(instance)) => Json(instance).into_response(),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            "Not Found",
            format!("Instance {instance_id} not found"),
        ),
        Err(err) => map_service_error(err),
    }
}

async fn stop_instance(
    State(service): State<InstanceService>,
    Path(instance_id): Path<String>,
) -> Response {
    info!(instance_id, "POST /instances/{{id}}/stop");
    match service.stop(&instance_id) {
        Ok(result) if result.success => Json::<StopResponse>(result).into_response(),
        Ok(declined) => {
            warn!(instance_id, message = %declined.message, "Stop declined");
            (StatusCode::BAD_REQUEST, Json(declined)).into_response()
        }
        Err(err) => map_service_error(err),
    }
}
