use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::core::Storage;

/// Liveness body
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub storage: String,
    pub application: String,
}

/// Readiness body
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub backend: String,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub storage: bool,
    pub application: bool,
}

/// GET /health
///
/// Always 200 while the process can answer; storage is not consulted.
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            storage: "not_checked".to_string(),
            application: "healthy".to_string(),
        },
    })
}

/// GET /ready
pub async fn readiness_check(storage: web::Data<Storage>) -> impl Responder {
    let storage_ok = match storage.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(backend = storage.backend_name(), "Storage readiness check failed: {}", e);
            false
        }
    };

    let response = ReadinessResponse {
        ready: storage_ok,
        backend: storage.backend_name().to_string(),
        checks: ReadinessChecks {
            storage: storage_ok,
            application: true,
        },
    };

    if storage_ok {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
