//! Category HTTP endpoints
//!
//! GET /categories, GET /categories/{id}, POST /categories,
//! PUT /categories/{id}, DELETE /categories/{id}

use actix_web::web;

use crate::core::crud::controller::configure_routes;
use crate::modules::categories::models::Category;

/// Configure category routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_routes::<Category>(cfg, "/categories");
}
