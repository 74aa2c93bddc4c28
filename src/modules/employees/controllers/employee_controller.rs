//! Employee HTTP endpoints

use actix_web::web;

use crate::core::crud::controller::configure_routes;
use crate::modules::employees::models::Employee;

/// Configure employee routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_routes::<Employee>(cfg, "/employees");
}
