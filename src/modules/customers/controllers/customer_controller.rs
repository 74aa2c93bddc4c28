//! Customer HTTP endpoints

use actix_web::web;

use crate::core::crud::controller::configure_routes;
use crate::modules::customers::models::Customer;

/// Configure customer routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_routes::<Customer>(cfg, "/customers");
}
