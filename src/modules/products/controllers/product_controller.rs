//! Product HTTP endpoints

use actix_web::web;

use crate::core::crud::controller::configure_routes;
use crate::modules::products::models::Product;

/// Configure product routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    configure_routes::<Product>(cfg, "/products");
}
