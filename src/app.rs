//! Composition root: builds one repository and service per entity from the
//! selected storage backend and wires every route onto the actix `App`.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use actix_web::web;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::core::crud::controller::unknown_route;
use crate::core::crud::CrudService;
use crate::core::{RequestTimeout, Storage};
use crate::middleware::{json_config, request_id::REQUEST_ID_HEADER, ApiKeyAuth};
use crate::modules::{categories, customers, employees, health, products};

/// Everything a worker needs to serve requests
///
/// Built once in `main` and cloned into each actix worker; the services are
/// shared behind `Arc`, so every worker talks to the same repositories.
#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    pub categories: Arc<categories::CategoryService>,
    pub customers: Arc<customers::CustomerService>,
    pub products: Arc<products::ProductService>,
    pub employees: Arc<employees::EmployeeService>,
    pub request_timeout: Duration,
    /// Argon2 hash of the expected `X-API-Key`
    pub api_key_hash: Option<String>,
}

impl AppState {
    pub fn new(
        storage: Storage,
        request_timeout: Duration,
        api_key_hash: Option<String>,
    ) -> Self {
        Self {
            categories: Arc::new(CrudService::new(storage.repository())),
            customers: Arc::new(CrudService::new(storage.repository())),
            products: Arc::new(CrudService::new(storage.repository())),
            employees: Arc::new(CrudService::new(storage.repository())),
            storage,
            request_timeout,
            api_key_hash,
        }
    }

    pub fn from_config(config: &Config, storage: Storage) -> Self {
        Self::new(
            storage,
            config.server.request_timeout,
            config.security.api_key_hash.clone(),
        )
    }

    pub fn api_gate(&self) -> ApiKeyAuth {
        ApiKeyAuth::new(self.api_key_hash.clone())
    }

    /// Register shared data, the health checks and the gated `/api` scope
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.categories.clone()))
            .app_data(web::Data::from(self.customers.clone()))
            .app_data(web::Data::from(self.products.clone()))
            .app_data(web::Data::from(self.employees.clone()))
            .app_data(web::Data::new(RequestTimeout(self.request_timeout)))
            .app_data(web::Data::new(self.storage.clone()))
            .configure(health::controllers::configure)
            .service(
                web::scope("/api")
                    .wrap(self.api_gate())
                    .app_data(json_config())
                    .configure(categories::controllers::configure)
                    .configure(customers::controllers::configure)
                    .configure(products::controllers::configure)
                    .configure(employees::controllers::configure)
                    .default_service(web::to(unknown_route)),
            );
    }
}

/// CORS policy from `CORS_ALLOWED_ORIGINS`; an empty list denies cross-origin calls
pub fn cors(allowed_origins: &[String]) -> Cors {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static("x-api-key"),
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([header::HeaderName::from_static(REQUEST_ID_HEADER)])
        .max_age(3600)
}
