//! Storefront back-office API
//!
//! JSON CRUD endpoints for categories, customers, products and employees,
//! layered as controller, service and repository over MySQL or an in-memory store.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use app::AppState;
pub use modules::categories;
pub use modules::customers;
pub use modules::employees;
pub use modules::products;
