//! Generic CRUD pipeline: repository backends, service and HTTP handlers,
//! written once and instantiated per entity.

pub mod controller;
pub mod memory;
pub mod mysql;
pub mod service;

pub use memory::{InMemoryRepository, Operation};
pub use mysql::{MySqlRepository, SqlEntity};
pub use service::CrudService;
