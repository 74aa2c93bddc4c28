// Products module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CreateProductRequest, Product, ProductResponse, UpdateProductRequest};
pub use services::ProductService;
