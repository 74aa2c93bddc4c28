// Categories module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Category, CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
pub use services::CategoryService;
