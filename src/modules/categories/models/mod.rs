mod category;

pub use category::{Category, CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
