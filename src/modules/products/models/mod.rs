mod product;

pub use product::{CreateProductRequest, Product, ProductResponse, UpdateProductRequest};
