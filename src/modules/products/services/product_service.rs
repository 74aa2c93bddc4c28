use crate::core::crud::CrudService;
use crate::modules::products::models::Product;

/// Service for product business logic
pub type ProductService = CrudService<Product>;
