use crate::core::crud::CrudService;
use crate::modules::categories::models::Category;

/// Service for category business logic
pub type CategoryService = CrudService<Category>;
