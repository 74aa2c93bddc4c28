use crate::core::crud::CrudService;
use crate::modules::customers::models::Customer;

/// Service for customer business logic
pub type CustomerService = CrudService<Customer>;
