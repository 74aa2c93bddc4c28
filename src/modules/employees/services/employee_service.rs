use crate::core::crud::CrudService;
use crate::modules::employees::models::Employee;

/// Service for employee business logic
pub type EmployeeService = CrudService<Employee>;
