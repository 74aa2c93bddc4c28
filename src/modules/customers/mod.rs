// Customers module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CreateCustomerRequest, Customer, CustomerResponse, UpdateCustomerRequest};
pub use services::CustomerService;
