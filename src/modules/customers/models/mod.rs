mod customer;

pub use customer::{CreateCustomerRequest, Customer, CustomerResponse, UpdateCustomerRequest};
