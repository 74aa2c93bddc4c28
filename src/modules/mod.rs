pub mod categories;
pub mod customers;
pub mod employees;
pub mod health;
pub mod products;
