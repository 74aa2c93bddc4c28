pub mod customer_repository;

