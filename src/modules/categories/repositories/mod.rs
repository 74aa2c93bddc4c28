pub mod category_repository;

