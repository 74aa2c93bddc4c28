// Integration test for the MySQL repositories
//
// Requires a reachable MySQL at TEST_DATABASE_URL; run with
//   cargo test --test mysql_repository_test -- --ignored

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::time::Duration;

use storefront_api::categories::{Category, CreateCategoryRequest};
use storefront_api::core::crud::{CrudService, MySqlRepository};
use storefront_api::core::traits::Repository;
use storefront_api::core::{AppError, RequestContext, Storage};
use storefront_api::customers::Customer;
use storefront_api::employees::Employee;
use storefront_api::products::Product;

fn ctx() -> RequestContext {
    RequestContext::with_timeout(Duration::from_secs(5))
}

#[tokio::test]
#[ignore = "Requires test database configuration"]
async fn test_category_round_trip() {
    let pool = create_test_pool().await;
    let repo = MySqlRepository::<Category>::new(pool);

    let saved = repo
        .save(
            &ctx(),
            Category {
                id: 0,
                name: format!("Books {}", TestDataFactory::unique_suffix()),
            },
        )
        .await
        .unwrap();
    assert!(saved.id >= 1);

    let found = repo.find_by_id(&ctx(), saved.id).await.unwrap();
    assert_eq!(found, saved);

    let mut renamed = found.clone();
    renamed.name = "Renamed".to_string();
    repo.update(&ctx(), renamed.clone()).await.unwrap();
    assert_eq!(repo.find_by_id(&ctx(), saved.id).await.unwrap(), renamed);

    repo.delete(&ctx(), &renamed).await.unwrap();
    let err = repo.find_by_id(&ctx(), saved.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
#[ignore = "Requires test database configuration"]
async fn test_product_decimals_survive_storage() {
    let pool = create_test_pool().await;
    let repo = MySqlRepository::<Product>::new(pool);

    let saved = repo
        .save(
            &ctx(),
            Product {
                id: 0,
                name: "Notebook".to_string(),
                description: String::new(),
                price: dec!(19.99),
                stock_qty: 7,
                category_id: 1,
                sku: format!("NB-{}", TestDataFactory::unique_suffix()),
                tax_rate: dec!(7.25),
            },
        )
        .await
        .unwrap();

    let found = repo.find_by_id(&ctx(), saved.id).await.unwrap();
    assert_eq!(found.price, dec!(19.99));
    assert_eq!(found.tax_rate, dec!(7.25));
    assert_eq!(found.category_id, 1);

    repo.delete(&ctx(), &found).await.unwrap();
}

#[tokio::test]
#[ignore = "Requires test database configuration"]
async fn test_customer_and_employee_listing() {
    let pool = create_test_pool().await;
    let customers = MySqlRepository::<Customer>::new(pool.clone());
    let employees = MySqlRepository::<Employee>::new(pool);

    let customer = customers
        .save(
            &ctx(),
            Customer {
                id: 0,
                name: "Test".to_string(),
                email: "test@test.com".to_string(),
                phone: "123456".to_string(),
                address: "test street".to_string(),
                loyalty_points: 1,
            },
        )
        .await
        .unwrap();
    let employee = employees
        .save(
            &ctx(),
            Employee {
                id: 0,
                name: "Dana".to_string(),
                email: "dana@example.com".to_string(),
                phone: "555-0142".to_string(),
                date_hired: "2023-04-01".to_string(),
            },
        )
        .await
        .unwrap();

    let all_customers = customers.find_all(&ctx()).await.unwrap();
    assert!(all_customers.iter().any(|c| c.id == customer.id));
    let all_employees = employees.find_all(&ctx()).await.unwrap();
    assert!(all_employees.iter().any(|e| e.id == employee.id));

    customers.delete(&ctx(), &customer).await.unwrap();
    employees.delete(&ctx(), &employee).await.unwrap();
}

#[tokio::test]
#[ignore = "Requires test database configuration"]
async fn test_service_over_mysql_storage() {
    let storage = Storage::MySql(create_test_pool().await);
    storage.ping().await.unwrap();

    let service = CrudService::<Category>::new(storage.repository());
    let created = service
        .create(
            &ctx(),
            CreateCategoryRequest {
                name: "Stationery".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(service.find_by_id(&ctx(), created.id).await.unwrap(), created);
    service.delete(&ctx(), created.id).await.unwrap();
}

#[tokio::test]
#[ignore = "Requires test database configuration"]
async fn test_missing_row_is_not_found() {
    let pool = create_test_pool().await;
    let repo: Arc<dyn Repository<Employee>> = Arc::new(MySqlRepository::<Employee>::new(pool));

    match repo.find_by_id(&ctx(), u64::MAX).await {
        Err(AppError::NotFound(message)) => {
            assert_eq!(message, format!("Employee with id {} not found", u64::MAX))
        }
        other => panic!("expected not found, got {:?}", other),
    }
}
