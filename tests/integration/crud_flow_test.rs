// Integration test for the CRUD lifecycle of every entity
//
// Create -> find -> list -> update -> delete -> find (404), driven through the
// full route table over in-memory storage.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use serde_json::{json, Value};
use std::time::Duration;

async fn run_lifecycle(app: &TestApp, collection: &str, create: Value, update: Value) {
    let created = app.post(&format!("/api/{}/", collection), create.clone()).await;
    assert_eq!(created.status, 201, "create {}: {}", collection, created.body);
    let id = created.id();
    assert!(id >= 1);

    for (field, value) in create.as_object().unwrap() {
        assert_eq!(&created.data()[field.as_str()], value, "{}.{}", collection, field);
    }

    let item_uri = format!("/api/{}/{}", collection, id);

    let found = app.get(&item_uri).await;
    assert_eq!(found.status, 200);
    assert_eq!(found.data(), created.data());

    let listed = app.get(&format!("/api/{}", collection)).await;
    assert_eq!(listed.status, 200);
    assert_eq!(listed.data(), &json!([created.data().clone()]));

    let updated = app.put(&item_uri, update.clone()).await;
    assert_eq!(updated.status, 200, "update {}: {}", collection, updated.body);
    assert_eq!(updated.body["status"], "OK");
    assert_eq!(updated.id(), id);
    for (field, value) in update.as_object().unwrap() {
        assert_eq!(&updated.data()[field.as_str()], value, "{}.{}", collection, field);
    }

    let refetched = app.get(&item_uri).await;
    assert_eq!(refetched.data(), updated.data());

    let deleted = app.delete(&item_uri).await;
    assert_eq!(deleted.status, 200);

    let gone = app.get(&item_uri).await;
    assert_eq!(gone.status, 404);

    let deleted_again = app.delete(&item_uri).await;
    assert_eq!(deleted_again.status, 404);
}

#[actix_web::test]
async fn test_category_lifecycle() {
    let app = TestApp::in_memory();
    run_lifecycle(
        &app,
        "categories",
        TestDataFactory::category_payload(),
        json!({ "name": "Comics" }),
    )
    .await;
}

#[actix_web::test]
async fn test_customer_lifecycle() {
    let app = TestApp::in_memory();
    run_lifecycle(
        &app,
        "customers",
        TestDataFactory::customer_payload(),
        json!({
            "name": "Test Two",
            "email": "two@test.com",
            "phone": "654321",
            "address": "other street",
            "loyalty_points": 0
        }),
    )
    .await;
}

#[actix_web::test]
async fn test_product_lifecycle() {
    let app = TestApp::in_memory();
    run_lifecycle(
        &app,
        "products",
        TestDataFactory::product_payload(1),
        json!({
            "name": "Notebook XL",
            "description": "",
            "price": 5.25,
            "stock_qty": 0,
            "category_id": 2,
            "sku": "NB-XL",
            "tax_rate": 0.0
        }),
    )
    .await;
}

#[actix_web::test]
async fn test_employee_lifecycle() {
    let app = TestApp::in_memory();
    run_lifecycle(
        &app,
        "employees",
        TestDataFactory::employee_payload(),
        json!({
            "name": "Updated",
            "email": "dana@example.com",
            "phone": "555-0142",
            "date_hired": "2023-04-01"
        }),
    )
    .await;
}

#[actix_web::test]
async fn test_update_missing_record_is_404() {
    let app = TestApp::in_memory();

    let resp = app
        .put("/api/products/1", TestDataFactory::product_payload(1))
        .await;
    assert_eq!(resp.status, 404);
    assert_eq!(resp.body["status"], "Not Found");
}

#[actix_web::test]
async fn test_invalid_update_leaves_record_untouched() {
    let app = TestApp::in_memory();
    let id = app
        .post("/api/categories", TestDataFactory::category_payload())
        .await
        .id();

    let resp = app
        .put(&format!("/api/categories/{}", id), json!({ "name": "" }))
        .await;
    assert_eq!(resp.status, 500);

    let found = app.get(&format!("/api/categories/{}", id)).await;
    assert_eq!(found.data()["name"], "Books");
}

#[actix_web::test]
async fn test_ids_are_assigned_in_order() {
    let app = TestApp::in_memory();

    let first = app
        .post("/api/categories", json!({ "name": "A" }))
        .await
        .id();
    let second = app
        .post("/api/categories", json!({ "name": "B" }))
        .await
        .id();
    assert!(second > first);

    let listed = app.get("/api/categories").await;
    let names: Vec<&str> = listed
        .data()
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[actix_web::test]
async fn test_slow_storage_times_out_with_500() {
    let app = TestApp::with_slow_categories(Duration::from_millis(500), Duration::from_millis(20));

    let resp = app.get("/api/categories").await;
    assert_eq!(resp.status, 500);
    assert_eq!(resp.body["status"], "Internal Server Error");
    assert!(resp.data().as_str().unwrap().contains("timed out"));
}

#[actix_web::test]
async fn test_request_id_header_is_echoed() {
    let app = TestApp::in_memory();

    let req = actix_web::test::TestRequest::get()
        .uri("/api/employees")
        .insert_header(("X-Request-ID", "flow-42"));
    let resp = app.call(req).await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.headers.get("x-request-id").unwrap(), "flow-42");
}

#[actix_web::test]
async fn test_health_endpoints() {
    let app = TestApp::in_memory();

    let health = app.get("/health").await;
    assert_eq!(health.status, 200);
    assert_eq!(health.body["status"], "healthy");

    let ready = app.get("/ready").await;
    assert_eq!(ready.status, 200);
    assert_eq!(ready.body["ready"], true);
}
