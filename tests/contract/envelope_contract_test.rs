// Contract test for the response envelope
//
// Every /api response is `{code, status, data}` with `code` equal to the HTTP
// status. These tests pin the status strings and data shapes per outcome.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use serde_json::json;

#[actix_web::test]
async fn test_list_envelope() {
    let app = TestApp::in_memory();

    let resp = app.get("/api/categories").await;
    assert_envelope(&resp, 200, "OK");
    assert_eq!(resp.data(), &json!([]));
}

#[actix_web::test]
async fn test_created_envelope() {
    let app = TestApp::in_memory();

    let resp = app
        .post("/api/customers", TestDataFactory::customer_payload())
        .await;
    assert_envelope(&resp, 201, "Created");
    assert!(resp.id() >= 1);
    assert_eq!(resp.data()["name"], "Test");
    assert_eq!(resp.data()["email"], "test@test.com");
    assert_eq!(resp.data()["phone"], "123456");
    assert_eq!(resp.data()["address"], "test street");
    assert_eq!(resp.data()["loyalty_points"], 1);
}

#[actix_web::test]
async fn test_deleted_envelope_has_null_data() {
    let app = TestApp::in_memory();
    let id = app
        .post("/api/employees", TestDataFactory::employee_payload())
        .await
        .id();

    let resp = app.delete(&format!("/api/employees/{}", id)).await;
    assert_envelope(&resp, 200, "Deleted Successfully");
    assert!(resp.data().is_null());
}

#[actix_web::test]
async fn test_not_found_envelope() {
    let app = TestApp::in_memory();

    let resp = app.get("/api/products/12").await;
    assert_envelope(&resp, 404, "Not Found");
    assert_eq!(resp.data(), "Product with id 12 not found");
}

#[actix_web::test]
async fn test_invalid_id_envelope_names_the_entity() {
    let app = TestApp::in_memory();

    for (uri, status_text) in [
        ("/api/categories/abc", "Invalid Category ID"),
        ("/api/customers/-1", "Invalid Customer ID"),
        ("/api/products/1.5", "Invalid Product ID"),
        ("/api/employees/99999999999999999999999", "Invalid Employee ID"),
    ] {
        let resp = app.get(uri).await;
        assert_envelope(&resp, 400, status_text);
        assert!(resp.data().is_string(), "GET {}", uri);
    }
}

#[actix_web::test]
async fn test_malformed_body_envelope() {
    let app = TestApp::in_memory();

    let req = actix_web::test::TestRequest::post()
        .uri("/api/categories")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"name\": ");
    let resp = app.call(req).await;
    assert_envelope(&resp, 400, "Bad Request");
}

#[actix_web::test]
async fn test_validation_failure_envelope() {
    let app = TestApp::in_memory();

    let payload = TestDataFactory::with(
        TestDataFactory::product_payload(1),
        "tax_rate",
        json!(250),
    );
    let resp = app.post("/api/products", payload).await;
    assert_envelope(&resp, 500, "Internal Server Error");
    assert!(resp.data().as_str().unwrap().contains("tax_rate"));
}

#[actix_web::test]
async fn test_money_outside_column_range_is_rejected() {
    let app = TestApp::in_memory();

    for (field, value) in [
        ("price", json!(1.234)),
        ("price", json!(10000000000.0)),
        ("tax_rate", json!(7.125)),
    ] {
        let payload = TestDataFactory::with(TestDataFactory::product_payload(1), field, value);
        let resp = app.post("/api/products", payload).await;
        assert_envelope(&resp, 500, "Internal Server Error");
        assert!(resp.data().as_str().unwrap().contains(field));
    }

    let resp = app.get("/api/products").await;
    assert_eq!(resp.data(), &json!([]));
}

#[actix_web::test]
async fn test_decimal_fields_are_numbers() {
    let app = TestApp::in_memory();

    let resp = app
        .post("/api/products", TestDataFactory::product_payload(2))
        .await;
    assert_envelope(&resp, 201, "Created");
    assert_eq!(resp.data()["price"].as_f64(), Some(3.5));
    assert_eq!(resp.data()["tax_rate"].as_f64(), Some(10.0));
    assert_eq!(resp.data()["category_id"], 2);
}

#[actix_web::test]
async fn test_unmatched_routes_return_envelope() {
    let app = TestApp::in_memory();

    let resp = app.get("/api/orders").await;
    assert_envelope(&resp, 404, "Not Found");
    assert!(resp.data().as_str().unwrap().contains("/api/orders"));

    let resp = app.get("/api/products/1/reviews").await;
    assert_envelope(&resp, 404, "Not Found");

    let resp = app
        .call(actix_web::test::TestRequest::patch().uri("/api/customers/1"))
        .await;
    assert_envelope(&resp, 405, "Method Not Allowed");

    let resp = app.delete("/api/employees").await;
    assert_envelope(&resp, 405, "Method Not Allowed");
}
