// In-memory Application Harness
//
// Builds the full production route table over in-memory repositories so the
// suites exercise routing, middleware, services and envelopes without MySQL.
// Every call re-initializes the actix service from the same `AppState`; the
// repositories live behind `Arc`, so data persists across calls.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use actix_web::{test, App};
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use storefront_api::categories::Category;
use storefront_api::core::crud::{CrudService, InMemoryRepository};
use storefront_api::core::Storage;
use storefront_api::middleware::RequestId;
use storefront_api::AppState;

pub const TEST_API_KEY: &str = "test-api-key";

/// Argon2id hash with minimal cost parameters, in PHC form
pub fn hash_key(key: &str) -> String {
    let params = Params::new(64, 1, 1, None).unwrap();
    let salt = SaltString::from_b64("dGVzdGFwcHNhbHQ").unwrap();
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(key.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

/// Decoded response: status, headers and JSON body (`Null` when the body is empty)
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    pub fn id(&self) -> u64 {
        self.data()["id"]
            .as_u64()
            .unwrap_or_else(|| panic!("response has no data.id: {}", self.body))
    }
}

pub struct TestApp {
    pub state: AppState,
}

impl TestApp {
    pub fn in_memory() -> Self {
        Self {
            state: AppState::new(Storage::Memory, Duration::from_secs(5), None),
        }
    }

    /// Gate `/api` on `key`; the state only ever sees its Argon2 hash
    pub fn with_api_key(key: &str) -> Self {
        Self {
            state: AppState::new(Storage::Memory, Duration::from_secs(5), Some(hash_key(key))),
        }
    }

    /// Swap the category store for one that answers after `latency`
    pub fn with_slow_categories(latency: Duration, request_timeout: Duration) -> Self {
        let mut state = AppState::new(Storage::Memory, request_timeout, None);
        let repo = InMemoryRepository::<Category>::new().with_latency(latency);
        state.categories = Arc::new(CrudService::new(Arc::new(repo)));
        Self { state }
    }

    pub async fn call(&self, req: test::TestRequest) -> TestResponse {
        let state = self.state.clone();
        let app = test::init_service(
            App::new()
                .wrap(RequestId)
                .configure(move |cfg| state.configure(cfg)),
        )
        .await;

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = test::read_body(resp).await;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                panic!("body is not JSON ({}): {:?}", e, String::from_utf8_lossy(&bytes))
            })
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.call(test::TestRequest::get().uri(uri)).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.call(test::TestRequest::post().uri(uri).set_json(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.call(test::TestRequest::put().uri(uri).set_json(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.call(test::TestRequest::delete().uri(uri)).await
    }
}

/// Assert the `{code, status, data}` envelope and that `code` mirrors the HTTP status
pub fn assert_envelope(resp: &TestResponse, status: u16, status_text: &str) {
    assert_eq!(resp.status.as_u16(), status, "unexpected status, body: {}", resp.body);

    let object = resp
        .body
        .as_object()
        .unwrap_or_else(|| panic!("envelope is not an object: {}", resp.body));
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["code", "data", "status"]);

    assert_eq!(resp.body["code"], status);
    assert_eq!(resp.body["status"], status_text);
}
