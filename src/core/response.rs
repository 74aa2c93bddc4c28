use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Uniform `{code, status, data}` wrapper for every API response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebResponse<T> {
    pub code: u16,
    pub status: String,
    pub data: Option<T>,
}

impl<T> WebResponse<T> {
    pub fn new(code: StatusCode, status: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code: code.as_u16(),
            status: status.into(),
            data,
        }
    }

    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::OK, "OK", Some(data))
    }

    pub fn created(data: T) -> Self {
        Self::new(StatusCode::CREATED, "Created", Some(data))
    }
}

impl WebResponse<()> {
    pub fn deleted() -> Self {
        Self::new(StatusCode::OK, "Deleted Successfully", None)
    }
}
