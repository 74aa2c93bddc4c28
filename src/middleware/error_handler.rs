use actix_web::{error::JsonPayloadError, web, HttpRequest};

use crate::core::AppError;

/// Turn body deserialization failures into the 400 "Bad Request" envelope
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(path = %req.path(), error = %err, "Rejected request body");
    AppError::MalformedBody(err.to_string()).into()
}

/// JSON extractor configuration shared by every API route
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}
