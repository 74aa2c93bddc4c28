use crate::core::{AppError, Result as AppResult};
use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, ResponseError,
};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

pub const API_KEY_HEADER: &str = "X-API-Key";

/// API key gate in front of the `/api` scope
///
/// Holds the Argon2 hash of the expected key. With no hash configured every
/// request passes through untouched.
#[derive(Clone, Default)]
pub struct ApiKeyAuth {
    key_hash: Option<Arc<str>>,
}

impl ApiKeyAuth {
    pub fn new(key_hash: Option<String>) -> Self {
        Self {
            key_hash: key_hash.map(Arc::from),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.key_hash.is_some()
    }
}

impl<S, B> Transform<S, ServiceRequest> for ApiKeyAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ApiKeyAuthMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ApiKeyAuthMiddleware {
            service: Rc::new(service),
            key_hash: self.key_hash.clone(),
        }))
    }
}

pub struct ApiKeyAuthMiddleware<S> {
    service: Rc<S>,
    key_hash: Option<Arc<str>>,
}

impl<S, B> Service<ServiceRequest> for ApiKeyAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let key_hash = self.key_hash.clone();

        Box::pin(async move {
            if let Some(key_hash) = key_hash {
                let provided = req
                    .headers()
                    .get(API_KEY_HEADER)
                    .and_then(|h| h.to_str().ok());

                let rejection = match provided {
                    None => Some(AppError::unauthorized("Missing X-API-Key header")),
                    Some(key) => match verify_api_key(key, &key_hash) {
                        Ok(true) => None,
                        Ok(false) => Some(AppError::unauthorized("Invalid API key")),
                        Err(e) => {
                            tracing::error!("API key hash unusable: {}", e);
                            Some(AppError::unauthorized("Invalid API key"))
                        }
                    },
                };

                if let Some(err) = rejection {
                    let response = err.error_response();
                    return Ok(req.into_response(response).map_into_right_body());
                }
            }

            svc.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

/// Hash an API key with Argon2 and a random salt, in PHC string form
pub fn hash_api_key(api_key: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(api_key.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::configuration(format!("Failed to hash API key: {}", e)))
}

/// Check a presented key against a PHC hash; the hash's own parameters are used
pub fn verify_api_key(api_key: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::configuration(format!("Invalid API key hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(api_key.as_bytes(), &parsed_hash)
        .is_ok())
}
