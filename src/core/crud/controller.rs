//! HTTP handlers shared by every entity.
//!
//! Handlers only bind the request to a service call and wrap the outcome in the
//! response envelope; status-code translation for failures lives in
//! `AppError`'s `ResponseError` impl.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::core::context::RequestContext;
use crate::core::crud::service::CrudService;
use crate::core::error::AppError;
use crate::core::response::WebResponse;
use crate::core::traits::Entity;

/// Parse a decimal u64 path segment
pub fn parse_id<E: Entity>(raw: &str) -> Result<u64, AppError> {
    raw.parse::<u64>().map_err(|e| AppError::InvalidId {
        entity: E::NAME,
        reason: e.to_string(),
    })
}

/// GET /{entity}
pub async fn find_all<E: Entity>(
    service: web::Data<CrudService<E>>,
    ctx: RequestContext,
) -> Result<HttpResponse, AppError> {
    let records = service.find_all(&ctx).await?;
    Ok(HttpResponse::Ok().json(WebResponse::ok(records)))
}

/// GET /{entity}/{id}
pub async fn find_by_id<E: Entity>(
    service: web::Data<CrudService<E>>,
    ctx: RequestContext,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id::<E>(&path)?;
    let record = service.find_by_id(&ctx, id).await?;
    Ok(HttpResponse::Ok().json(WebResponse::ok(record)))
}

/// POST /{entity}
pub async fn create<E: Entity>(
    service: web::Data<CrudService<E>>,
    ctx: RequestContext,
    request: web::Json<E::CreateRequest>,
) -> Result<HttpResponse, AppError> {
    let record = service.create(&ctx, request.into_inner()).await?;
    Ok(HttpResponse::Created().json(WebResponse::created(record)))
}

/// PUT /{entity}/{id}
///
/// The body is parsed before the path id; the path id replaces any id in the body.
pub async fn update<E: Entity>(
    service: web::Data<CrudService<E>>,
    ctx: RequestContext,
    request: web::Json<E::UpdateRequest>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id::<E>(&path)?;
    let mut request = request.into_inner();
    E::retarget(&mut request, id);

    let record = service.update(&ctx, request).await?;
    Ok(HttpResponse::Ok().json(WebResponse::ok(record)))
}

/// DELETE /{entity}/{id}
pub async fn delete<E: Entity>(
    service: web::Data<CrudService<E>>,
    ctx: RequestContext,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id::<E>(&path)?;
    service.delete(&ctx, id).await?;
    Ok(HttpResponse::Ok().json(WebResponse::deleted()))
}

/// Fallback for paths nothing under `/api` serves
pub async fn unknown_route(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::RouteNotFound(format!(
        "No route for {} {}",
        req.method(),
        req.path()
    )))
}

/// Fallback for a known path hit with an unsupported method
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed(format!(
        "{} is not supported on {}",
        req.method(),
        req.path()
    )))
}

/// Mount the five CRUD routes for `E` under `scope`
pub fn configure_routes<E: Entity>(cfg: &mut web::ServiceConfig, scope: &str) {
    cfg.service(
        web::scope(scope)
            .service(
                web::resource(["", "/"])
                    .route(web::get().to(find_all::<E>))
                    .route(web::post().to(create::<E>))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(find_by_id::<E>))
                    .route(web::put().to(update::<E>))
                    .route(web::delete().to(delete::<E>))
                    .default_service(web::to(method_not_allowed)),
            )
            .default_service(web::to(unknown_route)),
    );
}
