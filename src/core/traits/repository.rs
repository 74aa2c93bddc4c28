use async_trait::async_trait;

use crate::core::context::RequestContext;
use crate::core::error::Result;
use crate::core::traits::Entity;

/// Base repository trait for CRUD operations
///
/// Every call is a single storage round trip bounded by `ctx`. A missing row is
/// reported by `find_by_id` as `AppError::NotFound`; every other failure is a
/// storage error.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Insert a new record; storage assigns the identifier
    async fn save(&self, ctx: &RequestContext, entity: E) -> Result<E>;

    /// Overwrite an existing record by identifier
    async fn update(&self, ctx: &RequestContext, entity: E) -> Result<E>;

    /// Hard delete by identifier
    async fn delete(&self, ctx: &RequestContext, entity: &E) -> Result<()>;

    async fn find_by_id(&self, ctx: &RequestContext, id: u64) -> Result<E>;

    /// All records, ordered by identifier
    async fn find_all(&self, ctx: &RequestContext) -> Result<Vec<E>>;
}
