use std::sync::Arc;

use crate::core::context::RequestContext;
use crate::core::error::Result;
use crate::core::traits::{Entity, Repository};
use crate::core::validation::Validate;

/// Service for entity business logic
///
/// Stateless across requests. Create and update validate before any storage
/// access; update and delete look the record up first so a missing id is
/// reported as not-found without issuing a write.
pub struct CrudService<E: Entity> {
    repository: Arc<dyn Repository<E>>,
}

impl<E: Entity> CrudService<E> {
    pub fn new(repository: Arc<dyn Repository<E>>) -> Self {
        Self { repository }
    }

    pub async fn create(
        &self,
        ctx: &RequestContext,
        request: E::CreateRequest,
    ) -> Result<E::Response> {
        request.validate()?;

        let saved = self.repository.save(ctx, E::from_create(request)).await?;
        tracing::info!(
            request_id = ctx.request_id(),
            entity = E::NAME,
            id = saved.id(),
            "Created record"
        );

        Ok(saved.to_response())
    }

    pub async fn update(
        &self,
        ctx: &RequestContext,
        request: E::UpdateRequest,
    ) -> Result<E::Response> {
        request.validate()?;

        let mut record = self
            .repository
            .find_by_id(ctx, E::update_target(&request))
            .await?;
        record.apply_update(request);

        let updated = self.repository.update(ctx, record).await?;
        tracing::info!(
            request_id = ctx.request_id(),
            entity = E::NAME,
            id = updated.id(),
            "Updated record"
        );

        Ok(updated.to_response())
    }

    pub async fn delete(&self, ctx: &RequestContext, id: u64) -> Result<()> {
        let record = self.repository.find_by_id(ctx, id).await?;
        self.repository.delete(ctx, &record).await?;
        tracing::info!(request_id = ctx.request_id(), entity = E::NAME, id, "Deleted record");
        Ok(())
    }

    pub async fn find_by_id(&self, ctx: &RequestContext, id: u64) -> Result<E::Response> {
        let record = self.repository.find_by_id(ctx, id).await?;
        Ok(record.to_response())
    }

    pub async fn find_all(&self, ctx: &RequestContext) -> Result<Vec<E::Response>> {
        let records = self.repository.find_all(ctx).await?;
        Ok(records.iter().map(E::to_response).collect())
    }
}
