//! In-process repository over an ordered map.
//!
//! Serves as the `memory` storage backend and as the test double for the
//! service and controller layers: it counts calls per operation and can be
//! told to fail or stall specific operations.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

use crate::core::context::RequestContext;
use crate::core::error::{AppError, Result};
use crate::core::traits::{Entity, Repository};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Save,
    Update,
    Delete,
    FindById,
    FindAll,
}

impl Operation {
    const ALL: [Operation; 5] = [
        Operation::Save,
        Operation::Update,
        Operation::Delete,
        Operation::FindById,
        Operation::FindAll,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

pub struct InMemoryRepository<E> {
    rows: RwLock<BTreeMap<u64, E>>,
    next_id: AtomicU64,
    calls: [AtomicUsize; 5],
    failures: HashMap<Operation, String>,
    latency: Option<Duration>,
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
            calls: Default::default(),
            failures: HashMap::new(),
            latency: None,
        }
    }

    /// Repository pre-populated with already persisted records
    pub fn with_rows(rows: impl IntoIterator<Item = E>) -> Self {
        let rows: BTreeMap<u64, E> = rows.into_iter().map(|row| (row.id(), row)).collect();
        let next_id = rows.keys().next_back().map_or(1, |max| max + 1);

        Self {
            rows: RwLock::new(rows),
            next_id: AtomicU64::new(next_id),
            ..Self::new()
        }
    }

    /// Make every call to `operation` fail with a storage error
    pub fn fail_on(mut self, operation: Operation, message: impl Into<String>) -> Self {
        self.failures.insert(operation, message.into());
        self
    }

    /// Delay every call before it touches the map
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn calls(&self, operation: Operation) -> usize {
        self.calls[operation.index()].load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        Operation::ALL.iter().map(|op| self.calls(*op)).sum()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    async fn begin(&self, operation: Operation) -> Result<()> {
        self.calls[operation.index()].fetch_add(1, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        match self.failures.get(&operation) {
            Some(message) => Err(AppError::storage(message.clone())),
            None => Ok(()),
        }
    }

    async fn insert_row(&self, mut entity: E) -> Result<E> {
        self.begin(Operation::Save).await?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        entity.assign_id(id);
        self.rows.write().await.insert(id, entity.clone());
        Ok(entity)
    }

    /// Like `UPDATE ... WHERE id = ?`: a row deleted in the meantime stays deleted
    async fn overwrite_row(&self, entity: E) -> Result<E> {
        self.begin(Operation::Update).await?;
        if let Some(slot) = self.rows.write().await.get_mut(&entity.id()) {
            *slot = entity.clone();
        }
        Ok(entity)
    }

    async fn remove_row(&self, id: u64) -> Result<()> {
        self.begin(Operation::Delete).await?;
        self.rows.write().await.remove(&id);
        Ok(())
    }

    async fn get_row(&self, id: u64) -> Result<E> {
        self.begin(Operation::FindById).await?;
        self.rows
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(E::NAME, id))
    }

    async fn all_rows(&self) -> Result<Vec<E>> {
        self.begin(Operation::FindAll).await?;
        Ok(self.rows.read().await.values().cloned().collect())
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn save(&self, ctx: &RequestContext, entity: E) -> Result<E> {
        ctx.run(self.insert_row(entity)).await
    }

    async fn update(&self, ctx: &RequestContext, entity: E) -> Result<E> {
        ctx.run(self.overwrite_row(entity)).await
    }

    async fn delete(&self, ctx: &RequestContext, entity: &E) -> Result<()> {
        ctx.run(self.remove_row(entity.id())).await
    }

    async fn find_by_id(&self, ctx: &RequestContext, id: u64) -> Result<E> {
        ctx.run(self.get_row(id)).await
    }

    async fn find_all(&self, ctx: &RequestContext) -> Result<Vec<E>> {
        ctx.run(self.all_rows()).await
    }
}
