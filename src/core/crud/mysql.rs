//! MySQL-backed repository shared by every entity.
//!
//! Each entity describes its table once through [`SqlEntity`]; the statements
//! are rendered when the repository is built and reused for every call.

use async_trait::async_trait;
use sqlx::mysql::{MySqlArguments, MySqlPool, MySqlRow};
use sqlx::query::Query;
use sqlx::{FromRow, MySql};
use std::marker::PhantomData;

use crate::core::context::RequestContext;
use crate::core::error::{AppError, Result};
use crate::core::traits::{Entity, Repository};

pub type MySqlQuery<'q> = Query<'q, MySql, MySqlArguments>;

/// Table layout of an entity persisted in MySQL
pub trait SqlEntity: Entity + for<'r> FromRow<'r, MySqlRow> {
    const TABLE: &'static str;

    /// Every column except `id`, in the order [`SqlEntity::bind_columns`] binds them
    const COLUMNS: &'static [&'static str];

    fn bind_columns<'q>(&'q self, query: MySqlQuery<'q>) -> MySqlQuery<'q>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Statements {
    pub insert: String,
    pub update: String,
    pub delete: String,
    pub select_one: String,
    pub select_all: String,
}

impl Statements {
    pub(crate) fn for_entity<E: SqlEntity>() -> Self {
        let table = E::TABLE;
        let columns = E::COLUMNS.join(", ");
        let placeholders = vec!["?"; E::COLUMNS.len()].join(", ");
        let assignments = E::COLUMNS
            .iter()
            .map(|column| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            insert: format!("INSERT INTO {} ({}) VALUES ({})", table, columns, placeholders),
            update: format!("UPDATE {} SET {} WHERE id = ?", table, assignments),
            delete: format!("DELETE FROM {} WHERE id = ?", table),
            select_one: format!("SELECT id, {} FROM {} WHERE id = ?", columns, table),
            select_all: format!("SELECT id, {} FROM {} ORDER BY id", columns, table),
        }
    }
}

/// Repository for one entity's table
pub struct MySqlRepository<E> {
    pool: MySqlPool,
    sql: Statements,
    _entity: PhantomData<fn() -> E>,
}

impl<E: SqlEntity> MySqlRepository<E> {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            pool,
            sql: Statements::for_entity::<E>(),
            _entity: PhantomData,
        }
    }

    async fn insert_row(&self, entity: &E) -> Result<u64> {
        let result = entity
            .bind_columns(sqlx::query(&self.sql.insert))
            .execute(&self.pool)
            .await?;

        tracing::debug!(table = E::TABLE, id = result.last_insert_id(), "Inserted row");
        Ok(result.last_insert_id())
    }

    async fn update_row(&self, entity: &E) -> Result<()> {
        entity
            .bind_columns(sqlx::query(&self.sql.update))
            .bind(entity.id())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_row(&self, id: u64) -> Result<()> {
        sqlx::query(&self.sql.delete)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn fetch_one(&self, id: u64) -> Result<Option<E>> {
        let row = sqlx::query_as::<_, E>(&self.sql.select_one)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn fetch_all(&self) -> Result<Vec<E>> {
        let rows = sqlx::query_as::<_, E>(&self.sql.select_all)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl<E: SqlEntity> Repository<E> for MySqlRepository<E> {
    async fn save(&self, ctx: &RequestContext, mut entity: E) -> Result<E> {
        let id = ctx.run(self.insert_row(&entity)).await?;
        entity.assign_id(id);
        Ok(entity)
    }

    async fn update(&self, ctx: &RequestContext, entity: E) -> Result<E> {
        ctx.run(self.update_row(&entity)).await?;
        Ok(entity)
    }

    async fn delete(&self, ctx: &RequestContext, entity: &E) -> Result<()> {
        ctx.run(self.delete_row(entity.id())).await
    }

    async fn find_by_id(&self, ctx: &RequestContext, id: u64) -> Result<E> {
        ctx.run(self.fetch_one(id))
            .await?
            .ok_or_else(|| AppError::not_found(E::NAME, id))
    }

    async fn find_all(&self, ctx: &RequestContext) -> Result<Vec<E>> {
        ctx.run(self.fetch_all()).await
    }
}
