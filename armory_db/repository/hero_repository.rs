use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use armory_app::repository::HeroRepository;
use armory_types::errors::{ApplicationError, DbError};
use armory_types::hero::Hero;
use armory_types::page::{Page, PageRequest};

use crate::models as db_models;

/// Implements HeroRepository and operates on transactions.
#[derive(Clone)]
pub struct PostgresHeroRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresHeroRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> HeroRepository for PostgresHeroRepository<'a> {
    async fn save(&self, hero: &Hero) -> Result<Hero, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let row = match hero.id {
            Some(id) => {
                sqlx::query_as::<_, db_models::HeroRow>(
                    r#"
                    INSERT INTO heroes (id, name)
                    VALUES ($1, $2)
                    ON CONFLICT (id) DO UPDATE
                    SET name = $2
                    RETURNING id, name
                    "#,
                )
                .bind(id)
                .bind(&hero.name)
                .fetch_one(&mut *tx_guard.as_mut())
                .await
            }
            None => {
                sqlx::query_as::<_, db_models::HeroRow>(
                    "INSERT INTO heroes (name) VALUES ($1) RETURNING id, name",
                )
                .bind(&hero.name)
                .fetch_one(&mut *tx_guard.as_mut())
                .await
            }
        }
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(row.into())
    }

    async fn find_by_id(&self, hero_id: i64) -> Result<Option<Hero>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let row = sqlx::query_as::<_, db_models::HeroRow>(
            "SELECT id, name FROM heroes WHERE id = $1",
        )
        .bind(hero_id)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self, page: &PageRequest) -> Result<Page<Hero>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM heroes")
            .fetch_one(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        // Sort fields are a closed enum, so interpolating their column
        // names is safe; limit and offset still go through binds.
        let order_by = if page.sort.is_empty() {
            "id ASC".to_string()
        } else {
            page.sort
                .iter()
                .map(|o| format!("{} {}", o.field.column(), o.direction.keyword()))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let sql =
            format!("SELECT id, name FROM heroes ORDER BY {order_by} LIMIT $1 OFFSET $2");

        let rows = sqlx::query_as::<_, db_models::HeroRow>(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(Page {
            content: rows.into_iter().map(Into::into).collect(),
            number: page.page,
            size: page.size,
            total_elements: total as u64,
        })
    }

    async fn exists_by_id(&self, hero_id: i64) -> Result<bool, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM heroes WHERE id = $1)")
                .bind(hero_id)
                .fetch_one(&mut *tx_guard.as_mut())
                .await
                .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(exists)
    }

    async fn delete_by_id(&self, hero_id: i64) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query("DELETE FROM heroes WHERE id = $1")
            .bind(hero_id)
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }
}
