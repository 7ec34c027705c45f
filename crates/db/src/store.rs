//! # Class Store
//!
//! [`ClassStore`] is the storage handle the HTTP layer receives through its
//! shared state. [`PgClassStore`] backs it with PostgreSQL; the `mock` module
//! provides a mockall double and an in-memory implementation for tests.

use async_trait::async_trait;
use eyre::Result;
use proffy_core::models::class::{ClassFilter, ClassListing, CreatedClass, NewClass};
use sqlx::PgConnection;

use crate::{repositories, DbPool};

#[async_trait]
pub trait ClassStore: Send + Sync {
    /// Classes matching `filter`, flattened with their tutor's profile
    async fn search_classes(&self, filter: &ClassFilter) -> Result<Vec<ClassListing>>;

    /// Stores the tutor, the class and all of its slots, or nothing at all
    async fn create_class(&self, new_class: NewClass) -> Result<CreatedClass>;
}

pub struct PgClassStore {
    pool: DbPool,
}

impl PgClassStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl ClassStore for PgClassStore {
    async fn search_classes(&self, filter: &ClassFilter) -> Result<Vec<ClassListing>> {
        let rows = repositories::class::search_classes(&self.pool, filter).await?;

        Ok(rows.into_iter().map(ClassListing::from).collect())
    }

    async fn create_class(&self, new_class: NewClass) -> Result<CreatedClass> {
        let mut tx = self.pool.begin().await?;

        match insert_class_with_schedule(&mut tx, &new_class).await {
            Ok(created) => {
                tx.commit().await?;
                tracing::debug!(
                    "Class created: id={}, user_id={}, slots={}",
                    created.class_id, created.user_id, created.slot_count
                );
                Ok(created)
            }
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    // The connection is dropped with the transaction, which
                    // rolls it back server side.
                    tracing::warn!("Rollback of class creation failed: {}", rollback_err);
                }
                Err(err)
            }
        }
    }
}

async fn insert_class_with_schedule(
    conn: &mut PgConnection,
    new_class: &NewClass,
) -> Result<CreatedClass> {
    let user = repositories::user::create_user(&mut *conn, &new_class.tutor).await?;

    let class =
        repositories::class::create_class(&mut *conn, &new_class.subject, new_class.cost, user.id)
            .await?;

    let inserted =
        repositories::class_schedule::create_class_schedule(&mut *conn, class.id, &new_class.schedule)
            .await?;

    Ok(CreatedClass {
        user_id: user.id,
        class_id: class.id,
        slot_count: inserted as usize,
    })
}
