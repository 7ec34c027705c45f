use crate::models::{DbClass, DbClassListing};
use eyre::Result;
use proffy_core::models::class::ClassFilter;
use sqlx::{PgConnection, Pool, Postgres};
use uuid::Uuid;

pub async fn create_class(
    conn: &mut PgConnection,
    subject: &str,
    cost: f64,
    user_id: Uuid,
) -> Result<DbClass> {
    let id = Uuid::new_v4();

    tracing::debug!(
        "Creating class: id={}, subject={}, cost={}, user_id={}",
        id, subject, cost, user_id
    );

    let class = sqlx::query_as::<_, DbClass>(
        r#"
        INSERT INTO classes (id, subject, cost, user_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, subject, cost, user_id
        "#,
    )
    .bind(id)
    .bind(subject)
    .bind(cost)
    .bind(user_id)
    .fetch_one(conn)
    .await?;

    Ok(class)
}

/// Classes of `filter.subject` with at least one slot on `filter.week_day`
/// whose `[from, to)` window contains `filter.time_in_minutes`, joined with
/// their tutor
pub async fn search_classes(
    pool: &Pool<Postgres>,
    filter: &ClassFilter,
) -> Result<Vec<DbClassListing>> {
    tracing::debug!(
        "Searching classes: subject={}, week_day={}, minute={}",
        filter.subject, filter.week_day, filter.time_in_minutes
    );

    let classes = sqlx::query_as::<_, DbClassListing>(
        r#"
        SELECT classes.id, classes.subject, classes.cost, classes.user_id,
               users.name, users.avatar, users.whatsapp, users.bio
        FROM classes
        JOIN users ON classes.user_id = users.id
        WHERE classes.subject = $1
          AND EXISTS (
              SELECT 1
              FROM class_schedule
              WHERE class_schedule.class_id = classes.id
                AND class_schedule.week_day = $2
                AND class_schedule."from" <= $3
                AND class_schedule."to" > $3
          )
        "#,
    )
    .bind(&filter.subject)
    .bind(filter.week_day)
    .bind(filter.time_in_minutes)
    .fetch_all(pool)
    .await?;

    tracing::debug!("Search matched {} classes", classes.len());
    Ok(classes)
}
