use crate::models::DbClassSchedule;
use eyre::Result;
use proffy_core::models::schedule::NewScheduleSlot;
use sqlx::{PgConnection, Pool, Postgres, QueryBuilder};
use uuid::Uuid;

/// Inserts every slot of a class in a single statement and returns the
/// number of rows written
pub async fn create_class_schedule(
    conn: &mut PgConnection,
    class_id: Uuid,
    slots: &[NewScheduleSlot],
) -> Result<u64> {
    if slots.is_empty() {
        tracing::debug!("No schedule slots to insert for class {}", class_id);
        return Ok(0);
    }

    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
        r#"INSERT INTO class_schedule (id, class_id, week_day, "from", "to") "#,
    );
    builder.push_values(slots, |mut row, slot| {
        row.push_bind(Uuid::new_v4())
            .push_bind(class_id)
            .push_bind(slot.week_day)
            .push_bind(slot.from)
            .push_bind(slot.to);
    });

    let result = builder.build().execute(conn).await?;

    Ok(result.rows_affected())
}

pub async fn get_class_schedule(
    pool: &Pool<Postgres>,
    class_id: Uuid,
) -> Result<Vec<DbClassSchedule>> {
    let slots = sqlx::query_as::<_, DbClassSchedule>(
        r#"
        SELECT id, class_id, week_day, "from", "to"
        FROM class_schedule
        WHERE class_id = $1
        ORDER BY week_day ASC, "from" ASC
        "#,
    )
    .bind(class_id)
    .fetch_all(pool)
    .await?;

    Ok(slots)
}
