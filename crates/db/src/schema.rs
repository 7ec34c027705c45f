use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            avatar TEXT NOT NULL,
            whatsapp VARCHAR(255) NOT NULL,
            bio TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create classes table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS classes (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            subject VARCHAR(255) NOT NULL,
            cost DOUBLE PRECISION NOT NULL,
            user_id UUID NOT NULL REFERENCES users(id) ON UPDATE CASCADE ON DELETE CASCADE
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create class_schedule table; "from" and "to" are reserved words
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS class_schedule (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            class_id UUID NOT NULL REFERENCES classes(id) ON UPDATE CASCADE ON DELETE CASCADE,
            week_day INTEGER NOT NULL,
            "from" INTEGER NOT NULL,
            "to" INTEGER NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes (one command per prepared statement)
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_classes_subject ON classes(subject)",
        "CREATE INDEX IF NOT EXISTS idx_classes_user_id ON classes(user_id)",
        "CREATE INDEX IF NOT EXISTS idx_class_schedule_class_id ON class_schedule(class_id)",
        "CREATE INDEX IF NOT EXISTS idx_class_schedule_week_day ON class_schedule(week_day)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
