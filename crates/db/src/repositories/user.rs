use crate::models::DbUser;
use eyre::Result;
use proffy_core::models::user::NewTutor;
use sqlx::PgConnection;
use uuid::Uuid;

pub async fn create_user(conn: &mut PgConnection, tutor: &NewTutor) -> Result<DbUser> {
    let id = Uuid::new_v4();

    tracing::debug!("Creating user: id={}, name={}", id, tutor.name);

    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (id, name, avatar, whatsapp, bio)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, avatar, whatsapp, bio
        "#,
    )
    .bind(id)
    .bind(&tutor.name)
    .bind(&tutor.avatar)
    .bind(&tutor.whatsapp)
    .bind(&tutor.bio)
    .fetch_one(conn)
    .await?;

    Ok(user)
}
