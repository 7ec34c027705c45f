use proffy_core::models::class::ClassListing;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct DbClass {
    pub id: Uuid,
    pub subject: String,
    pub cost: f64,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, FromRow)]
pub struct DbClassSchedule {
    pub id: Uuid,
    pub class_id: Uuid,
    pub week_day: i32,
    pub from: i32,
    pub to: i32,
}

/// Row shape of the search query: `classes` joined with `users`
#[derive(Debug, Clone, FromRow)]
pub struct DbClassListing {
    pub id: Uuid,
    pub subject: String,
    pub cost: f64,
    pub user_id: Uuid,
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
}

impl From<DbClassListing> for ClassListing {
    fn from(row: DbClassListing) -> Self {
        ClassListing {
            id: row.id,
            subject: row.subject,
            cost: row.cost,
            user_id: row.user_id,
            name: row.name,
            avatar: row.avatar,
            whatsapp: row.whatsapp,
            bio: row.bio,
        }
    }
}
