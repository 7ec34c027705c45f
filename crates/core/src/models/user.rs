use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tutor's public profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
}

/// Profile fields for the tutor registered together with a new class
#[derive(Debug, Clone, PartialEq)]
pub struct NewTutor {
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
}
