use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{ProffyError, ProffyResult},
    models::{
        schedule::{NewScheduleSlot, ScheduleItemRequest},
        user::NewTutor,
    },
    time::convert_hour_to_minutes,
};

/// A tutoring offer for one subject, owned by one tutor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub id: Uuid,
    pub subject: String,
    pub cost: f64,
    pub user_id: Uuid,
}

/// A search hit: the class fields flattened together with its tutor's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassListing {
    /// Id of the class. The tutor is identified by `user_id`.
    pub id: Uuid,
    pub subject: String,
    pub cost: f64,
    /// Id of the tutor who teaches the class
    pub user_id: Uuid,
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
}

/// Raw query string of `GET /classes`
///
/// Every field is optional here so that absent filters can be reported with
/// the dedicated `MissingFilters` error instead of an extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchClassesQuery {
    pub subject: Option<String>,
    pub week_day: Option<String>,
    pub time: Option<String>,
}

/// A validated search: exact subject, week day and a time in minutes
#[derive(Debug, Clone, PartialEq)]
pub struct ClassFilter {
    pub subject: String,
    pub week_day: i32,
    pub time_in_minutes: i32,
}

impl SearchClassesQuery {
    /// Validates the query and converts it into a [`ClassFilter`]
    ///
    /// # Errors
    ///
    /// * `ProffyError::MissingFilters` - any of the three filters is absent or empty
    /// * `ProffyError::Validation` - `week_day` is not an integer or `time` is not `HH:MM`
    pub fn into_filter(self) -> ProffyResult<ClassFilter> {
        let present = |value: Option<String>| value.filter(|v| !v.is_empty());

        let (Some(subject), Some(week_day), Some(time)) = (
            present(self.subject),
            present(self.week_day),
            present(self.time),
        ) else {
            return Err(ProffyError::MissingFilters);
        };

        let week_day = week_day.trim().parse::<i32>().map_err(|_| {
            ProffyError::Validation(format!("Invalid week_day '{}', expected an integer", week_day))
        })?;

        Ok(ClassFilter {
            subject,
            week_day,
            time_in_minutes: convert_hour_to_minutes(&time)?,
        })
    }
}

/// Body of `POST /classes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateClassRequest {
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
    pub subject: String,
    pub cost: f64,
    #[serde(rename = "schendule", alias = "schedule")]
    pub schedule: Vec<ScheduleItemRequest>,
}

/// Everything needed to store a tutor, their class and its weekly slots
#[derive(Debug, Clone, PartialEq)]
pub struct NewClass {
    pub tutor: NewTutor,
    pub subject: String,
    pub cost: f64,
    pub schedule: Vec<NewScheduleSlot>,
}

impl CreateClassRequest {
    /// Converts every schedule entry to minutes and splits out the tutor profile
    ///
    /// Fails on the first malformed time; nothing else is validated.
    pub fn into_new_class(self) -> ProffyResult<NewClass> {
        let schedule = self
            .schedule
            .iter()
            .map(ScheduleItemRequest::to_slot)
            .collect::<ProffyResult<Vec<_>>>()?;

        Ok(NewClass {
            tutor: NewTutor {
                name: self.name,
                avatar: self.avatar,
                whatsapp: self.whatsapp,
                bio: self.bio,
            },
            subject: self.subject,
            cost: self.cost,
            schedule,
        })
    }
}

/// Identifiers generated by a successful class creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedClass {
    pub user_id: Uuid,
    pub class_id: Uuid,
    pub slot_count: usize,
}
