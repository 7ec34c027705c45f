use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::{errors::ProffyResult, time::convert_hour_to_minutes};

/// One recurring weekly availability window of a class
///
/// `from` is inclusive and `to` is exclusive, both in minutes since midnight.
/// `week_day` counts from Sunday (0) to Saturday (6).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub class_id: Uuid,
    pub week_day: i32,
    pub from: i32,
    pub to: i32,
}

impl ScheduleSlot {
    /// Whether a client looking for `week_day` at `minute` can book this slot
    pub fn contains(&self, week_day: i32, minute: i32) -> bool {
        self.week_day == week_day && self.from <= minute && self.to > minute
    }
}

/// A slot that has been converted to minutes but not stored yet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewScheduleSlot {
    pub week_day: i32,
    pub from: i32,
    pub to: i32,
}

impl NewScheduleSlot {
    pub fn for_class(self, class_id: Uuid) -> ScheduleSlot {
        ScheduleSlot {
            class_id,
            week_day: self.week_day,
            from: self.from,
            to: self.to,
        }
    }
}

/// A schedule entry as submitted by a tutor, with `"HH:MM"` times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItemRequest {
    #[serde(deserialize_with = "week_day_from_number_or_string")]
    pub week_day: i32,
    pub from: String,
    pub to: String,
}

impl ScheduleItemRequest {
    /// Converts both ends of the window to minutes since midnight
    ///
    /// The window itself is not checked: `from >= to` and week days outside
    /// `0..=6` are stored as given.
    pub fn to_slot(&self) -> ProffyResult<NewScheduleSlot> {
        Ok(NewScheduleSlot {
            week_day: self.week_day,
            from: convert_hour_to_minutes(&self.from)?,
            to: convert_hour_to_minutes(&self.to)?,
        })
    }
}

// Web forms post select values as strings.
fn week_day_from_number_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i32),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(day) => Ok(day),
        NumberOrString::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid week_day '{}'", text))),
    }
}
