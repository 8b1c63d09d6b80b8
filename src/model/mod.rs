//! # Document Model
//!
//! The two document types held by the store, plus the fixed calendar
//! rendering used by every response that carries a date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user.
///
/// Usernames are supplied by the client and are not checked for
/// uniqueness. Users are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

/// A recorded exercise.
///
/// `user_id` is a weak reference: it must point at an existing user when
/// the exercise is inserted, but nothing enforces the relation afterward.
/// `username` is a denormalized copy taken at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub description: String,
    /// Duration in whole minutes.
    pub duration: i64,
    pub date: NaiveDate,
}

/// Fields of an exercise before the store assigns it an id.
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub user_id: Uuid,
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: NaiveDate,
}

/// Renders a date in the fixed human-readable calendar form used by the
/// API: weekday, month, day, year.
///
/// Example: `"Sun Jan 15 2023"`.
pub fn calendar_string(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_string_format() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        assert_eq!(calendar_string(date), "Sun Jan 15 2023");
    }

    #[test]
    fn test_calendar_string_pads_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(calendar_string(date), "Mon Jan 01 2024");
    }

    #[test]
    fn test_exercise_roundtrip() {
        let exercise = Exercise {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            username: "alice".to_string(),
            description: "run".to_string(),
            duration: 30,
            date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        };

        let json = serde_json::to_string(&exercise).unwrap();
        let back: Exercise = serde_json::from_str(&json).unwrap();
        assert_eq!(back, exercise);
    }
}
