//! # API Responses
//!
//! JSON response shapes for all operations. Identifiers serialize as
//! `_id` for store compatibility, and dates render through the fixed
//! calendar string (`"Sun Jan 15 2023"`).

use serde::Serialize;
use uuid::Uuid;

use crate::model::{calendar_string, Exercise, User};

/// A user, as returned by creation and listing.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: Uuid,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}

/// Acknowledgement of a recorded exercise.
///
/// `_id` is the owning **user's** id, not the exercise's. Existing
/// clients depend on that quirk.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub date: String,
    pub duration: i64,
    pub description: String,
}

impl ExerciseResponse {
    pub fn new(user: &User, exercise: &Exercise) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            date: calendar_string(exercise.date),
            duration: exercise.duration,
            description: exercise.description.clone(),
        }
    }
}

/// One entry of an exercise log; carries no identifiers.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: calendar_string(exercise.date),
        }
    }
}

/// A user's filtered exercise log.
#[derive(Debug, Clone, Serialize)]
pub struct LogResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

impl LogResponse {
    /// Builds the response; `count` always equals `log.len()`.
    pub fn new(user: &User, exercises: Vec<Exercise>) -> Self {
        let log: Vec<LogEntry> = exercises.into_iter().map(LogEntry::from).collect();
        Self {
            id: user.id,
            username: user.username.clone(),
            count: log.len(),
            log,
        }
    }
}
