//! # Collections
//!
//! The two document collections and the primitive operations every
//! backend shares. Identifiers are assigned here, on insert; both
//! collections preserve insertion order, which is the store-native order
//! seen by unfiltered reads.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Exercise, NewExercise, User};

use super::query::LogQuery;

/// In-memory representation of the full store contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collections {
    pub users: Vec<User>,
    pub exercises: Vec<Exercise>,
}

impl Collections {
    /// Inserts a user, assigning a fresh id.
    pub fn insert_user(&mut self, username: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
        };
        self.users.push(user.clone());
        user
    }

    /// Looks a user up by id.
    pub fn find_user(&self, id: Uuid) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    /// Inserts an exercise, assigning a fresh id.
    pub fn insert_exercise(&mut self, new: NewExercise) -> Exercise {
        let exercise = Exercise {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            username: new.username,
            description: new.description,
            duration: new.duration,
            date: new.date,
        };
        self.exercises.push(exercise.clone());
        exercise
    }

    /// Runs a log query over the exercise collection.
    pub fn find_exercises(&self, query: &LogQuery) -> Vec<Exercise> {
        query.apply(self.exercises.iter().cloned())
    }
}
