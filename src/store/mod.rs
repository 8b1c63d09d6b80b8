//! # Document Store
//!
//! The persistence seam of the API. Handlers only see the
//! [`ExerciseStore`] trait (insert-one, find-by-id, and find-with-filter
//! over the two collections), so backends are interchangeable. Two ship:
//! a volatile in-memory store and a JSON-file store with atomic rewrites.
//!
//! The backend is selected from the configured store URI at startup and
//! injected into handlers as an `Arc<dyn ExerciseStore>`.

pub mod collections;
pub mod errors;
pub mod file;
pub mod memory;
pub mod query;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::config::StoreUri;
use crate::model::{Exercise, NewExercise, User};

pub use collections::Collections;
pub use errors::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use query::LogQuery;

/// Shared handle to a store backend
pub type DynStore = Arc<dyn ExerciseStore>;

/// Operations every store backend provides.
///
/// Every method is an await point for callers; backends give single-insert
/// atomicity and nothing more.
#[async_trait]
pub trait ExerciseStore: Send + Sync {
    /// Inserts a user, returning it with its assigned id.
    async fn insert_user(&self, username: &str) -> StoreResult<User>;

    /// Finds a user by id.
    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// Returns all users in store-native (insertion) order.
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    /// Inserts an exercise, returning it with its assigned id.
    async fn insert_exercise(&self, new: NewExercise) -> StoreResult<Exercise>;

    /// Returns the exercises matching a log query, date-ordered.
    async fn find_exercises(&self, query: &LogQuery) -> StoreResult<Vec<Exercise>>;
}

/// Opens the backend named by a store URI.
pub fn open(uri: &StoreUri) -> StoreResult<DynStore> {
    match uri {
        StoreUri::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreUri::File(path) => Ok(Arc::new(FileStore::open(path)?)),
    }
}
