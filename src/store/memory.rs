//! # In-Memory Store
//!
//! Volatile backend holding both collections behind an `RwLock`. This is
//! the default backend and the one integration tests run against.

use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::model::{Exercise, NewExercise, User};

use super::collections::Collections;
use super::errors::{StoreError, StoreResult};
use super::query::LogQuery;
use super::ExerciseStore;

/// Volatile document store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Collections>> {
        self.collections.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Collections>> {
        self.collections.write().map_err(|_| StoreError::LockPoisoned)
    }
}

#[async_trait]
impl ExerciseStore for MemoryStore {
    async fn insert_user(&self, username: &str) -> StoreResult<User> {
        Ok(self.write()?.insert_user(username))
    }

    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.read()?.find_user(id))
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.read()?.users.clone())
    }

    async fn insert_exercise(&self, new: NewExercise) -> StoreResult<Exercise> {
        Ok(self.write()?.insert_exercise(new))
    }

    async fn find_exercises(&self, query: &LogQuery) -> StoreResult<Vec<Exercise>> {
        Ok(self.read()?.find_exercises(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_insert_and_list_users() {
        let store = MemoryStore::new();
        let alice = store.insert_user("alice").await.unwrap();

        let users = store.list_users().await.unwrap();
        assert_eq!(users, vec![alice]);
    }

    #[tokio::test]
    async fn test_find_user_missing() {
        let store = MemoryStore::new();
        assert_eq!(store.find_user(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_insert_and_query_exercises() {
        let store = MemoryStore::new();
        let alice = store.insert_user("alice").await.unwrap();

        let inserted = store
            .insert_exercise(NewExercise {
                user_id: alice.id,
                username: alice.username.clone(),
                description: "run".to_string(),
                duration: 30,
                date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            })
            .await
            .unwrap();

        let found = store
            .find_exercises(&LogQuery::for_user(alice.id))
            .await
            .unwrap();
        assert_eq!(found, vec![inserted]);
    }
}
