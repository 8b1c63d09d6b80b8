//! # File Store
//!
//! Persistent backend keeping both collections in a single JSON document.
//!
//! The full contents are loaded once at open. Every insert rewrites the
//! file atomically: serialize to a temp file in the same directory, fsync,
//! then rename over the live file. A crash mid-write leaves the previous
//! contents intact.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::model::{Exercise, NewExercise, User};

use super::collections::Collections;
use super::errors::{StoreError, StoreResult};
use super::query::LogQuery;
use super::ExerciseStore;

/// JSON-file document store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    collections: RwLock<Collections>,
}

impl FileStore {
    /// Opens the store at `path`, loading existing contents if the file is
    /// present and starting empty otherwise. Parent directories are
    /// created as needed.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        let collections = if path.exists() {
            Self::load(&path)?
        } else {
            Collections::default()
        };

        Ok(Self {
            path,
            collections: RwLock::new(collections),
        })
    }

    fn load(path: &Path) -> StoreResult<Collections> {
        let bytes = fs::read(path).map_err(|e| StoreError::io(path, e))?;
        serde_json::from_slice(&bytes).map_err(|e| StoreError::corrupt(path, e))
    }

    /// Writes the full contents atomically: temp file, fsync, rename.
    fn persist(&self, collections: &Collections) -> StoreResult<()> {
        let tmp_path = self.path.with_extension("tmp");

        let bytes = serde_json::to_vec_pretty(collections)
            .map_err(|e| StoreError::corrupt(&self.path, e))?;

        let mut tmp = File::create(&tmp_path).map_err(|e| StoreError::io(&tmp_path, e))?;
        tmp.write_all(&bytes).map_err(|e| StoreError::io(&tmp_path, e))?;
        tmp.sync_all().map_err(|e| StoreError::io(&tmp_path, e))?;

        fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::io(&self.path, e))
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Collections>> {
        self.collections.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Collections>> {
        self.collections.write().map_err(|_| StoreError::LockPoisoned)
    }
}

#[async_trait]
impl ExerciseStore for FileStore {
    async fn insert_user(&self, username: &str) -> StoreResult<User> {
        let mut collections = self.write()?;
        let user = collections.insert_user(username);
        self.persist(&collections)?;
        Ok(user)
    }

    async fn find_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.read()?.find_user(id))
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.read()?.users.clone())
    }

    async fn insert_exercise(&self, new: NewExercise) -> StoreResult<Exercise> {
        let mut collections = self.write()?;
        let exercise = collections.insert_exercise(new);
        self.persist(&collections)?;
        Ok(exercise)
    }

    async fn find_exercises(&self, query: &LogQuery) -> StoreResult<Vec<Exercise>> {
        Ok(self.read()?.find_exercises(query))
    }
}
