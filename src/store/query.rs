//! # Log Query
//!
//! Filter construction and application for the exercise log. A query
//! selects one user's exercises, optionally bounded by an inclusive date
//! range, and caps the result count after a chronological sort.
//!
//! Application order is strict: filter, then sort, then limit. Sorting
//! before truncation means a limited query always keeps the earliest
//! matching entries; the sort is stable, so same-date entries stay in
//! insertion order.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::model::Exercise;

/// A filter over the exercise collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    /// Owning user; every returned exercise carries this `user_id`.
    pub user_id: Uuid,
    /// Inclusive lower date bound, if any.
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound, if any.
    pub to: Option<NaiveDate>,
    /// Maximum number of entries to return, if any.
    pub limit: Option<usize>,
}

impl LogQuery {
    /// An unbounded query for one user's exercises.
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id,
            from: None,
            to: None,
            limit: None,
        }
    }

    /// Checks whether an exercise satisfies the filter.
    ///
    /// All present conditions must hold (AND semantics); an absent bound
    /// imposes no constraint on that side.
    pub fn matches(&self, exercise: &Exercise) -> bool {
        if exercise.user_id != self.user_id {
            return false;
        }
        if let Some(from) = self.from {
            if exercise.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if exercise.date > to {
                return false;
            }
        }
        true
    }

    /// Runs the query over a collection scan.
    ///
    /// Filters, sorts by date (stable), then truncates to `limit`.
    pub fn apply(&self, exercises: impl IntoIterator<Item = Exercise>) -> Vec<Exercise> {
        let mut matched: Vec<Exercise> = exercises
            .into_iter()
            .filter(|e| self.matches(e))
            .collect();

        matched.sort_by_key(|e| e.date);

        if let Some(limit) = self.limit {
            matched.truncate(limit);
        }

        matched
    }
}
