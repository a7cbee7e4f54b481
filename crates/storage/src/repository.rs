use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use lesson_core::model::{LessonId, UserProgress};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape of the progress slot.
///
/// This mirrors the domain `UserProgress` so repositories can
/// serialize/deserialize without leaking storage concerns into the domain
/// layer. The JSON layout is the slot contract:
/// `{"currentLessonId": n, "completedLessons": [..]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub current_lesson_id: i64,
    pub completed_lessons: Vec<u32>,
}

impl ProgressRecord {
    #[must_use]
    pub fn from_progress(progress: &UserProgress) -> Self {
        Self {
            current_lesson_id: i64::from(progress.current_lesson_id.value()),
            completed_lessons: progress.completed.iter().map(LessonId::value).collect(),
        }
    }

    /// Convert the record back into domain `UserProgress`.
    ///
    /// Returns `None` when the stored pointer is not representable at all
    /// (negative or absurdly large); per the persistence contract such a slot
    /// counts as "no prior progress". In-range cleanup (clamping a pointer
    /// that drifted outside the catalog, dropping stray completion ids) is
    /// delegated to `UserProgress::from_persisted`.
    #[must_use]
    pub fn into_progress(self) -> Option<UserProgress> {
        let pointer = u32::try_from(self.current_lesson_id).ok()?;
        Some(UserProgress::from_persisted(
            LessonId::new(pointer),
            self.completed_lessons.into_iter().map(LessonId::new),
        ))
    }
}

/// Repository contract for the single learner-progress slot.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch the persisted progress, if any.
    ///
    /// Missing or malformed data is `Ok(None)`; callers fall back to default
    /// progress rather than failing.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only for backend faults (connection loss), never
    /// for bad slot contents.
    async fn load(&self) -> Result<Option<UserProgress>, StorageError>;

    /// Overwrite the slot with the given progress (last-write-wins).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save(&self, progress: &UserProgress) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    slot: Arc<Mutex<Option<UserProgress>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load(&self) -> Result<Option<UserProgress>, StorageError> {
        let guard = self
            .slot
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save(&self, progress: &UserProgress) -> Result<(), StorageError> {
        let mut guard = self
            .slot
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(progress.clone());
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo);
        Self { progress }
    }
}
