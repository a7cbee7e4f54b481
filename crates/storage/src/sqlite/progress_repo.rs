use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::repository::{ProgressRecord, ProgressRepository, StorageError};
use lesson_core::model::UserProgress;

use super::SqliteRepository;

#[async_trait]
impl ProgressRepository for SqliteRepository {
    async fn load(&self) -> Result<Option<UserProgress>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT current_lesson_id, completed_lessons
            FROM user_progress
            WHERE id = 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let current_lesson_id: i64 = row
            .try_get("current_lesson_id")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        let completed_json: String = row
            .try_get("completed_lessons")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        // A slot that no longer parses counts as "no prior progress"; the
        // learner restarts from defaults instead of hitting an error.
        let Ok(completed_lessons) = serde_json::from_str::<Vec<u32>>(&completed_json) else {
            return Ok(None);
        };

        let record = ProgressRecord {
            current_lesson_id,
            completed_lessons,
        };
        Ok(record.into_progress())
    }

    async fn save(&self, progress: &UserProgress) -> Result<(), StorageError> {
        let record = ProgressRecord::from_progress(progress);
        let completed_json = serde_json::to_string(&record.completed_lessons)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        sqlx::query(
            r"
            INSERT INTO user_progress (id, current_lesson_id, completed_lessons, updated_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(id) DO UPDATE SET
                current_lesson_id = excluded.current_lesson_id,
                completed_lessons = excluded.completed_lessons,
                updated_at = excluded.updated_at
            ",
        )
        .bind(1_i64)
        .bind(record.current_lesson_id)
        .bind(completed_json)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
