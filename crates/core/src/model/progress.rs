use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::ids::LessonId;

/// The learner-specific mutable record: current position plus completed ids.
///
/// One record exists per learner/device. The serialized layout matches the
/// persisted slot exactly: `{"currentLessonId": n, "completedLessons": [..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub current_lesson_id: LessonId,
    #[serde(rename = "completedLessons")]
    pub completed: BTreeSet<LessonId>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            current_lesson_id: LessonId::FIRST,
            completed: BTreeSet::new(),
        }
    }
}

impl UserProgress {
    /// Fresh progress: lesson 1, nothing completed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a record from persisted parts, clamping an out-of-range
    /// pointer back into the catalog and discarding out-of-range completions.
    #[must_use]
    pub fn from_persisted(
        current_lesson_id: LessonId,
        completed: impl IntoIterator<Item = LessonId>,
    ) -> Self {
        let current_lesson_id = if current_lesson_id.in_catalog() {
            current_lesson_id
        } else {
            LessonId::FIRST
        };
        Self {
            current_lesson_id,
            completed: completed
                .into_iter()
                .filter(LessonId::in_catalog)
                .collect(),
        }
    }

    /// Records a completion. Idempotent; never moves the pointer.
    ///
    /// Returns true if the set actually changed.
    pub fn complete_lesson(&mut self, id: LessonId) -> bool {
        if !id.in_catalog() {
            return false;
        }
        self.completed.insert(id)
    }

    /// Moves the pointer to the next lesson, saturating at lesson 100.
    ///
    /// Returns true if the pointer moved.
    pub fn advance(&mut self) -> bool {
        let next = self.current_lesson_id.saturating_next();
        let moved = next != self.current_lesson_id;
        self.current_lesson_id = next;
        moved
    }

    #[must_use]
    pub fn is_completed(&self, id: LessonId) -> bool {
        self.completed.contains(&id)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
