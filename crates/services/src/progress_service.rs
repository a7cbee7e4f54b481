use std::sync::Arc;

use lesson_core::curriculum::Curriculum;
use lesson_core::model::{Lesson, LessonId, Level, UserProgress};
use lesson_core::progression::{LessonFlow, LessonState, SubmitOutcome, is_level_locked};
use storage::repository::ProgressRepository;

use crate::error::ProgressServiceError;

/// Loads the learner's progress once at startup and hands out live sessions.
#[derive(Clone)]
pub struct ProgressService {
    repo: Arc<dyn ProgressRepository>,
    curriculum: Arc<Curriculum>,
}

impl ProgressService {
    #[must_use]
    pub fn new(repo: Arc<dyn ProgressRepository>, curriculum: Arc<Curriculum>) -> Self {
        Self { repo, curriculum }
    }

    /// Restore persisted progress and start a session.
    ///
    /// A missing, malformed, or unreadable slot falls back to default
    /// progress (lesson 1, nothing completed); the learner is never blocked
    /// by a persistence-read fault.
    pub async fn start(&self) -> LearnerSession {
        let progress = match self.repo.load().await {
            Ok(Some(progress)) => progress,
            Ok(None) => UserProgress::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to restore progress, starting fresh");
                UserProgress::new()
            }
        };
        LearnerSession {
            flow: LessonFlow::new(progress),
            repo: Arc::clone(&self.repo),
            curriculum: Arc::clone(&self.curriculum),
        }
    }
}

/// One learner's live session: the progression state machine plus write-back
/// persistence.
///
/// Every mutating call applies the in-memory transition first and then
/// overwrites the persisted slot. When a save fails the in-memory state
/// stays authoritative; the error is reported so callers can surface it,
/// but ignoring it is safe.
pub struct LearnerSession {
    flow: LessonFlow,
    repo: Arc<dyn ProgressRepository>,
    curriculum: Arc<Curriculum>,
}

impl LearnerSession {
    #[must_use]
    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    #[must_use]
    pub fn progress(&self) -> &UserProgress {
        self.flow.progress()
    }

    #[must_use]
    pub fn state(&self) -> LessonState {
        self.flow.state()
    }

    #[must_use]
    pub fn current_lesson(&self) -> &Lesson {
        self.flow.current_lesson(&self.curriculum)
    }

    #[must_use]
    pub fn is_level_locked(&self, level: Level) -> bool {
        is_level_locked(&self.curriculum, self.flow.progress(), level)
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.flow.can_advance()
    }

    /// Judge a submission; a correct answer records and persists the
    /// completion.
    ///
    /// `None` means the submission was refused (empty, or the lesson was
    /// already answered this visit).
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if the write-back fails. The judgement
    /// and in-memory completion still stand.
    pub async fn submit_answer(
        &mut self,
        submission: &str,
    ) -> Result<Option<SubmitOutcome>, ProgressServiceError> {
        let outcome = self.flow.submit(&self.curriculum, submission);
        if let Some(outcome) = outcome
            && outcome.progress_changed
        {
            self.persist().await?;
        }
        Ok(outcome)
    }

    /// Move to the next lesson after a correct answer and persist the pointer.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if the write-back fails; the in-memory
    /// pointer keeps its new value.
    pub async fn advance(&mut self) -> Result<bool, ProgressServiceError> {
        if self.flow.advance() {
            self.persist().await?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Jump to a lesson picked from the catalog and persist the pointer.
    ///
    /// Locked targets are refused; out-of-range ids clamp to lesson 1.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if the write-back fails; the in-memory
    /// pointer keeps its new value.
    pub async fn select_lesson(&mut self, id: LessonId) -> Result<bool, ProgressServiceError> {
        if self.flow.select_lesson(&self.curriculum, id) {
            self.persist().await?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Clear an incorrect verdict so the learner can try again.
    pub fn retry(&mut self) {
        self.flow.retry();
    }

    async fn persist(&self) -> Result<(), ProgressServiceError> {
        if let Err(err) = self.repo.save(self.flow.progress()).await {
            tracing::warn!(error = %err, "failed to persist progress");
            return Err(err.into());
        }
        Ok(())
    }
}
