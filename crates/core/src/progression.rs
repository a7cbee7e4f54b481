//! The lesson-progression state machine.
//!
//! Pure functions over [`Curriculum`] and [`UserProgress`], plus the
//! [`LessonFlow`] reducer that drives one learner through the catalog. None
//! of the operations here can fail: out-of-range ids clamp to safe defaults
//! and duplicate completions are no-ops, so the learner is never blocked by
//! a bad input.

use crate::curriculum::Curriculum;
use crate::model::{Lesson, LessonId, Level, UserProgress};

//
// ─── ANSWER CHECKING ───────────────────────────────────────────────────────────
//

/// Verdict on a quiz submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerJudgement {
    Correct,
    Incorrect,
}

impl AnswerJudgement {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerJudgement::Correct)
    }
}

/// Canonical form used for answer comparison: trimmed, lowercased, with the
/// punctuation characters `.` `,` `!` removed.
#[must_use]
pub fn normalize_answer(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '!'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare a submission against the lesson's canonical answer.
///
/// Exact equality after normalization; no partial credit, no fuzzy matching.
#[must_use]
pub fn check_answer(lesson: &Lesson, submitted: &str) -> AnswerJudgement {
    if normalize_answer(submitted) == normalize_answer(lesson.quiz.answer()) {
        AnswerJudgement::Correct
    } else {
        AnswerJudgement::Incorrect
    }
}

//
// ─── LEVEL LOCKING ─────────────────────────────────────────────────────────────
//

/// Whether a level is gated off for the given progress.
///
/// The first level is never locked. Any other level L is locked iff the
/// lesson immediately before L's first lesson is not completed AND the
/// current pointer has not reached L. Navigating past the boundary unlocks
/// the level even without a recorded completion; once moved, the pointer is
/// authoritative.
#[must_use]
pub fn is_level_locked(curriculum: &Curriculum, progress: &UserProgress, level: Level) -> bool {
    if level.is_first() {
        return false;
    }
    let first_id = curriculum.first_id_of(level);
    let prior_completed = first_id
        .predecessor()
        .is_some_and(|prior| progress.is_completed(prior));
    !prior_completed && progress.current_lesson_id < first_id
}

//
// ─── LESSON FLOW ───────────────────────────────────────────────────────────────
//

/// Per-lesson interaction state: reset to `Idle` whenever the active lesson
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LessonState {
    #[default]
    Idle,
    Answered(AnswerJudgement),
}

/// Result of a submission accepted by [`LessonFlow::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub judgement: AnswerJudgement,
    /// True if the completed set changed and the caller should persist.
    pub progress_changed: bool,
}

/// Reducer-style state holder for one learner session.
///
/// Owns the mutable [`UserProgress`] plus the per-lesson submission state.
/// Callers hand in the catalog on each operation; the flow never stores it,
/// which keeps instances cheap to create in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonFlow {
    progress: UserProgress,
    state: LessonState,
}

impl LessonFlow {
    /// Start from restored (or default) progress, idle on the current lesson.
    #[must_use]
    pub fn new(progress: UserProgress) -> Self {
        Self {
            progress,
            state: LessonState::Idle,
        }
    }

    #[must_use]
    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    #[must_use]
    pub fn state(&self) -> LessonState {
        self.state
    }

    /// The lesson the learner is currently on.
    #[must_use]
    pub fn current_lesson<'a>(&self, curriculum: &'a Curriculum) -> &'a Lesson {
        curriculum.get(self.progress.current_lesson_id)
    }

    /// Whether the forward transition is currently offered: the answer was
    /// judged correct and the current lesson is not the terminal one.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.state == LessonState::Answered(AnswerJudgement::Correct)
            && self.progress.current_lesson_id < LessonId::LAST
    }

    /// Jump to a lesson picked from the catalog.
    ///
    /// Out-of-range ids clamp to the first lesson; a target inside a locked
    /// level is refused. Changing the active lesson resets the submission
    /// state to idle.
    ///
    /// Returns true if the pointer moved and the caller should persist.
    pub fn select_lesson(&mut self, curriculum: &Curriculum, id: LessonId) -> bool {
        let lesson = curriculum.get(id);
        let (target, level) = (lesson.id, lesson.level);
        if is_level_locked(curriculum, &self.progress, level) {
            return false;
        }
        self.state = LessonState::Idle;
        if target == self.progress.current_lesson_id {
            return false;
        }
        self.progress.current_lesson_id = target;
        true
    }

    /// Judge a submission for the current lesson.
    ///
    /// Returns `None` without leaving idle when the submission is empty after
    /// trimming, or when the lesson has already been answered this visit. A
    /// correct answer records the completion (idempotently).
    pub fn submit(&mut self, curriculum: &Curriculum, submission: &str) -> Option<SubmitOutcome> {
        if self.state != LessonState::Idle || submission.trim().is_empty() {
            return None;
        }
        let lesson = self.current_lesson(curriculum);
        let judgement = check_answer(lesson, submission);
        let progress_changed = match judgement {
            AnswerJudgement::Correct => self.progress.complete_lesson(lesson.id),
            AnswerJudgement::Incorrect => false,
        };
        self.state = LessonState::Answered(judgement);
        Some(SubmitOutcome {
            judgement,
            progress_changed,
        })
    }

    /// Clear an incorrect verdict so the learner can try again.
    pub fn retry(&mut self) {
        if self.state == LessonState::Answered(AnswerJudgement::Incorrect) {
            self.state = LessonState::Idle;
        }
    }

    /// Move to the next lesson after a correct answer.
    ///
    /// Only acts when [`LessonFlow::can_advance`] holds; lesson 100 is
    /// terminal and has no successor. Returns true if the pointer moved.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        let moved = self.progress.advance();
        if moved {
            self.state = LessonState::Idle;
        }
        moved
    }

    /// Take the progress record out of the flow, e.g. for a final save.
    #[must_use]
    pub fn into_progress(self) -> UserProgress {
        self.progress
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
