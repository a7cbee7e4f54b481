#![forbid(unsafe_code)]

//! Domain core for the English-from-Zero curriculum: the static lesson
//! catalog, the learner progress record, and the progression state machine.
//! No I/O lives here; persistence and the tutor gateway are separate crates.

pub mod curriculum;
pub mod error;
pub mod model;
pub mod progression;

pub use curriculum::{Curriculum, CurriculumError, LessonOverride};
pub use error::Error;
pub use model::{Lesson, LessonContent, LessonId, Level, Quiz, UserProgress};
pub use progression::{
    AnswerJudgement, LessonFlow, LessonState, SubmitOutcome, check_answer, is_level_locked,
    normalize_answer,
};
