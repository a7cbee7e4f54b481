use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::ids::LessonId;

//
// ─── LEVELS ────────────────────────────────────────────────────────────────────
//

/// One of the four ordered proficiency tiers partitioning the curriculum.
///
/// Levels partition the lesson id range contiguously in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Basic,
    Intermediate,
    Advanced,
    Fluent,
}

impl Level {
    /// All levels in curriculum order.
    pub const ALL: [Level; 4] = [
        Level::Basic,
        Level::Intermediate,
        Level::Advanced,
        Level::Fluent,
    ];

    /// Returns true for the entry level, which is never locked.
    #[must_use]
    pub fn is_first(&self) -> bool {
        *self == Level::Basic
    }

    /// Human-readable level name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Level::Basic => "Basic",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
            Level::Fluent => "Fluent",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for parsing a level from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError;

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown level name")
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Basic" => Ok(Level::Basic),
            "Intermediate" => Ok(Level::Intermediate),
            "Advanced" => Ok(Level::Advanced),
            "Fluent" => Ok(Level::Fluent),
            _ => Err(ParseLevelError),
        }
    }
}

//
// ─── LESSON CONTENT ────────────────────────────────────────────────────────────
//

/// Explanatory body of a lesson.
///
/// `native` is the learner's own language (Portuguese), `target` the language
/// being learned (English).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonContent {
    pub native: String,
    pub target: String,
    pub grammar_note: Option<String>,
}

impl LessonContent {
    #[must_use]
    pub fn new(
        native: impl Into<String>,
        target: impl Into<String>,
        grammar_note: Option<String>,
    ) -> Self {
        Self {
            native: native.into(),
            target: target.into(),
            grammar_note,
        }
    }
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// A lesson's single quiz question.
///
/// The two input modes are explicit variants so callers must handle both:
/// multiple choice renders a fixed option set, free text accepts any typed
/// submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quiz {
    MultipleChoice {
        question: String,
        answer: String,
        options: Vec<String>,
    },
    FreeText {
        question: String,
        answer: String,
    },
}

impl Quiz {
    #[must_use]
    pub fn multiple_choice(
        question: impl Into<String>,
        answer: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Quiz::MultipleChoice {
            question: question.into(),
            answer: answer.into(),
            options,
        }
    }

    #[must_use]
    pub fn free_text(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Quiz::FreeText {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// The question shown to the learner.
    #[must_use]
    pub fn question(&self) -> &str {
        match self {
            Quiz::MultipleChoice { question, .. } | Quiz::FreeText { question, .. } => question,
        }
    }

    /// The canonical correct answer.
    #[must_use]
    pub fn answer(&self) -> &str {
        match self {
            Quiz::MultipleChoice { answer, .. } | Quiz::FreeText { answer, .. } => answer,
        }
    }

    /// The option set, or `None` for free-text quizzes.
    #[must_use]
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Quiz::MultipleChoice { options, .. } => Some(options),
            Quiz::FreeText { .. } => None,
        }
    }
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// One unit of curriculum content, created once at catalog-build time and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub level: Level,
    pub title: String,
    pub topic: String,
    pub content: LessonContent,
    pub quiz: Quiz,
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_order_is_fixed() {
        assert_eq!(
            Level::ALL,
            [
                Level::Basic,
                Level::Intermediate,
                Level::Advanced,
                Level::Fluent
            ]
        );
        assert!(Level::Basic < Level::Intermediate);
        assert!(Level::Advanced < Level::Fluent);
    }

    #[test]
    fn only_basic_is_first() {
        assert!(Level::Basic.is_first());
        assert!(!Level::Intermediate.is_first());
        assert!(!Level::Advanced.is_first());
        assert!(!Level::Fluent.is_first());
    }

    #[test]
    fn level_display_roundtrip() {
        for level in Level::ALL {
            let parsed: Level = level.to_string().parse().unwrap();
            assert_eq!(parsed, level);
        }
        assert!("Beginner".parse::<Level>().is_err());
    }

    #[test]
    fn quiz_accessors_cover_both_modes() {
        let mc = Quiz::multiple_choice("Q?", "A", vec!["A".into(), "B".into()]);
        assert_eq!(mc.question(), "Q?");
        assert_eq!(mc.answer(), "A");
        assert_eq!(mc.options().map(<[String]>::len), Some(2));

        let ft = Quiz::free_text("Translate: Bom dia", "Good morning");
        assert_eq!(ft.answer(), "Good morning");
        assert!(ft.options().is_none());
    }
}
