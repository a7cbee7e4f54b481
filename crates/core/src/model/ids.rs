use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a Lesson.
///
/// Lesson ids are 1-based and double as the curriculum ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonId(u32);

impl LessonId {
    /// The first lesson of the curriculum.
    pub const FIRST: LessonId = LessonId(1);

    /// The terminal lesson of the curriculum.
    pub const LAST: LessonId = LessonId(100);

    /// Creates a new `LessonId`
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns true if the id falls inside the catalog range 1..=100.
    #[must_use]
    pub fn in_catalog(&self) -> bool {
        *self >= Self::FIRST && *self <= Self::LAST
    }

    /// Returns the id of the lesson immediately before this one, if any.
    #[must_use]
    pub fn predecessor(&self) -> Option<LessonId> {
        (self.0 > 1).then(|| LessonId(self.0 - 1))
    }

    /// Returns the id of the next lesson, saturating at [`LessonId::LAST`].
    #[must_use]
    pub fn saturating_next(&self) -> LessonId {
        if *self >= Self::LAST {
            Self::LAST
        } else {
            LessonId(self.0 + 1)
        }
    }
}

impl fmt::Debug for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonId({})", self.0)
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing an id from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for LessonId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(LessonId::new)
            .map_err(|_| ParseIdError {
                kind: "LessonId".to_string(),
            })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
