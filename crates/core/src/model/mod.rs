mod ids;
mod lesson;
mod progress;

pub use ids::{LessonId, ParseIdError};
pub use lesson::{Lesson, LessonContent, Level, ParseLevelError, Quiz};
pub use progress::UserProgress;
