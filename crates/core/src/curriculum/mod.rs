mod overrides;
mod syllabus;

use thiserror::Error;

use crate::model::{Lesson, LessonContent, LessonId, Level, Quiz};

pub use overrides::LessonOverride;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CurriculumError {
    /// The syllabus must sum to exactly 100 topics; a mismatch would silently
    /// drop or invent lessons, so the build fails instead.
    #[error("syllabus yields {actual} topics, expected exactly {expected}")]
    TopicCount { expected: usize, actual: usize },

    /// An override names a lesson id outside the generated catalog.
    #[error("override targets unknown lesson id {0}")]
    UnknownOverrideId(LessonId),
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// The static, immutable ordered catalog of 100 lessons.
///
/// Built once at startup; ids are contiguous from 1 and grouped by level in
/// the fixed order Basic, Intermediate, Advanced, Fluent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curriculum {
    lessons: Vec<Lesson>,
}

impl Curriculum {
    /// Build the catalog from the embedded syllabus and override tables.
    ///
    /// # Errors
    ///
    /// Returns `CurriculumError` if the syllabus does not yield exactly 100
    /// topics or an override references an id outside the catalog.
    pub fn build() -> Result<Self, CurriculumError> {
        Self::build_from_table(&syllabus::SYLLABUS, &overrides::override_table())
    }

    /// Build from an explicit syllabus and override table.
    ///
    /// Exposed so tests can exercise the count check and merge semantics
    /// without touching the embedded tables.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Curriculum::build`].
    pub fn build_from_table(
        syllabus: &[(Level, &[&str])],
        overrides: &[(LessonId, LessonOverride)],
    ) -> Result<Self, CurriculumError> {
        let total: usize = syllabus.iter().map(|(_, topics)| topics.len()).sum();
        let expected = LessonId::LAST.value() as usize;
        if total != expected {
            return Err(CurriculumError::TopicCount {
                expected,
                actual: total,
            });
        }

        let mut lessons = Vec::with_capacity(expected);
        let mut next_id = LessonId::FIRST.value();
        for (level, topics) in syllabus {
            for topic in *topics {
                lessons.push(generate_lesson(LessonId::new(next_id), *level, topic));
                next_id += 1;
            }
        }

        for (id, patch) in overrides {
            let Some(index) = id.value().checked_sub(1).map(|i| i as usize) else {
                return Err(CurriculumError::UnknownOverrideId(*id));
            };
            let lesson = lessons
                .get_mut(index)
                .ok_or(CurriculumError::UnknownOverrideId(*id))?;
            patch.apply(lesson);
        }

        Ok(Self { lessons })
    }

    /// All lessons in catalog order.
    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Look up a lesson by id.
    ///
    /// Out-of-range ids resolve to the first lesson so a stale or corrupted
    /// pointer can never leave the learner without a lesson on screen.
    #[must_use]
    pub fn get(&self, id: LessonId) -> &Lesson {
        id.value()
            .checked_sub(1)
            .and_then(|index| self.lessons.get(index as usize))
            .unwrap_or(&self.lessons[0])
    }

    /// The id of the first lesson of a level.
    #[must_use]
    pub fn first_id_of(&self, level: Level) -> LessonId {
        self.lessons
            .iter()
            .find(|lesson| lesson.level == level)
            .map_or(LessonId::FIRST, |lesson| lesson.id)
    }

    /// All lessons belonging to one level, in catalog order.
    #[must_use]
    pub fn lessons_in(&self, level: Level) -> Vec<&Lesson> {
        self.lessons
            .iter()
            .filter(|lesson| lesson.level == level)
            .collect()
    }
}

/// Deterministic content template for a generated lesson.
///
/// Native and target sentences interpolate the level and topic; the quiz is
/// the same placeholder triple for every generated lesson until an override
/// replaces it.
fn generate_lesson(id: LessonId, level: Level, topic: &str) -> Lesson {
    Lesson {
        id,
        level,
        title: format!("Lesson {id}: {topic}"),
        topic: topic.to_string(),
        content: LessonContent::new(
            format!(
                "Nesta aula de nível {level}, vamos focar em: {topic}. \
                 É essencial para sua fluência."
            ),
            format!(
                "In this {level} level lesson, we will focus on: {topic}. \
                 This is essential for your fluency."
            ),
            Some("Memorize the pattern and try to use it in your own sentences.".to_string()),
        ),
        quiz: Quiz::multiple_choice(
            format!("Translate related to {topic}: \"Eu estou aprendendo.\""),
            "I am learning",
            vec![
                "I am learn".into(),
                "I am learning".into(),
                "I learning".into(),
                "I do learn".into(),
            ],
        ),
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_exactly_one_hundred_contiguous_lessons() {
        let curriculum = Curriculum::build().unwrap();
        assert_eq!(curriculum.len(), 100);
        for (index, lesson) in curriculum.lessons().iter().enumerate() {
            assert_eq!(lesson.id.value() as usize, index + 1);
        }
    }

    #[test]
    fn levels_partition_the_catalog_in_order() {
        let curriculum = Curriculum::build().unwrap();

        let mut boundary = 1;
        for level in Level::ALL {
            let ids: Vec<u32> = curriculum
                .lessons_in(level)
                .iter()
                .map(|lesson| lesson.id.value())
                .collect();
            assert!(!ids.is_empty());
            assert_eq!(ids[0], boundary, "level {level} must start at {boundary}");
            for pair in ids.windows(2) {
                assert_eq!(pair[1], pair[0] + 1);
            }
            boundary = ids.last().unwrap() + 1;
        }
        assert_eq!(boundary, 101);
    }

    #[test]
    fn level_boundaries_match_syllabus_shares() {
        let curriculum = Curriculum::build().unwrap();
        assert_eq!(curriculum.first_id_of(Level::Basic), LessonId::new(1));
        assert_eq!(
            curriculum.first_id_of(Level::Intermediate),
            LessonId::new(31)
        );
        assert_eq!(curriculum.first_id_of(Level::Advanced), LessonId::new(61));
        assert_eq!(curriculum.first_id_of(Level::Fluent), LessonId::new(86));
    }

    #[test]
    fn build_fails_loudly_on_wrong_topic_count() {
        let short: [(Level, &[&str]); 1] = [(Level::Basic, &["Only topic"])];
        let err = Curriculum::build_from_table(&short, &[]).unwrap_err();
        assert_eq!(
            err,
            CurriculumError::TopicCount {
                expected: 100,
                actual: 1
            }
        );
    }

    #[test]
    fn override_is_shallow_and_touches_only_its_lesson() {
        let plain = Curriculum::build_from_table(&syllabus::SYLLABUS, &[]).unwrap();
        let patched = Curriculum::build().unwrap();

        // Lesson 2's content and quiz come from the override, title/topic
        // from generation.
        let lesson2 = patched.get(LessonId::new(2));
        assert_eq!(lesson2.quiz.answer(), "Good morning");
        assert_eq!(lesson2.title, plain.get(LessonId::new(2)).title);
        assert_eq!(lesson2.topic, "Cumprimentos (Greetings)");
        assert!(lesson2.content.grammar_note.is_none());

        // Untouched lessons are identical to the raw generation.
        for id in 4..=100 {
            let id = LessonId::new(id);
            assert_eq!(patched.get(id), plain.get(id));
        }
    }

    #[test]
    fn title_only_override_leaves_content_and_quiz_generated() {
        let patch = LessonOverride {
            title: Some("Lesson 10: renamed".to_string()),
            content: None,
            quiz: None,
        };
        let plain = Curriculum::build_from_table(&syllabus::SYLLABUS, &[]).unwrap();
        let patched =
            Curriculum::build_from_table(&syllabus::SYLLABUS, &[(LessonId::new(10), patch)])
                .unwrap();

        let lesson = patched.get(LessonId::new(10));
        assert_eq!(lesson.title, "Lesson 10: renamed");
        assert_eq!(lesson.content, plain.get(LessonId::new(10)).content);
        assert_eq!(lesson.quiz, plain.get(LessonId::new(10)).quiz);
    }

    #[test]
    fn override_with_unknown_id_is_rejected() {
        let err = Curriculum::build_from_table(
            &syllabus::SYLLABUS,
            &[(LessonId::new(101), LessonOverride::default())],
        )
        .unwrap_err();
        assert_eq!(err, CurriculumError::UnknownOverrideId(LessonId::new(101)));
    }

    #[test]
    fn get_clamps_out_of_range_ids_to_first_lesson() {
        let curriculum = Curriculum::build().unwrap();
        assert_eq!(curriculum.get(LessonId::new(0)).id, LessonId::FIRST);
        assert_eq!(curriculum.get(LessonId::new(101)).id, LessonId::FIRST);
        assert_eq!(curriculum.get(LessonId::new(55)).id, LessonId::new(55));
    }
}
