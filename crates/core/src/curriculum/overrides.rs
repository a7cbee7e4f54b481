use crate::model::{Lesson, LessonContent, LessonId, Quiz};

/// Sparse patch for one generated lesson.
///
/// Only the fields present in the patch replace the generated values; the
/// merge is shallow and field-level, so an override that supplies `content`
/// replaces the whole content block but leaves title, topic and quiz alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonOverride {
    pub title: Option<String>,
    pub content: Option<LessonContent>,
    pub quiz: Option<Quiz>,
}

impl LessonOverride {
    pub(crate) fn apply(&self, lesson: &mut Lesson) {
        if let Some(title) = &self.title {
            lesson.title = title.clone();
        }
        if let Some(content) = &self.content {
            lesson.content = content.clone();
        }
        if let Some(quiz) = &self.quiz {
            lesson.quiz = quiz.clone();
        }
    }
}

/// Hand-authored content for the earliest lessons; everything else keeps the
/// generated template.
pub(crate) fn override_table() -> Vec<(LessonId, LessonOverride)> {
    vec![
        (
            LessonId::new(1),
            LessonOverride {
                title: None,
                content: Some(LessonContent::new(
                    "O alfabeto e sons são a base. Em inglês, as vogais têm sons diferentes \
                     dependendo da palavra.",
                    "The alphabet and sounds are the foundation. In English, vowels have \
                     different sounds depending on the word.",
                    Some("A (ei), E (i), I (ai), O (ou), U (iu)".to_string()),
                )),
                quiz: Some(Quiz::multiple_choice(
                    "Which letter sounds like 'Di'?",
                    "D",
                    vec!["G".into(), "J".into(), "D".into(), "T".into()],
                )),
            },
        ),
        (
            LessonId::new(2),
            LessonOverride {
                title: None,
                content: Some(LessonContent::new(
                    "Cumprimentos são essenciais. 'Hello' é formal, 'Hi' é informal. \
                     'Good morning' usa-se até o meio-dia.",
                    "Greetings are essential. 'Hello' is formal, 'Hi' is informal. \
                     'Good morning' is used until noon.",
                    None,
                )),
                quiz: Some(Quiz::multiple_choice(
                    "Translate: Bom dia",
                    "Good morning",
                    vec![
                        "Good night".into(),
                        "Good afternoon".into(),
                        "Good morning".into(),
                        "Hello".into(),
                    ],
                )),
            },
        ),
        (
            LessonId::new(3),
            LessonOverride {
                title: None,
                content: Some(LessonContent::new(
                    "O Verbo To Be significa 'Ser' ou 'Estar'. I am (Eu sou/estou), \
                     You are (Você é/está).",
                    "The Verb To Be means 'Ser' or 'Estar'. I am, You are, He is.",
                    None,
                )),
                quiz: Some(Quiz::multiple_choice(
                    "Complete: She ___ happy.",
                    "is",
                    vec!["are".into(), "am".into(), "is".into(), "be".into()],
                )),
            },
        ),
    ]
}
