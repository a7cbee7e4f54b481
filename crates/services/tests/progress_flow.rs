use std::sync::Arc;

use lesson_core::curriculum::Curriculum;
use lesson_core::model::{LessonId, Level};
use lesson_core::progression::AnswerJudgement;
use services::ProgressService;
use storage::repository::{InMemoryRepository, ProgressRepository};

fn service(repo: &InMemoryRepository) -> ProgressService {
    let curriculum = Arc::new(Curriculum::build().unwrap());
    ProgressService::new(Arc::new(repo.clone()), curriculum)
}

#[tokio::test]
async fn fresh_start_begins_at_lesson_one_with_locked_levels() {
    let repo = InMemoryRepository::new();
    let session = service(&repo).start().await;

    assert_eq!(session.progress().current_lesson_id, LessonId::FIRST);
    assert!(!session.is_level_locked(Level::Basic));
    assert!(session.is_level_locked(Level::Intermediate));
    assert!(session.is_level_locked(Level::Advanced));
    assert!(session.is_level_locked(Level::Fluent));
}

#[tokio::test]
async fn correct_answer_is_persisted_immediately() {
    let repo = InMemoryRepository::new();
    let mut session = service(&repo).start().await;

    session.select_lesson(LessonId::new(2)).await.unwrap();
    assert_eq!(session.current_lesson().topic, "Cumprimentos (Greetings)");

    let outcome = session.submit_answer("good morning").await.unwrap().unwrap();
    assert_eq!(outcome.judgement, AnswerJudgement::Correct);

    let stored = repo.load().await.unwrap().expect("slot written");
    assert!(stored.is_completed(LessonId::new(2)));
}

#[tokio::test]
async fn advance_moves_the_pointer_and_persists_it() {
    let repo = InMemoryRepository::new();
    let mut session = service(&repo).start().await;

    session.submit_answer("D").await.unwrap().unwrap();
    assert!(session.can_advance());
    assert!(session.advance().await.unwrap());

    assert_eq!(session.progress().current_lesson_id, LessonId::new(2));
    let stored = repo.load().await.unwrap().expect("slot written");
    assert_eq!(stored.current_lesson_id, LessonId::new(2));
}

#[tokio::test]
async fn empty_submission_is_refused_without_a_write() {
    let repo = InMemoryRepository::new();
    let mut session = service(&repo).start().await;

    assert!(session.submit_answer("   ").await.unwrap().is_none());
    assert!(repo.load().await.unwrap().is_none());
}

#[tokio::test]
async fn incorrect_answer_leaves_the_slot_untouched() {
    let repo = InMemoryRepository::new();
    let mut session = service(&repo).start().await;

    let outcome = session.submit_answer("wrong").await.unwrap().unwrap();
    assert_eq!(outcome.judgement, AnswerJudgement::Incorrect);
    assert!(repo.load().await.unwrap().is_none());

    session.retry();
    let outcome = session.submit_answer("D").await.unwrap().unwrap();
    assert_eq!(outcome.judgement, AnswerJudgement::Correct);
}

#[tokio::test]
async fn session_resumes_from_persisted_progress() {
    let repo = InMemoryRepository::new();
    {
        let mut session = service(&repo).start().await;
        session.submit_answer("D").await.unwrap().unwrap();
        session.advance().await.unwrap();
    }

    let resumed = service(&repo).start().await;
    assert_eq!(resumed.progress().current_lesson_id, LessonId::new(2));
    assert!(resumed.progress().is_completed(LessonId::new(1)));
}

#[tokio::test]
async fn completing_lesson_thirty_unlocks_intermediate() {
    let repo = InMemoryRepository::new();
    let mut session = service(&repo).start().await;

    // Work the pointer up to lesson 30 by answering each generated quiz.
    for _ in 1..30 {
        let answer = session.current_lesson().quiz.answer().to_string();
        session.submit_answer(&answer).await.unwrap().unwrap();
        session.advance().await.unwrap();
    }
    assert_eq!(session.progress().current_lesson_id, LessonId::new(30));
    assert!(session.is_level_locked(Level::Intermediate));

    let answer = session.current_lesson().quiz.answer().to_string();
    session.submit_answer(&answer).await.unwrap().unwrap();
    assert!(!session.is_level_locked(Level::Intermediate));
    assert!(session.select_lesson(LessonId::new(31)).await.unwrap());
}

#[tokio::test]
async fn selecting_a_locked_lesson_is_refused_and_not_persisted() {
    let repo = InMemoryRepository::new();
    let mut session = service(&repo).start().await;

    assert!(!session.select_lesson(LessonId::new(61)).await.unwrap());
    assert_eq!(session.progress().current_lesson_id, LessonId::FIRST);
    assert!(repo.load().await.unwrap().is_none());
}
