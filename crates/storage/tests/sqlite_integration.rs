use lesson_core::model::{LessonId, UserProgress};
use storage::repository::ProgressRepository;
use storage::sqlite::SqliteRepository;

fn sample_progress() -> UserProgress {
    let mut progress = UserProgress::from_persisted(LessonId::new(31), []);
    for id in 1..=30 {
        progress.complete_lesson(LessonId::new(id));
    }
    progress
}

#[tokio::test]
async fn sqlite_roundtrip_persists_the_slot() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert!(repo.load().await.unwrap().is_none());

    let progress = sample_progress();
    repo.save(&progress).await.unwrap();
    assert_eq!(repo.load().await.unwrap(), Some(progress));
}

#[tokio::test]
async fn sqlite_save_overwrites_last_write_wins() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_overwrite?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.save(&sample_progress()).await.unwrap();

    let mut later = UserProgress::from_persisted(LessonId::new(32), []);
    later.complete_lesson(LessonId::new(31));
    repo.save(&later).await.unwrap();

    assert_eq!(repo.load().await.unwrap(), Some(later));
}

#[tokio::test]
async fn sqlite_malformed_slot_reads_as_absent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_malformed?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    sqlx::query(
        "INSERT INTO user_progress (id, current_lesson_id, completed_lessons, updated_at)
         VALUES (1, 5, 'not json', '2024-01-01T00:00:00Z')",
    )
    .execute(repo.pool())
    .await
    .unwrap();

    assert!(repo.load().await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_migrate_is_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate_twice?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    repo.save(&sample_progress()).await.unwrap();
    assert!(repo.load().await.unwrap().is_some());
}
