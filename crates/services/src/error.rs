//! Shared error types for the services crate.

use thiserror::Error;

use lesson_core::curriculum::CurriculumError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `TutorService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TutorError {
    #[error("tutor gateway is not configured")]
    Disabled,
    #[error("tutor gateway returned an empty response")]
    EmptyResponse,
    #[error("tutor gateway request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `ProgressService`.
///
/// The in-memory state machine itself never fails; this only surfaces
/// persistence faults, and the in-memory state stays authoritative when one
/// occurs.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Curriculum(#[from] CurriculumError),
}
