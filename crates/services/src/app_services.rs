use std::sync::Arc;

use lesson_core::curriculum::Curriculum;
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::progress_service::ProgressService;
use crate::tutor_service::TutorService;

/// Assembles the app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    progress: Arc<ProgressService>,
    tutor: Arc<TutorService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage, with the tutor gateway
    /// configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or the catalog
    /// build fails.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::assemble(storage, TutorService::from_env())
    }

    /// Build services over in-memory storage, for tests and prototyping.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the catalog build fails.
    pub fn new_in_memory(tutor: TutorService) -> Result<Self, AppServicesError> {
        Self::assemble(Storage::in_memory(), tutor)
    }

    fn assemble(storage: Storage, tutor: TutorService) -> Result<Self, AppServicesError> {
        let curriculum = Arc::new(Curriculum::build()?);
        let progress = Arc::new(ProgressService::new(storage.progress, curriculum));
        Ok(Self {
            progress,
            tutor: Arc::new(tutor),
        })
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressService {
        &self.progress
    }

    #[must_use]
    pub fn tutor(&self) -> &TutorService {
        &self.tutor
    }
}
