#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod progress_service;
pub mod tutor_service;

pub use app_services::AppServices;
pub use error::{AppServicesError, ProgressServiceError, TutorError};
pub use progress_service::{LearnerSession, ProgressService};
pub use tutor_service::{
    CONFIG_MISSING_MESSAGE, SERVICE_FAILURE_MESSAGE, TutorConfig, TutorService,
};
