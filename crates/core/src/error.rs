use thiserror::Error;

use crate::curriculum::CurriculumError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Curriculum(#[from] CurriculumError),
}
