use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid trainee_id: {0:?}")]
    InvalidIdentifier(String),

    #[error("Trainee not found: {0}")]
    TraineeNotFound(String),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Failed to load {file}: {reason}")]
    StartupLoad { file: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn startup_load(file: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Error::StartupLoad {
            file: file.into(),
            reason: reason.to_string(),
        }
    }

    /// True for lookups that found no row
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::TraineeNotFound(_) | Error::CourseNotFound(_))
    }
}
