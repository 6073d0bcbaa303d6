use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobDeckError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Failed to fetch job data")]
    FailedFetch,

    #[error("JobDeckError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for JobDeckError {
    fn from(error: std::io::Error) -> Self {
        JobDeckError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for JobDeckError {
    fn from(error: reqwest::Error) -> Self {
        JobDeckError::Reqwest(Box::new(error))
    }
}
