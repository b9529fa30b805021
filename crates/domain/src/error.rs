use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("photographer id must be positive, got {0}")]
    InvalidPhotographerId(i64),
    #[error("media id must be positive, got {0}")]
    InvalidMediaId(i64),
    #[error("likes must not be negative, got {0}")]
    NegativeLikes(i64),
    #[error("daily rate must not be negative, got {0}")]
    NegativePrice(i64),
    #[error("media row carries both an image and a video file")]
    ConflictingMediaSource,
    #[error("media row carries neither an image nor a video file")]
    MissingMediaSource,
    #[error("{0} must not be blank")]
    BlankContactField(&'static str),
    #[error("contact email is not valid: {0}")]
    InvalidContactEmail(String),
}
