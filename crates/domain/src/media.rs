use chrono::NaiveDate;

use crate::{DomainError, MediaId, PhotographerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photographer {
    pub id: PhotographerId,
    pub name: String,
    pub city: String,
    pub country: String,
    pub tagline: String,
    pub price: i64,
    pub portrait: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    Image(String),
    Video(String),
}

impl MediaSource {
    // The store keeps two nullable columns; exactly one must be set.
    pub fn from_columns(
        image: Option<String>,
        video: Option<String>,
    ) -> Result<Self, DomainError> {
        match (image, video) {
            (Some(file), None) => Ok(Self::Image(file)),
            (None, Some(file)) => Ok(Self::Video(file)),
            (Some(_), Some(_)) => Err(DomainError::ConflictingMediaSource),
            (None, None) => Err(DomainError::MissingMediaSource),
        }
    }

    pub fn columns(&self) -> (Option<&str>, Option<&str>) {
        match self {
            Self::Image(file) => (Some(file), None),
            Self::Video(file) => (None, Some(file)),
        }
    }

    pub fn file(&self) -> &str {
        match self {
            Self::Image(file) | Self::Video(file) => file,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, Self::Video(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub id: MediaId,
    pub photographer_id: PhotographerId,
    pub title: String,
    pub date: NaiveDate,
    pub likes: i64,
    pub source: MediaSource,
}

pub fn total_likes(medias: &[MediaItem]) -> i64 {
    medias.iter().map(|media| media.likes).sum()
}
