use std::collections::HashSet;
use std::path::Path;

use folio_domain::{ContactMessage, MediaId, MediaItem, Photographer, PhotographerId};

use crate::ApplicationError;

pub trait PortfolioRepository {
    fn initialize(&self) -> Result<(), ApplicationError>;

    fn upsert_photographer(&self, photographer: &Photographer) -> Result<(), ApplicationError>;

    fn upsert_media(&self, media: &MediaItem) -> Result<(), ApplicationError>;

    fn list_photographers(&self) -> Result<Vec<Photographer>, ApplicationError>;

    fn find_photographer(
        &self,
        photographer_id: PhotographerId,
    ) -> Result<Option<Photographer>, ApplicationError>;

    fn list_media_for_photographer(
        &self,
        photographer_id: PhotographerId,
    ) -> Result<Vec<MediaItem>, ApplicationError>;

    /// Server-authoritative relative increment, never an absolute write, so
    /// concurrent likers cannot overwrite each other.
    fn increment_likes(&self, media_id: MediaId) -> Result<(), ApplicationError>;

    fn insert_contact_message(
        &self,
        photographer_id: PhotographerId,
        message: &ContactMessage,
        received_at: &str,
    ) -> Result<(), ApplicationError>;
}

pub trait SeedSource {
    fn load_photographers(&self, path: &Path) -> Result<Vec<Photographer>, ApplicationError>;

    fn load_media(&self, path: &Path) -> Result<Vec<MediaItem>, ApplicationError>;
}

#[derive(Debug, Clone)]
pub struct ThumbnailArtifact {
    pub file_path: String,
    pub width: u32,
    pub height: u32,
}

pub trait ThumbnailGenerator {
    fn ensure_thumbnail(
        &self,
        source_path: &Path,
        cache_root: &str,
        media_id: MediaId,
    ) -> Result<ThumbnailArtifact, ApplicationError>;
}

#[derive(Debug, Clone, Default)]
pub struct ContentInventory {
    pub scanned_files: usize,
    pub files: HashSet<String>,
}

impl ContentInventory {
    pub fn contains(&self, file: &str) -> bool {
        self.files.contains(file)
    }
}

pub trait ContentScanner {
    fn scan_content(&self, content_dir: &str) -> Result<ContentInventory, ApplicationError>;
}

/// Raised once per successful like, scoped to one photographer; dependent
/// views refetch when they observe the signal.
pub trait StalenessNotifier {
    fn media_invalidated(&self, photographer_id: PhotographerId);
}

pub trait Clock {
    fn now_timestamp_string(&self) -> String;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub photographers: usize,
    pub media_items: usize,
    pub thumbnails: usize,
    pub missing_assets: usize,
}
