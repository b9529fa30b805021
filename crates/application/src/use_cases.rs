use std::path::PathBuf;

use folio_domain::{ContactMessage, MediaId, PhotographerId, SortKey};

#[derive(Debug, Clone, Default)]
pub struct BootstrapCommand;

#[derive(Debug, Clone)]
pub struct SeedDataCommand {
    pub photographers_path: PathBuf,
    pub media_path: PathBuf,
    pub content_dir: String,
    pub cache_root: String,
}

#[derive(Debug, Clone, Default)]
pub struct ListPhotographersQuery;

#[derive(Debug, Clone, Copy)]
pub struct PhotographerProfileQuery {
    pub photographer_id: PhotographerId,
    /// `None` stands for an unrecognized external sort parameter and keeps
    /// the store order.
    pub sort: Option<SortKey>,
}

#[derive(Debug, Clone, Copy)]
pub struct LikeMediaCommand {
    pub media_id: MediaId,
    pub photographer_id: PhotographerId,
}

#[derive(Debug, Clone)]
pub struct SubmitContactCommand {
    pub photographer_id: PhotographerId,
    pub message: ContactMessage,
}
