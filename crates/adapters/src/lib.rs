pub mod fs;
pub mod migrations;
pub mod presenters;
pub mod seed;
pub mod sqlite;
mod staleness;

pub use fs::{thumbnail_path, FsThumbnailGenerator, SystemClock, WalkdirContentScanner};
pub use presenters::{
    present_like_outcome, present_media_row, present_photographer_row, present_seed_report,
};
pub use seed::JsonSeedSource;
pub use sqlite::SqlitePortfolioRepository;
pub use staleness::InMemoryStaleSet;
