mod clock;
mod content;
mod thumbs;

pub use clock::SystemClock;
pub use content::WalkdirContentScanner;
pub use thumbs::{thumbnail_path, FsThumbnailGenerator};
