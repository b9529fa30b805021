mod contact;
mod error;
mod gallery;
mod ids;
mod media;
mod sorting;

pub use contact::ContactMessage;
pub use error::DomainError;
pub use gallery::{Direction, GalleryNavigator};
pub use ids::{MediaId, PhotographerId};
pub use media::{total_likes, MediaItem, MediaSource, Photographer};
pub use sorting::{sort_media, SortKey};
