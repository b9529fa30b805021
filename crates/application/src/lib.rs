mod error;
mod ports;
mod service;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{
    Clock, ContentInventory, ContentScanner, PortfolioRepository, SeedReport, SeedSource,
    StalenessNotifier, ThumbnailArtifact, ThumbnailGenerator,
};
pub use service::{LikeOutcome, PhotographerProfile, PortfolioService};
pub use use_cases::{
    BootstrapCommand, LikeMediaCommand, ListPhotographersQuery, PhotographerProfileQuery,
    SeedDataCommand, SubmitContactCommand,
};
