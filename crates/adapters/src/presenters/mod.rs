use folio_application::{LikeOutcome, SeedReport};
use folio_domain::{MediaItem, Photographer};

pub fn present_photographer_row(photographer: &Photographer) -> String {
    format!(
        "{}\t{}\t{}, {}\t{}€/jour",
        photographer.id.get(),
        photographer.name,
        photographer.city,
        photographer.country,
        photographer.price
    )
}

pub fn present_media_row(media: &MediaItem) -> String {
    let kind = if media.source.is_video() { "VIDEO" } else { "IMAGE" };
    format!(
        "{}\t{}\t{}\t{} likes\t{}",
        media.id.get(),
        kind,
        media.date,
        media.likes,
        media.title
    )
}

pub fn present_seed_report(report: &SeedReport) -> String {
    format!(
        "seed finished: photographers={}, media={}, thumbnails={}, missing_assets={}",
        report.photographers, report.media_items, report.thumbnails, report.missing_assets
    )
}

pub fn present_like_outcome(outcome: &LikeOutcome) -> String {
    match outcome {
        LikeOutcome::Recorded => "like recorded".to_string(),
        LikeOutcome::Failed(reason) => format!("like failed: {reason}"),
    }
}
