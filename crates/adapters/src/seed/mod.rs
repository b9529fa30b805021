use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use folio_application::{ApplicationError, SeedSource};
use folio_domain::{DomainError, MediaId, MediaItem, MediaSource, Photographer, PhotographerId};
use serde::Deserialize;

/// Reads the camelCase JSON seed files and maps them into validated domain
/// entities.
#[derive(Debug, Default)]
pub struct JsonSeedSource;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedPhotographer {
    id: i64,
    name: String,
    city: String,
    country: String,
    tagline: String,
    price: i64,
    portrait: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedMedia {
    id: i64,
    photographer_id: i64,
    title: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    video: Option<String>,
    likes: i64,
    date: String,
}

impl SeedSource for JsonSeedSource {
    fn load_photographers(&self, path: &Path) -> Result<Vec<Photographer>, ApplicationError> {
        let raw = fs::read_to_string(path).map_err(|error| {
            ApplicationError::Io(format!("failed to read {}: {error}", path.display()))
        })?;
        let entries: Vec<SeedPhotographer> = serde_json::from_str(&raw)
            .map_err(|error| ApplicationError::Decode(error.to_string()))?;

        entries.into_iter().map(photographer_from_seed).collect()
    }

    fn load_media(&self, path: &Path) -> Result<Vec<MediaItem>, ApplicationError> {
        let raw = fs::read_to_string(path).map_err(|error| {
            ApplicationError::Io(format!("failed to read {}: {error}", path.display()))
        })?;
        let entries: Vec<SeedMedia> = serde_json::from_str(&raw)
            .map_err(|error| ApplicationError::Decode(error.to_string()))?;

        entries.into_iter().map(media_from_seed).collect()
    }
}

fn photographer_from_seed(entry: SeedPhotographer) -> Result<Photographer, ApplicationError> {
    if entry.price < 0 {
        return Err(DomainError::NegativePrice(entry.price).into());
    }

    Ok(Photographer {
        id: PhotographerId::new(entry.id)?,
        name: entry.name,
        city: entry.city,
        country: entry.country,
        tagline: entry.tagline,
        price: entry.price,
        portrait: entry.portrait,
    })
}

fn media_from_seed(entry: SeedMedia) -> Result<MediaItem, ApplicationError> {
    if entry.likes < 0 {
        return Err(DomainError::NegativeLikes(entry.likes).into());
    }

    let date = NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d").map_err(|error| {
        ApplicationError::Decode(format!("invalid media date {:?}: {error}", entry.date))
    })?;

    Ok(MediaItem {
        id: MediaId::new(entry.id)?,
        photographer_id: PhotographerId::new(entry.photographer_id)?,
        title: entry.title,
        date,
        likes: entry.likes,
        source: MediaSource::from_columns(entry.image, entry.video)?,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).expect("seed file should be written");
        path
    }

    #[test]
    fn photographers_load_from_camel_case_json() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(
            &dir,
            "photographer.json",
            r#"[
                {"id": 243, "name": "Mia Dupont", "city": "Lyon", "country": "France",
                 "tagline": "La lumière avant tout", "price": 400, "portrait": "mia.jpg"}
            ]"#,
        );

        let photographers = JsonSeedSource
            .load_photographers(&path)
            .expect("load should work");
        assert_eq!(photographers.len(), 1);
        assert_eq!(photographers[0].id.get(), 243);
        assert_eq!(photographers[0].name, "Mia Dupont");
        assert_eq!(photographers[0].price, 400);
    }

    #[test]
    fn media_load_maps_image_and_video_entries() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(
            &dir,
            "media.json",
            r#"[
                {"id": 1, "photographerId": 243, "title": "Aube", "image": "aube.jpg",
                 "likes": 12, "date": "2011-12-08"},
                {"id": 2, "photographerId": 243, "title": "Clip", "video": "clip.mp4",
                 "likes": 3, "date": "2012-01-22"}
            ]"#,
        );

        let medias = JsonSeedSource.load_media(&path).expect("load should work");
        assert_eq!(medias.len(), 2);
        assert_eq!(medias[0].source, MediaSource::Image("aube.jpg".to_string()));
        assert_eq!(medias[1].source, MediaSource::Video("clip.mp4".to_string()));
        assert_eq!(
            medias[0].date,
            NaiveDate::from_ymd_opt(2011, 12, 8).expect("date")
        );
    }

    #[test]
    fn media_with_both_sources_is_rejected() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(
            &dir,
            "media.json",
            r#"[{"id": 1, "photographerId": 243, "title": "X", "image": "x.jpg",
                 "video": "x.mp4", "likes": 0, "date": "2011-12-08"}]"#,
        );

        let result = JsonSeedSource.load_media(&path);
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::ConflictingMediaSource))
        ));
    }

    #[test]
    fn negative_likes_are_rejected() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(
            &dir,
            "media.json",
            r#"[{"id": 1, "photographerId": 243, "title": "X", "image": "x.jpg",
                 "likes": -4, "date": "2011-12-08"}]"#,
        );

        let result = JsonSeedSource.load_media(&path);
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::NegativeLikes(-4)))
        ));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(&dir, "media.json", "{ not json");

        let result = JsonSeedSource.load_media(&path);
        assert!(matches!(result, Err(ApplicationError::Decode(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = JsonSeedSource.load_media(Path::new("/nonexistent/media.json"));
        assert!(matches!(result, Err(ApplicationError::Io(_))));
    }
}
