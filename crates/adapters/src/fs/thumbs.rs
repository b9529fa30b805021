use std::fs;
use std::path::Path;

use folio_application::{ApplicationError, ThumbnailArtifact, ThumbnailGenerator};
use folio_domain::MediaId;
use image::{ImageFormat, ImageReader};

// Gallery tiles render at 350x300; thumbnails are bounded to that box.
const THUMB_WIDTH: u32 = 350;
const THUMB_HEIGHT: u32 = 300;

pub fn thumbnail_path(cache_root: &str, media_id: MediaId) -> String {
    format!("{cache_root}/thumbs/{}.jpg", media_id.get())
}

#[derive(Debug, Default)]
pub struct FsThumbnailGenerator;

impl ThumbnailGenerator for FsThumbnailGenerator {
    fn ensure_thumbnail(
        &self,
        source_path: &Path,
        cache_root: &str,
        media_id: MediaId,
    ) -> Result<ThumbnailArtifact, ApplicationError> {
        let thumb_path = thumbnail_path(cache_root, media_id);
        let thumb_path = Path::new(&thumb_path);

        if thumb_path.exists() {
            let existing = decode(thumb_path)?;
            return Ok(ThumbnailArtifact {
                file_path: thumb_path.to_string_lossy().to_string(),
                width: existing.width(),
                height: existing.height(),
            });
        }

        let source = decode(source_path)?;
        let thumb = source.thumbnail(THUMB_WIDTH, THUMB_HEIGHT);

        if let Some(parent) = thumb_path.parent() {
            fs::create_dir_all(parent).map_err(|error| {
                ApplicationError::Io(format!("failed to create thumbnail directory: {error}"))
            })?;
        }
        thumb
            .save_with_format(thumb_path, ImageFormat::Jpeg)
            .map_err(|error| {
                ApplicationError::Io(format!(
                    "failed to write thumbnail {}: {error}",
                    thumb_path.display()
                ))
            })?;

        Ok(ThumbnailArtifact {
            file_path: thumb_path.to_string_lossy().to_string(),
            width: thumb.width(),
            height: thumb.height(),
        })
    }
}

fn decode(path: &Path) -> Result<image::DynamicImage, ApplicationError> {
    ImageReader::open(path)
        .map_err(|error| {
            ApplicationError::Io(format!("failed to open image {}: {error}", path.display()))
        })?
        .with_guessed_format()
        .map_err(|error| {
            ApplicationError::Decode(format!(
                "failed to detect image format {}: {error}",
                path.display()
            ))
        })?
        .decode()
        .map_err(|error| {
            ApplicationError::Decode(format!(
                "failed to decode image {}: {error}",
                path.display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use image::{ImageBuffer, Rgb};
    use tempfile::TempDir;

    use super::*;

    fn write_test_jpeg(path: &Path, width: u32, height: u32) {
        let img = ImageBuffer::from_fn(width, height, |_x, _y| Rgb([120_u8, 40_u8, 200_u8]));
        img.save(path).expect("jpeg should be written");
    }

    #[test]
    fn thumbnail_is_generated_within_the_tile_bounds() {
        let dir = TempDir::new().expect("tempdir");
        let source = dir.path().join("aube.jpg");
        write_test_jpeg(&source, 1400, 900);
        let cache_root = dir.path().join("cache").to_string_lossy().to_string();

        let artifact = FsThumbnailGenerator
            .ensure_thumbnail(&source, &cache_root, MediaId::new(7).expect("id"))
            .expect("thumbnail should be generated");

        assert!(Path::new(&artifact.file_path).exists());
        assert!(artifact.width <= THUMB_WIDTH);
        assert!(artifact.height <= THUMB_HEIGHT);
    }

    #[test]
    fn existing_thumbnail_is_reused() {
        let dir = TempDir::new().expect("tempdir");
        let source = dir.path().join("aube.jpg");
        write_test_jpeg(&source, 640, 360);
        let cache_root = dir.path().join("cache").to_string_lossy().to_string();
        let media_id = MediaId::new(7).expect("id");

        let first = FsThumbnailGenerator
            .ensure_thumbnail(&source, &cache_root, media_id)
            .expect("first call");
        let second = FsThumbnailGenerator
            .ensure_thumbnail(&source, &cache_root, media_id)
            .expect("second call");

        assert_eq!(first.file_path, second.file_path);
        assert_eq!(first.width, second.width);
    }

    #[test]
    fn missing_source_is_an_io_error() {
        let dir = TempDir::new().expect("tempdir");
        let cache_root = dir.path().to_string_lossy().to_string();

        let result = FsThumbnailGenerator.ensure_thumbnail(
            Path::new("/nonexistent/aube.jpg"),
            &cache_root,
            MediaId::new(7).expect("id"),
        );
        assert!(matches!(result, Err(ApplicationError::Io(_))));
    }
}
