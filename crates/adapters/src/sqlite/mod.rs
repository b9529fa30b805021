mod queries;

use std::fs;
use std::path::PathBuf;

use folio_application::{ApplicationError, PortfolioRepository};
use folio_domain::{
    ContactMessage, MediaId, MediaItem, MediaSource, Photographer, PhotographerId,
};
use rusqlite::Connection;

use crate::migrations::MIGRATIONS;
use queries::{MediaRow, PhotographerRow};

#[derive(Debug, Clone)]
pub struct SqlitePortfolioRepository {
    path: PathBuf,
}

impl SqlitePortfolioRepository {
    pub fn new(path: String) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    fn open_connection(&self) -> Result<Connection, ApplicationError> {
        Connection::open(&self.path)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}

impl PortfolioRepository for SqlitePortfolioRepository {
    fn initialize(&self) -> Result<(), ApplicationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "database path must not be empty".to_string(),
            ));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|error| ApplicationError::Io(error.to_string()))?;
            }
        }

        let conn = self.open_connection()?;
        conn.execute_batch("PRAGMA foreign_keys=ON; PRAGMA journal_mode=WAL;")
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;

        for migration in MIGRATIONS {
            conn.execute_batch(migration)
                .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        }

        Ok(())
    }

    fn upsert_photographer(&self, photographer: &Photographer) -> Result<(), ApplicationError> {
        let conn = self.open_connection()?;
        queries::upsert_photographer(&conn, &photographer_to_row(photographer))
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }

    fn upsert_media(&self, media: &MediaItem) -> Result<(), ApplicationError> {
        let conn = self.open_connection()?;
        queries::upsert_media(&conn, &media_to_row(media))
            .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }

    fn list_photographers(&self) -> Result<Vec<Photographer>, ApplicationError> {
        let conn = self.open_connection()?;
        let rows = queries::list_photographers(&conn)
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        rows.into_iter().map(photographer_from_row).collect()
    }

    fn find_photographer(
        &self,
        photographer_id: PhotographerId,
    ) -> Result<Option<Photographer>, ApplicationError> {
        let conn = self.open_connection()?;
        let row = queries::find_photographer(&conn, photographer_id.get())
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        row.map(photographer_from_row).transpose()
    }

    fn list_media_for_photographer(
        &self,
        photographer_id: PhotographerId,
    ) -> Result<Vec<MediaItem>, ApplicationError> {
        let conn = self.open_connection()?;
        let rows = queries::list_media_for_photographer(&conn, photographer_id.get())
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;
        rows.into_iter().map(media_from_row).collect()
    }

    fn increment_likes(&self, media_id: MediaId) -> Result<(), ApplicationError> {
        let conn = self.open_connection()?;
        let updated = queries::increment_likes(&conn, media_id.get())
            .map_err(|error| ApplicationError::Persistence(error.to_string()))?;

        if updated == 0 {
            return Err(ApplicationError::NotFound(format!(
                "media not found for id={}",
                media_id.get()
            )));
        }

        Ok(())
    }

    fn insert_contact_message(
        &self,
        photographer_id: PhotographerId,
        message: &ContactMessage,
        received_at: &str,
    ) -> Result<(), ApplicationError> {
        let conn = self.open_connection()?;
        queries::insert_contact_message(
            &conn,
            photographer_id.get(),
            &message.first_name,
            &message.last_name,
            &message.email,
            &message.message,
            received_at,
        )
        .map_err(|error| ApplicationError::Persistence(error.to_string()))
    }
}

fn photographer_to_row(photographer: &Photographer) -> PhotographerRow {
    PhotographerRow {
        id: photographer.id.get(),
        name: photographer.name.clone(),
        city: photographer.city.clone(),
        country: photographer.country.clone(),
        tagline: photographer.tagline.clone(),
        price: photographer.price,
        portrait: photographer.portrait.clone(),
    }
}

fn photographer_from_row(row: PhotographerRow) -> Result<Photographer, ApplicationError> {
    Ok(Photographer {
        id: PhotographerId::new(row.id)?,
        name: row.name,
        city: row.city,
        country: row.country,
        tagline: row.tagline,
        price: row.price,
        portrait: row.portrait,
    })
}

fn media_to_row(media: &MediaItem) -> MediaRow {
    let (image, video) = media.source.columns();
    MediaRow {
        id: media.id.get(),
        photographer_id: media.photographer_id.get(),
        title: media.title.clone(),
        image: image.map(str::to_string),
        video: video.map(str::to_string),
        likes: media.likes,
        date: media.date,
    }
}

fn media_from_row(row: MediaRow) -> Result<MediaItem, ApplicationError> {
    Ok(MediaItem {
        id: MediaId::new(row.id)?,
        photographer_id: PhotographerId::new(row.photographer_id)?,
        title: row.title,
        date: row.date,
        likes: row.likes,
        source: MediaSource::from_columns(row.image, row.video)?,
    })
}
