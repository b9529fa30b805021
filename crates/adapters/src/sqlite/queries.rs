use chrono::NaiveDate;
use rusqlite::{params, Connection, Result};

#[derive(Debug, Clone)]
pub struct PhotographerRow {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub country: String,
    pub tagline: String,
    pub price: i64,
    pub portrait: String,
}

#[derive(Debug, Clone)]
pub struct MediaRow {
    pub id: i64,
    pub photographer_id: i64,
    pub title: String,
    pub image: Option<String>,
    pub video: Option<String>,
    pub likes: i64,
    pub date: NaiveDate,
}

pub fn upsert_photographer(conn: &Connection, row: &PhotographerRow) -> Result<()> {
    conn.execute(
        "INSERT INTO photographers (id, name, city, country, tagline, price, portrait)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(id) DO UPDATE SET
            name = excluded.name,
            city = excluded.city,
            country = excluded.country,
            tagline = excluded.tagline,
            price = excluded.price,
            portrait = excluded.portrait",
        params![
            row.id,
            row.name,
            row.city,
            row.country,
            row.tagline,
            row.price,
            row.portrait,
        ],
    )?;

    Ok(())
}

pub fn upsert_media(conn: &Connection, row: &MediaRow) -> Result<()> {
    // likes takes the larger of the stored and seeded counts so a re-seed can
    // never decrease an accumulated counter.
    conn.execute(
        "INSERT INTO media (id, photographer_id, title, image, video, likes, date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(id) DO UPDATE SET
            photographer_id = excluded.photographer_id,
            title = excluded.title,
            image = excluded.image,
            video = excluded.video,
            likes = MAX(media.likes, excluded.likes),
            date = excluded.date",
        params![
            row.id,
            row.photographer_id,
            row.title,
            row.image,
            row.video,
            row.likes,
            row.date,
        ],
    )?;

    Ok(())
}

pub fn list_photographers(conn: &Connection) -> Result<Vec<PhotographerRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, city, country, tagline, price, portrait
         FROM photographers
         ORDER BY id",
    )?;

    let rows = stmt.query_map([], photographer_from_row)?;
    rows.collect()
}

pub fn find_photographer(conn: &Connection, photographer_id: i64) -> Result<Option<PhotographerRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, city, country, tagline, price, portrait
         FROM photographers
         WHERE id = ?1",
    )?;

    let mut rows = stmt.query(params![photographer_id])?;
    match rows.next()? {
        Some(row) => Ok(Some(photographer_from_row(row)?)),
        None => Ok(None),
    }
}

pub fn list_media_for_photographer(conn: &Connection, photographer_id: i64) -> Result<Vec<MediaRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, photographer_id, title, image, video, likes, date
         FROM media
         WHERE photographer_id = ?1
         ORDER BY id",
    )?;

    let rows = stmt.query_map(params![photographer_id], media_from_row)?;
    rows.collect()
}

pub fn increment_likes(conn: &Connection, media_id: i64) -> Result<usize> {
    conn.execute(
        "UPDATE media SET likes = likes + 1 WHERE id = ?1",
        params![media_id],
    )
}

pub fn insert_contact_message(
    conn: &Connection,
    photographer_id: i64,
    first_name: &str,
    last_name: &str,
    email: &str,
    message: &str,
    received_at: &str,
) -> Result<()> {
    conn.execute(
        "INSERT INTO contact_messages
         (photographer_id, first_name, last_name, email, message, received_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![photographer_id, first_name, last_name, email, message, received_at],
    )?;

    Ok(())
}

fn photographer_from_row(row: &rusqlite::Row<'_>) -> Result<PhotographerRow> {
    Ok(PhotographerRow {
        id: row.get(0)?,
        name: row.get(1)?,
        city: row.get(2)?,
        country: row.get(3)?,
        tagline: row.get(4)?,
        price: row.get(5)?,
        portrait: row.get(6)?,
    })
}

fn media_from_row(row: &rusqlite::Row<'_>) -> Result<MediaRow> {
    Ok(MediaRow {
        id: row.get(0)?,
        photographer_id: row.get(1)?,
        title: row.get(2)?,
        image: row.get(3)?,
        video: row.get(4)?,
        likes: row.get(5)?,
        date: row.get(6)?,
    })
}
