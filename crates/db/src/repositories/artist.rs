use chrono::{DateTime, Utc};
use eyre::Result;
use showbill_core::models::artist::NewArtist;
use sqlx::{Pool, Postgres};

use crate::models::{DbArtist, DbArtistSummary, DbShowWithVenue};

pub async fn create_artist(pool: &Pool<Postgres>, artist: &NewArtist) -> Result<DbArtist> {
    tracing::debug!("Creating artist: name={}", artist.name);

    let mut tx = pool.begin().await?;

    let created = sqlx::query_as::<_, DbArtist>(
        r#"
        INSERT INTO artists (name, city, state, phone, image_link, facebook_link,
                             website, seeking_venue, seeking_description, genres)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id, name, city, state, phone, image_link, facebook_link,
                  website, seeking_venue, seeking_description, genres
        "#,
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(&artist.website)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .bind(&artist.genres)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!("Artist created successfully: id={}", created.id);
    Ok(created)
}

pub async fn get_artist_by_id(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbArtist>> {
    tracing::debug!("Getting artist by id: {}", id);

    let artist = sqlx::query_as::<_, DbArtist>(
        r#"
        SELECT id, name, city, state, phone, image_link, facebook_link,
               website, seeking_venue, seeking_description, genres
        FROM artists
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(artist)
}

/// All artists, sorted alphabetically by name for the directory listing.
pub async fn list_artists(pool: &Pool<Postgres>) -> Result<Vec<DbArtist>> {
    let artists = sqlx::query_as::<_, DbArtist>(
        r#"
        SELECT id, name, city, state, phone, image_link, facebook_link,
               website, seeking_venue, seeking_description, genres
        FROM artists
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(artists)
}

/// Case-insensitive substring search on artist name. An empty term matches
/// every artist. Results keep insertion (id) order.
pub async fn search_artists(
    pool: &Pool<Postgres>,
    term: &str,
    now: DateTime<Utc>,
) -> Result<Vec<DbArtistSummary>> {
    tracing::debug!("Searching artists: term={:?}", term);

    let artists = sqlx::query_as::<_, DbArtistSummary>(
        r#"
        SELECT a.id, a.name,
               COUNT(s.id) FILTER (WHERE s.start_time > $1) AS num_upcoming_shows
        FROM artists a
        LEFT JOIN shows s ON s.artist_id = a.id
        WHERE a.name ILIKE $2
        GROUP BY a.id, a.name
        ORDER BY a.id
        "#,
    )
    .bind(now)
    .bind(format!("%{term}%"))
    .fetch_all(pool)
    .await?;

    Ok(artists)
}

pub async fn update_artist(pool: &Pool<Postgres>, id: i32, artist: &NewArtist) -> Result<DbArtist> {
    tracing::debug!("Updating artist: id={}", id);

    let mut tx = pool.begin().await?;

    let updated = sqlx::query_as::<_, DbArtist>(
        r#"
        UPDATE artists
        SET name = $2, city = $3, state = $4, phone = $5, image_link = $6,
            facebook_link = $7, website = $8, seeking_venue = $9, seeking_description = $10,
            genres = $11
        WHERE id = $1
        RETURNING id, name, city, state, phone, image_link, facebook_link,
                  website, seeking_venue, seeking_description, genres
        "#,
    )
    .bind(id)
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(&artist.website)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .bind(&artist.genres)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(updated)
}

/// Deletes an artist and all of their shows in one transaction, so a show
/// can never be left referencing a deleted artist.
pub async fn delete_artist(pool: &Pool<Postgres>, id: i32) -> Result<()> {
    tracing::debug!("Deleting artist: id={}", id);

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM shows WHERE artist_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM artists WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::debug!("Artist deleted: id={}", id);
    Ok(())
}

/// All shows booked by an artist, joined with the hosting venue.
pub async fn get_shows_for_artist(
    pool: &Pool<Postgres>,
    artist_id: i32,
) -> Result<Vec<DbShowWithVenue>> {
    let shows = sqlx::query_as::<_, DbShowWithVenue>(
        r#"
        SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
               s.start_time
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        WHERE s.artist_id = $1
        ORDER BY s.start_time ASC
        "#,
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    Ok(shows)
}
