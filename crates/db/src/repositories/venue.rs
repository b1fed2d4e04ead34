use chrono::{DateTime, Utc};
use eyre::Result;
use showbill_core::models::venue::NewVenue;
use sqlx::{Pool, Postgres};

use crate::models::{DbShowWithArtist, DbVenue, DbVenueSummary};

pub async fn create_venue(pool: &Pool<Postgres>, venue: &NewVenue) -> Result<DbVenue> {
    tracing::debug!("Creating venue: name={}", venue.name);

    let mut tx = pool.begin().await?;

    let created = sqlx::query_as::<_, DbVenue>(
        r#"
        INSERT INTO venues (name, city, state, address, phone, image_link, facebook_link,
                            website, seeking_talent, seeking_description, genres)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING id, name, city, state, address, phone, image_link, facebook_link,
                  website, seeking_talent, seeking_description, genres
        "#,
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.website)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .bind(&venue.genres)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!("Venue created successfully: id={}", created.id);
    Ok(created)
}

pub async fn get_venue_by_id(pool: &Pool<Postgres>, id: i32) -> Result<Option<DbVenue>> {
    tracing::debug!("Getting venue by id: {}", id);

    let venue = sqlx::query_as::<_, DbVenue>(
        r#"
        SELECT id, name, city, state, address, phone, image_link, facebook_link,
               website, seeking_talent, seeking_description, genres
        FROM venues
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(venue)
}

/// Listing rows for the grouped venue directory. The upcoming-show count is
/// computed against the caller's `now` on every call, never cached.
pub async fn list_venue_summaries(
    pool: &Pool<Postgres>,
    now: DateTime<Utc>,
) -> Result<Vec<DbVenueSummary>> {
    let venues = sqlx::query_as::<_, DbVenueSummary>(
        r#"
        SELECT v.id, v.name, v.city, v.state,
               COUNT(s.id) FILTER (WHERE s.start_time > $1) AS num_upcoming_shows
        FROM venues v
        LEFT JOIN shows s ON s.venue_id = v.id
        GROUP BY v.id, v.name, v.city, v.state
        ORDER BY v.city, v.state, v.id
        "#,
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok(venues)
}

/// Case-insensitive substring search on venue name. An empty term matches
/// every venue. Results keep insertion (id) order.
pub async fn search_venues(
    pool: &Pool<Postgres>,
    term: &str,
    now: DateTime<Utc>,
) -> Result<Vec<DbVenueSummary>> {
    tracing::debug!("Searching venues: term={:?}", term);

    let venues = sqlx::query_as::<_, DbVenueSummary>(
        r#"
        SELECT v.id, v.name, v.city, v.state,
               COUNT(s.id) FILTER (WHERE s.start_time > $1) AS num_upcoming_shows
        FROM venues v
        LEFT JOIN shows s ON s.venue_id = v.id
        WHERE v.name ILIKE $2
        GROUP BY v.id, v.name, v.city, v.state
        ORDER BY v.id
        "#,
    )
    .bind(now)
    .bind(format!("%{term}%"))
    .fetch_all(pool)
    .await?;

    Ok(venues)
}

pub async fn update_venue(pool: &Pool<Postgres>, id: i32, venue: &NewVenue) -> Result<DbVenue> {
    tracing::debug!("Updating venue: id={}", id);

    let mut tx = pool.begin().await?;

    let updated = sqlx::query_as::<_, DbVenue>(
        r#"
        UPDATE venues
        SET name = $2, city = $3, state = $4, address = $5, phone = $6, image_link = $7,
            facebook_link = $8, website = $9, seeking_talent = $10, seeking_description = $11,
            genres = $12
        WHERE id = $1
        RETURNING id, name, city, state, address, phone, image_link, facebook_link,
                  website, seeking_talent, seeking_description, genres
        "#,
    )
    .bind(id)
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.website)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .bind(&venue.genres)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(updated)
}

/// Deletes a venue and all of its shows in one transaction, so a show can
/// never be left referencing a deleted venue.
pub async fn delete_venue(pool: &Pool<Postgres>, id: i32) -> Result<()> {
    tracing::debug!("Deleting venue: id={}", id);

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM shows WHERE venue_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM venues WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::debug!("Venue deleted: id={}", id);
    Ok(())
}

/// All shows booked at a venue, joined with the performing artist.
pub async fn get_shows_for_venue(
    pool: &Pool<Postgres>,
    venue_id: i32,
) -> Result<Vec<DbShowWithArtist>> {
    let shows = sqlx::query_as::<_, DbShowWithArtist>(
        r#"
        SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
               s.start_time
        FROM shows s
        JOIN artists a ON a.id = s.artist_id
        WHERE s.venue_id = $1
        ORDER BY s.start_time ASC
        "#,
    )
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    Ok(shows)
}
