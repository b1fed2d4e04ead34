use eyre::Result;
use showbill_core::models::show::NewShow;
use sqlx::{Pool, Postgres};

use crate::models::{DbShow, DbShowDetails};

pub async fn create_show(pool: &Pool<Postgres>, show: &NewShow) -> Result<DbShow> {
    tracing::debug!(
        "Creating show: artist_id={}, venue_id={}",
        show.artist_id,
        show.venue_id
    );

    let mut tx = pool.begin().await?;

    let created = sqlx::query_as::<_, DbShow>(
        r#"
        INSERT INTO shows (artist_id, venue_id, start_time)
        VALUES ($1, $2, $3)
        RETURNING id, artist_id, venue_id, start_time
        "#,
    )
    .bind(show.artist_id)
    .bind(show.venue_id)
    .bind(show.start_time)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!("Show created successfully: id={}", created.id);
    Ok(created)
}

/// All shows with their venue and artist denormalized, ordered by start time.
pub async fn list_shows(pool: &Pool<Postgres>) -> Result<Vec<DbShowDetails>> {
    let shows = sqlx::query_as::<_, DbShowDetails>(
        r#"
        SELECT s.venue_id, v.name AS venue_name, s.artist_id, a.name AS artist_name,
               a.image_link AS artist_image_link, s.start_time
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        JOIN artists a ON a.id = s.artist_id
        ORDER BY s.start_time ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(shows)
}
