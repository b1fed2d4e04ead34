use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create venues table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS venues (
            id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            city VARCHAR(120) NOT NULL,
            state VARCHAR(120) NOT NULL,
            address VARCHAR(120) NOT NULL,
            phone VARCHAR(120) NOT NULL,
            image_link VARCHAR(500) NULL,
            facebook_link VARCHAR(120) NULL,
            website VARCHAR(120) NULL,
            seeking_talent BOOLEAN NOT NULL DEFAULT FALSE,
            seeking_description VARCHAR(500) NULL,
            genres TEXT[] NOT NULL DEFAULT '{}'
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create artists table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            city VARCHAR(120) NOT NULL,
            state VARCHAR(120) NOT NULL,
            phone VARCHAR(120) NOT NULL,
            image_link VARCHAR(500) NULL,
            facebook_link VARCHAR(120) NULL,
            website VARCHAR(120) NULL,
            seeking_venue BOOLEAN NOT NULL DEFAULT FALSE,
            seeking_description VARCHAR(500) NULL,
            genres TEXT[] NOT NULL DEFAULT '{}'
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create shows table. The foreign keys keep a show from outliving either
    // endpoint of its booking; deletion cascades are handled in the
    // repositories inside the same transaction as the entity delete.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shows (
            id SERIAL PRIMARY KEY,
            artist_id INTEGER NOT NULL REFERENCES artists(id),
            venue_id INTEGER NOT NULL REFERENCES venues(id),
            start_time TIMESTAMP WITH TIME ZONE NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_shows_artist_id ON shows(artist_id)",
        "CREATE INDEX IF NOT EXISTS idx_shows_venue_id ON shows(venue_id)",
        "CREATE INDEX IF NOT EXISTS idx_shows_start_time ON shows(start_time)",
        "CREATE INDEX IF NOT EXISTS idx_venues_city_state ON venues(city, state)",
        "CREATE INDEX IF NOT EXISTS idx_artists_name ON artists(name)",
    ];
    for index in indexes {
        sqlx::query(index).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
