use chrono::{DateTime, Utc};
use mockall::mock;
use showbill_core::models::{artist::NewArtist, show::NewShow, venue::NewVenue};

use crate::models::{
    DbArtist, DbArtistSummary, DbShow, DbShowDetails, DbShowWithArtist, DbShowWithVenue, DbVenue,
    DbVenueSummary,
};

// Mock repositories for testing
mock! {
    pub VenueRepo {
        pub async fn create_venue(&self, venue: NewVenue) -> eyre::Result<DbVenue>;

        pub async fn get_venue_by_id(&self, id: i32) -> eyre::Result<Option<DbVenue>>;

        pub async fn list_venue_summaries(
            &self,
            now: DateTime<Utc>,
        ) -> eyre::Result<Vec<DbVenueSummary>>;

        pub async fn search_venues(
            &self,
            term: &'static str,
            now: DateTime<Utc>,
        ) -> eyre::Result<Vec<DbVenueSummary>>;

        pub async fn update_venue(&self, id: i32, venue: NewVenue) -> eyre::Result<DbVenue>;

        pub async fn delete_venue(&self, id: i32) -> eyre::Result<()>;

        pub async fn get_shows_for_venue(
            &self,
            venue_id: i32,
        ) -> eyre::Result<Vec<DbShowWithArtist>>;
    }
}

mock! {
    pub ArtistRepo {
        pub async fn create_artist(&self, artist: NewArtist) -> eyre::Result<DbArtist>;

        pub async fn get_artist_by_id(&self, id: i32) -> eyre::Result<Option<DbArtist>>;

        pub async fn list_artists(&self) -> eyre::Result<Vec<DbArtist>>;

        pub async fn search_artists(
            &self,
            term: &'static str,
            now: DateTime<Utc>,
        ) -> eyre::Result<Vec<DbArtistSummary>>;

        pub async fn update_artist(&self, id: i32, artist: NewArtist) -> eyre::Result<DbArtist>;

        pub async fn delete_artist(&self, id: i32) -> eyre::Result<()>;

        pub async fn get_shows_for_artist(
            &self,
            artist_id: i32,
        ) -> eyre::Result<Vec<DbShowWithVenue>>;
    }
}

mock! {
    pub ShowRepo {
        pub async fn create_show(&self, show: NewShow) -> eyre::Result<DbShow>;

        pub async fn list_shows(&self) -> eyre::Result<Vec<DbShowDetails>>;
    }
}
