use axum::Json;
use chrono::{Duration, Utc};
use mockall::predicate;
use pretty_assertions::assert_eq;
use showbill_core::{
    display,
    errors::DirectoryError,
    models::common::{DeleteReceipt, SubmissionReceipt},
    models::venue::{
        CityGroup, VenueDetail, VenueForm, VenueListingRow, VenueSearchResponse, VenueShowEntry,
        VenueSummary,
    },
    validation,
};
use showbill_db::models::{DbShowWithArtist, DbVenue, DbVenueSummary};

use crate::test_utils::{sample_venue, TestContext};
use showbill_api::middleware::error_handling::AppError;

// Test wrappers that mirror the handler orchestration against the mock
// repositories instead of a live database.

async fn test_list_venues_wrapper(
    ctx: &mut TestContext,
) -> Result<Json<Vec<CityGroup>>, AppError> {
    let now = Utc::now();
    let rows = ctx
        .venue_repo
        .list_venue_summaries(now)
        .await
        .map_err(DirectoryError::Database)?;

    let rows = rows
        .into_iter()
        .map(|row| VenueListingRow {
            id: row.id,
            name: row.name,
            city: row.city,
            state: row.state,
            num_upcoming_shows: row.num_upcoming_shows,
        })
        .collect();

    Ok(Json(display::group_by_locality(rows)))
}

async fn test_search_venues_wrapper(
    ctx: &mut TestContext,
    term: &'static str,
) -> Result<Json<VenueSearchResponse>, AppError> {
    let now = Utc::now();
    let matches = ctx
        .venue_repo
        .search_venues(term, now)
        .await
        .map_err(DirectoryError::Database)?;

    let data: Vec<VenueSummary> = matches
        .into_iter()
        .map(|row| VenueSummary {
            id: row.id,
            name: row.name,
            num_upcoming_shows: row.num_upcoming_shows,
        })
        .collect();

    Ok(Json(VenueSearchResponse {
        count: data.len(),
        data,
    }))
}

async fn test_show_venue_wrapper(
    ctx: &mut TestContext,
    id: i32,
) -> Result<Json<VenueDetail>, AppError> {
    let venue = match ctx.venue_repo.get_venue_by_id(id).await {
        Ok(Some(venue)) => venue,
        Ok(None) => {
            return Err(AppError(DirectoryError::NotFound(format!(
                "Venue with ID {} not found",
                id
            ))))
        }
        Err(e) => return Err(AppError(DirectoryError::Database(e))),
    };

    let shows = ctx
        .venue_repo
        .get_shows_for_venue(id)
        .await
        .map_err(DirectoryError::Database)?;

    let now = Utc::now();
    let (past, upcoming) = display::partition_by_start(shows, now, |show| show.start_time);

    let to_entry = |show: DbShowWithArtist| VenueShowEntry {
        artist_id: show.artist_id,
        artist_name: show.artist_name,
        artist_image_link: show.artist_image_link,
        start_time: display::format_start_time(show.start_time),
    };
    let past_shows: Vec<VenueShowEntry> = past.into_iter().map(to_entry).collect();
    let upcoming_shows: Vec<VenueShowEntry> = upcoming.into_iter().map(to_entry).collect();

    Ok(Json(VenueDetail {
        id: venue.id,
        name: venue.name,
        genres: venue.genres,
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: display::format_phone(&venue.phone),
        website: venue.website,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        image_link: venue.image_link,
        past_shows_count: past_shows.len(),
        past_shows,
        upcoming_shows_count: upcoming_shows.len(),
        upcoming_shows,
    }))
}

async fn test_create_venue_wrapper(
    ctx: &mut TestContext,
    form: VenueForm,
) -> Result<Json<SubmissionReceipt>, AppError> {
    let venue = validation::validate_venue(&form).map_err(DirectoryError::Validation)?;

    let created = ctx
        .venue_repo
        .create_venue(venue)
        .await
        .map_err(DirectoryError::Database)?;

    Ok(Json(SubmissionReceipt {
        id: created.id,
        message: format!("Venue {} was successfully listed!", created.name),
        url: format!("/venues/{}", created.id),
    }))
}

async fn test_delete_venue_wrapper(
    ctx: &mut TestContext,
    id: i32,
) -> Result<Json<DeleteReceipt>, AppError> {
    let venue = match ctx.venue_repo.get_venue_by_id(id).await {
        Ok(Some(venue)) => venue,
        Ok(None) => {
            return Err(AppError(DirectoryError::NotFound(format!(
                "Venue with ID {} not found",
                id
            ))))
        }
        Err(e) => return Err(AppError(DirectoryError::Database(e))),
    };

    ctx.venue_repo
        .delete_venue(id)
        .await
        .map_err(DirectoryError::Database)?;

    Ok(Json(DeleteReceipt {
        deleted: true,
        message: format!("Successfully removed venue {}", venue.name),
        url: "/venues".to_string(),
    }))
}

fn complete_venue_form() -> VenueForm {
    VenueForm {
        name: "The Mansion".to_string(),
        city: "Austin".to_string(),
        state: "TX".to_string(),
        address: "1 Main St".to_string(),
        phone: "512-555-1234".to_string(),
        image_link: "https://example.com/mansion.jpg".to_string(),
        facebook_link: String::new(),
        website: "https://themansion.example.com".to_string(),
        seeking_talent: "Yes".to_string(),
        seeking_description: "Always booking local acts".to_string(),
        genres: vec!["Jazz".to_string(), "Blues".to_string()],
    }
}

#[tokio::test]
async fn test_list_venues_groups_by_locality() {
    let mut ctx = TestContext::new();

    ctx.venue_repo
        .expect_list_venue_summaries()
        .returning(|_| {
            Ok(vec![
                DbVenueSummary {
                    id: 3,
                    name: "Park Square Live Music & Coffee".to_string(),
                    city: "San Francisco".to_string(),
                    state: "CA".to_string(),
                    num_upcoming_shows: 1,
                },
                DbVenueSummary {
                    id: 1,
                    name: "The Mansion".to_string(),
                    city: "Austin".to_string(),
                    state: "TX".to_string(),
                    num_upcoming_shows: 0,
                },
            ])
        });

    let Json(groups) = test_list_venues_wrapper(&mut ctx).await.expect("Listing should succeed");

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].city, "Austin");
    assert_eq!(groups[0].state, "TX");
    assert_eq!(
        groups[0].venues,
        vec![VenueSummary {
            id: 1,
            name: "The Mansion".to_string(),
            num_upcoming_shows: 0,
        }]
    );
    assert_eq!(groups[1].city, "San Francisco");
}

#[tokio::test]
async fn test_search_venues_substring_matches() {
    let mut ctx = TestContext::new();

    // Case-insensitive substring search: "art" matches both venue names
    ctx.venue_repo
        .expect_search_venues()
        .with(predicate::eq("art"), predicate::always())
        .returning(|_, _| {
            Ok(vec![
                DbVenueSummary {
                    id: 2,
                    name: "Smart Venue".to_string(),
                    city: "Austin".to_string(),
                    state: "TX".to_string(),
                    num_upcoming_shows: 1,
                },
                DbVenueSummary {
                    id: 5,
                    name: "Party Hall".to_string(),
                    city: "Austin".to_string(),
                    state: "TX".to_string(),
                    num_upcoming_shows: 0,
                },
            ])
        });

    let Json(response) = test_search_venues_wrapper(&mut ctx, "art")
        .await
        .expect("Search should succeed");

    assert_eq!(response.count, 2);
    let names: Vec<&str> = response.data.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Smart Venue", "Party Hall"]);
}

#[tokio::test]
async fn test_show_venue_partitions_shows() {
    let mut ctx = TestContext::new();
    let now = Utc::now();

    ctx.venue_repo
        .expect_get_venue_by_id()
        .with(predicate::eq(1))
        .returning(|_| Ok(Some(sample_venue())));

    ctx.venue_repo
        .expect_get_shows_for_venue()
        .with(predicate::eq(1))
        .returning(move |_| {
            Ok(vec![
                DbShowWithArtist {
                    artist_id: 4,
                    artist_name: "Guns N Petals".to_string(),
                    artist_image_link: None,
                    start_time: now - Duration::days(30),
                },
                DbShowWithArtist {
                    artist_id: 5,
                    artist_name: "Matt Quevedo".to_string(),
                    artist_image_link: None,
                    start_time: now + Duration::days(30),
                },
            ])
        });

    let Json(detail) = test_show_venue_wrapper(&mut ctx, 1)
        .await
        .expect("Detail view should succeed");

    assert_eq!(detail.past_shows_count, 1);
    assert_eq!(detail.upcoming_shows_count, 1);
    assert_eq!(detail.past_shows[0].artist_name, "Guns N Petals");
    assert_eq!(detail.upcoming_shows[0].artist_name, "Matt Quevedo");
    // Stored raw digits are formatted for display
    assert_eq!(detail.phone, "512-555-1234");
}

#[tokio::test]
async fn test_show_venue_not_found() {
    let mut ctx = TestContext::new();

    ctx.venue_repo
        .expect_get_venue_by_id()
        .with(predicate::eq(99))
        .returning(|_| Ok(None));

    let result = test_show_venue_wrapper(&mut ctx, 99).await;

    match result {
        Err(AppError(DirectoryError::NotFound(message))) => {
            assert!(message.contains("99"));
        }
        _ => panic!("Expected NotFound error"),
    }
}

#[tokio::test]
async fn test_create_venue_success() {
    let mut ctx = TestContext::new();

    ctx.venue_repo.expect_create_venue().returning(|venue| {
        Ok(DbVenue {
            id: 12,
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            image_link: venue.image_link,
            facebook_link: venue.facebook_link,
            website: venue.website,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            genres: venue.genres,
        })
    });

    let Json(receipt) = test_create_venue_wrapper(&mut ctx, complete_venue_form())
        .await
        .expect("Create should succeed");

    assert_eq!(receipt.id, 12);
    assert_eq!(receipt.message, "Venue The Mansion was successfully listed!");
    assert_eq!(receipt.url, "/venues/12");
}

#[tokio::test]
async fn test_create_venue_validation_failure_persists_nothing() {
    let mut ctx = TestContext::new();

    // The repository must never be reached when validation fails
    ctx.venue_repo.expect_create_venue().times(0);

    let mut form = complete_venue_form();
    form.name = String::new();

    let result = test_create_venue_wrapper(&mut ctx, form).await;

    match result {
        Err(AppError(DirectoryError::Validation(errors))) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "name");
        }
        _ => panic!("Expected Validation error"),
    }
}

#[tokio::test]
async fn test_delete_venue_success() {
    let mut ctx = TestContext::new();

    ctx.venue_repo
        .expect_get_venue_by_id()
        .with(predicate::eq(1))
        .returning(|_| Ok(Some(sample_venue())));

    ctx.venue_repo
        .expect_delete_venue()
        .with(predicate::eq(1))
        .returning(|_| Ok(()));

    let Json(receipt) = test_delete_venue_wrapper(&mut ctx, 1)
        .await
        .expect("Delete should succeed");

    assert!(receipt.deleted);
    assert_eq!(receipt.message, "Successfully removed venue The Mansion");
    assert_eq!(receipt.url, "/venues");
}

#[tokio::test]
async fn test_delete_venue_not_found_is_a_noop() {
    let mut ctx = TestContext::new();

    ctx.venue_repo
        .expect_get_venue_by_id()
        .with(predicate::eq(99))
        .returning(|_| Ok(None));
    ctx.venue_repo.expect_delete_venue().times(0);

    let result = test_delete_venue_wrapper(&mut ctx, 99).await;

    assert!(matches!(
        result,
        Err(AppError(DirectoryError::NotFound(_)))
    ));
}

#[tokio::test]
async fn test_delete_venue_failure_reports_server_error() {
    let mut ctx = TestContext::new();

    ctx.venue_repo
        .expect_get_venue_by_id()
        .returning(|_| Ok(Some(sample_venue())));
    ctx.venue_repo
        .expect_delete_venue()
        .returning(|_| Err(eyre::eyre!("constraint violation")));

    let result = test_delete_venue_wrapper(&mut ctx, 1).await;

    assert!(matches!(
        result,
        Err(AppError(DirectoryError::Database(_)))
    ));
}
