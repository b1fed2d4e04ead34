use axum::Json;
use chrono::{Duration, Utc};
use mockall::predicate;
use pretty_assertions::assert_eq;
use showbill_core::{
    display,
    errors::DirectoryError,
    models::artist::{ArtistDetail, ArtistForm, ArtistShowEntry, ArtistSummary},
    models::common::SubmissionReceipt,
    validation,
};
use showbill_db::models::{DbArtist, DbShowWithVenue};

use crate::test_utils::{sample_artist, TestContext};
use showbill_api::middleware::error_handling::AppError;

// Test wrappers that mirror the handler orchestration against the mock
// repositories instead of a live database.

async fn test_list_artists_wrapper(
    ctx: &mut TestContext,
) -> Result<Json<Vec<ArtistSummary>>, AppError> {
    let artists = ctx
        .artist_repo
        .list_artists()
        .await
        .map_err(DirectoryError::Database)?;

    let data = artists
        .into_iter()
        .map(|artist| ArtistSummary {
            id: artist.id,
            name: artist.name,
        })
        .collect();

    Ok(Json(data))
}

async fn test_show_artist_wrapper(
    ctx: &mut TestContext,
    id: i32,
) -> Result<Json<ArtistDetail>, AppError> {
    let artist = match ctx.artist_repo.get_artist_by_id(id).await {
        Ok(Some(artist)) => artist,
        Ok(None) => {
            return Err(AppError(DirectoryError::NotFound(format!(
                "Artist with ID {} not found",
                id
            ))))
        }
        Err(e) => return Err(AppError(DirectoryError::Database(e))),
    };

    let shows = ctx
        .artist_repo
        .get_shows_for_artist(id)
        .await
        .map_err(DirectoryError::Database)?;

    let now = Utc::now();
    let (past, upcoming) = display::partition_by_start(shows, now, |show| show.start_time);

    let to_entry = |show: DbShowWithVenue| ArtistShowEntry {
        venue_id: show.venue_id,
        venue_name: show.venue_name,
        venue_image_link: show.venue_image_link,
        start_time: display::format_start_time(show.start_time),
    };
    let past_shows: Vec<ArtistShowEntry> = past.into_iter().map(to_entry).collect();
    let upcoming_shows: Vec<ArtistShowEntry> = upcoming.into_iter().map(to_entry).collect();

    Ok(Json(ArtistDetail {
        id: artist.id,
        name: artist.name,
        genres: artist.genres,
        city: artist.city,
        state: artist.state,
        phone: display::format_phone(&artist.phone),
        website: artist.website,
        facebook_link: artist.facebook_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        image_link: artist.image_link,
        past_shows_count: past_shows.len(),
        past_shows,
        upcoming_shows_count: upcoming_shows.len(),
        upcoming_shows,
    }))
}

async fn test_create_artist_wrapper(
    ctx: &mut TestContext,
    form: ArtistForm,
) -> Result<Json<SubmissionReceipt>, AppError> {
    let artist = validation::validate_artist(&form).map_err(DirectoryError::Validation)?;

    let created = ctx
        .artist_repo
        .create_artist(artist)
        .await
        .map_err(DirectoryError::Database)?;

    Ok(Json(SubmissionReceipt {
        id: created.id,
        message: format!("Artist {} was successfully listed!", created.name),
        url: format!("/artists/{}", created.id),
    }))
}

async fn test_edit_artist_wrapper(
    ctx: &mut TestContext,
    id: i32,
    form: ArtistForm,
) -> Result<Json<SubmissionReceipt>, AppError> {
    if ctx
        .artist_repo
        .get_artist_by_id(id)
        .await
        .map_err(DirectoryError::Database)?
        .is_none()
    {
        return Err(AppError(DirectoryError::NotFound(format!(
            "Artist with ID {} not found",
            id
        ))));
    }

    let artist = validation::validate_artist(&form).map_err(DirectoryError::Validation)?;

    let updated = ctx
        .artist_repo
        .update_artist(id, artist)
        .await
        .map_err(DirectoryError::Database)?;

    Ok(Json(SubmissionReceipt {
        id: updated.id,
        message: format!("Artist {} was successfully updated!", updated.name),
        url: format!("/artists/{}", updated.id),
    }))
}

fn complete_artist_form() -> ArtistForm {
    ArtistForm {
        name: "Guns N Petals".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: "326-123-5000".to_string(),
        image_link: String::new(),
        facebook_link: "https://www.facebook.com/GunsNPetals".to_string(),
        website: String::new(),
        seeking_venue: "Yes".to_string(),
        seeking_description: "Looking for shows to perform at".to_string(),
        genres: vec!["Rock n Roll".to_string()],
    }
}

#[tokio::test]
async fn test_list_artists_maps_to_summaries() {
    let mut ctx = TestContext::new();

    // The repository returns rows already sorted alphabetically
    ctx.artist_repo.expect_list_artists().returning(|| {
        let mut first = sample_artist();
        first.id = 4;
        first.name = "Guns N Petals".to_string();
        let mut second = sample_artist();
        second.id = 5;
        second.name = "Matt Quevedo".to_string();
        Ok(vec![first, second])
    });

    let Json(artists) = test_list_artists_wrapper(&mut ctx)
        .await
        .expect("Listing should succeed");

    assert_eq!(
        artists,
        vec![
            ArtistSummary {
                id: 4,
                name: "Guns N Petals".to_string(),
            },
            ArtistSummary {
                id: 5,
                name: "Matt Quevedo".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn test_show_artist_partitions_shows() {
    let mut ctx = TestContext::new();
    let now = Utc::now();

    ctx.artist_repo
        .expect_get_artist_by_id()
        .with(predicate::eq(4))
        .returning(|_| Ok(Some(sample_artist())));

    ctx.artist_repo
        .expect_get_shows_for_artist()
        .with(predicate::eq(4))
        .returning(move |_| {
            Ok(vec![
                DbShowWithVenue {
                    venue_id: 1,
                    venue_name: "The Musical Hop".to_string(),
                    venue_image_link: None,
                    start_time: now - Duration::days(7),
                },
                DbShowWithVenue {
                    venue_id: 3,
                    venue_name: "Park Square Live Music & Coffee".to_string(),
                    venue_image_link: None,
                    start_time: now + Duration::days(7),
                },
            ])
        });

    let Json(detail) = test_show_artist_wrapper(&mut ctx, 4)
        .await
        .expect("Detail view should succeed");

    assert_eq!(detail.past_shows_count, 1);
    assert_eq!(detail.upcoming_shows_count, 1);
    assert_eq!(detail.past_shows[0].venue_name, "The Musical Hop");
    assert_eq!(
        detail.upcoming_shows[0].venue_name,
        "Park Square Live Music & Coffee"
    );
    assert_eq!(detail.phone, "326-123-5000");
}

#[tokio::test]
async fn test_show_artist_not_found() {
    let mut ctx = TestContext::new();

    ctx.artist_repo
        .expect_get_artist_by_id()
        .with(predicate::eq(99))
        .returning(|_| Ok(None));

    let result = test_show_artist_wrapper(&mut ctx, 99).await;

    assert!(matches!(
        result,
        Err(AppError(DirectoryError::NotFound(_)))
    ));
}

#[tokio::test]
async fn test_create_artist_success() {
    let mut ctx = TestContext::new();

    ctx.artist_repo.expect_create_artist().returning(|artist| {
        Ok(DbArtist {
            id: 9,
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            image_link: artist.image_link,
            facebook_link: artist.facebook_link,
            website: artist.website,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            genres: artist.genres,
        })
    });

    let Json(receipt) = test_create_artist_wrapper(&mut ctx, complete_artist_form())
        .await
        .expect("Create should succeed");

    assert_eq!(receipt.id, 9);
    assert_eq!(
        receipt.message,
        "Artist Guns N Petals was successfully listed!"
    );
    assert_eq!(receipt.url, "/artists/9");
}

#[tokio::test]
async fn test_create_artist_validation_failure_persists_nothing() {
    let mut ctx = TestContext::new();

    ctx.artist_repo.expect_create_artist().times(0);

    let mut form = complete_artist_form();
    form.phone = "not-a-phone".to_string();

    let result = test_create_artist_wrapper(&mut ctx, form).await;

    match result {
        Err(AppError(DirectoryError::Validation(errors))) => {
            assert!(errors.iter().any(|e| e.field == "phone"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[tokio::test]
async fn test_edit_artist_updates_record() {
    let mut ctx = TestContext::new();

    ctx.artist_repo
        .expect_get_artist_by_id()
        .with(predicate::eq(4))
        .returning(|_| Ok(Some(sample_artist())));

    ctx.artist_repo
        .expect_update_artist()
        .with(predicate::eq(4), predicate::always())
        .returning(|id, artist| {
            Ok(DbArtist {
                id,
                name: artist.name,
                city: artist.city,
                state: artist.state,
                phone: artist.phone,
                image_link: artist.image_link,
                facebook_link: artist.facebook_link,
                website: artist.website,
                seeking_venue: artist.seeking_venue,
                seeking_description: artist.seeking_description,
                genres: artist.genres,
            })
        });

    let mut form = complete_artist_form();
    form.city = "Oakland".to_string();

    let Json(receipt) = test_edit_artist_wrapper(&mut ctx, 4, form)
        .await
        .expect("Edit should succeed");

    assert_eq!(receipt.id, 4);
    assert_eq!(
        receipt.message,
        "Artist Guns N Petals was successfully updated!"
    );
    assert_eq!(receipt.url, "/artists/4");
}

#[tokio::test]
async fn test_edit_artist_not_found() {
    let mut ctx = TestContext::new();

    ctx.artist_repo
        .expect_get_artist_by_id()
        .with(predicate::eq(99))
        .returning(|_| Ok(None));
    ctx.artist_repo.expect_update_artist().times(0);

    let result = test_edit_artist_wrapper(&mut ctx, 99, complete_artist_form()).await;

    assert!(matches!(
        result,
        Err(AppError(DirectoryError::NotFound(_)))
    ));
}
