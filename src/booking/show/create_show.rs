use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::Form;
use concat_string::concat_string;
use diesel::{OptionalExtension, QueryDsl};
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::super::common::error::{BookingError, BookingResult};
use super::super::common::flash::Flash;
use super::super::home::HomeBody;
use crate::models::*;
use crate::{Database, DatabasePool};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowForm {
    pub artist_id: Option<Uuid>,
    pub venue_id: Option<Uuid>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub start_time: Option<OffsetDateTime>,
}

/// Both references are checked before anything is written; when either is
/// missing the flags record which, and no row is inserted.
#[derive(Debug)]
pub enum CreateShowOutcome {
    Scheduled { artist_name: String, venue_name: String },
    Invalid { artist_exists: bool, venue_exists: bool },
}

pub async fn create_show(
    pool: &DatabasePool,
    form: &ShowForm,
) -> BookingResult<CreateShowOutcome> {
    let artist_id = form.artist_id;
    let venue_id = form.venue_id;
    let start_time = form.start_time;

    let mut conn = pool.get().await?;
    conn.transaction(|conn| {
        async move {
            let artist = match artist_id {
                Some(id) => artists::table
                    .find(id)
                    .select((artists::id, artists::name))
                    .first::<(Uuid, String)>(conn)
                    .await
                    .optional()?,
                None => None,
            };
            let venue = match venue_id {
                Some(id) => venues::table
                    .find(id)
                    .select((venues::id, venues::name))
                    .first::<(Uuid, String)>(conn)
                    .await
                    .optional()?,
                None => None,
            };

            let ((artist_id, artist_name), (venue_id, venue_name)) = match (artist, venue) {
                (Some(artist), Some(venue)) => (artist, venue),
                (artist, venue) => {
                    return Ok(CreateShowOutcome::Invalid {
                        artist_exists: artist.is_some(),
                        venue_exists: venue.is_some(),
                    });
                }
            };

            let start_time = start_time.ok_or_else(|| {
                BookingError::Validation("a start time is required to schedule a show".into())
            })?;
            diesel::insert_into(shows::table)
                .values(shows::NewShow { artist_id, venue_id, start_time })
                .execute(conn)
                .await?;
            Ok(CreateShowOutcome::Scheduled { artist_name, venue_name })
        }
        .scope_boxed()
    })
    .await
}

fn missing_reference(entity: &str, id: Option<Uuid>) -> String {
    match id {
        Some(id) => {
            concat_string!("There is no ", entity, " with id ", id.to_string(), " in our records")
        }
        None => concat_string!("No ", entity, " was selected for the show"),
    }
}

// A missing artist wins over a missing venue; only one notice is surfaced
// even though both flags were computed.
fn outcome_notice(result: BookingResult<CreateShowOutcome>, form: &ShowForm) -> String {
    match result {
        Ok(CreateShowOutcome::Scheduled { artist_name, venue_name }) => concat_string!(
            "The show by ",
            artist_name,
            " has been successfully scheduled at the following venue: ",
            venue_name
        ),
        Ok(CreateShowOutcome::Invalid { artist_exists: false, .. }) => {
            missing_reference("artist", form.artist_id)
        }
        Ok(CreateShowOutcome::Invalid { .. }) => missing_reference("venue", form.venue_id),
        Err(error) => {
            tracing::error!("{:?}", error);
            "Something went wrong and the show was not created. Please try again.".to_owned()
        }
    }
}

pub async fn new_show_form_handler() -> Json<ShowForm> {
    Json(ShowForm::default())
}

// Unlike the other write paths this renders the home view directly instead of
// redirecting; pending notices are drained into the same body.
pub async fn create_show_handler(
    State(database): State<Database>,
    flash: Flash,
    Form(form): Form<ShowForm>,
) -> (CookieJar, Json<HomeBody>) {
    let notice = outcome_notice(create_show(&database.pool, &form).await, &form);
    let (jar, mut notices) = flash.take();
    notices.push(notice);
    (jar, Json(HomeBody { notices }))
}

#[cfg(test)]
mod tests {
    use time::Duration;

    use super::*;
    use crate::utils::test::Infra;

    async fn show_count(infra: &Infra) -> i64 {
        shows::table
            .count()
            .get_result::<i64>(&mut infra.pool().get().await.unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_show_between_existing_entities() {
        let now = OffsetDateTime::now_utc();
        let infra = Infra::new()
            .await
            .add_venue_named("The Musical Hop")
            .await
            .add_artist_named("Guns N Petals")
            .await;
        let form = ShowForm {
            artist_id: Some(infra.artist_id(0)),
            venue_id: Some(infra.venue_id(0)),
            start_time: Some(now + Duration::days(7)),
        };

        let outcome = create_show(infra.pool(), &form).await.unwrap();
        assert!(matches!(
            outcome,
            CreateShowOutcome::Scheduled { ref artist_name, ref venue_name }
                if artist_name == "Guns N Petals" && venue_name == "The Musical Hop"
        ));
        assert_eq!(show_count(&infra).await, 1);
    }

    #[tokio::test]
    async fn test_unknown_artist_leaves_no_row() {
        let now = OffsetDateTime::now_utc();
        let infra = Infra::new().await.add_venue(None).await;
        let form = ShowForm {
            artist_id: Some(Uuid::new_v4()),
            venue_id: Some(infra.venue_id(0)),
            start_time: Some(now + Duration::days(7)),
        };

        let outcome = create_show(infra.pool(), &form).await.unwrap();
        assert!(matches!(
            outcome,
            CreateShowOutcome::Invalid { artist_exists: false, venue_exists: true }
        ));
        assert_eq!(show_count(&infra).await, 0);
    }

    #[tokio::test]
    async fn test_both_unknown_computes_both_flags() {
        let now = OffsetDateTime::now_utc();
        let infra = Infra::new().await;
        let form = ShowForm {
            artist_id: Some(Uuid::new_v4()),
            venue_id: Some(Uuid::new_v4()),
            start_time: Some(now + Duration::days(7)),
        };

        let outcome = create_show(infra.pool(), &form).await.unwrap();
        assert!(matches!(
            outcome,
            CreateShowOutcome::Invalid { artist_exists: false, venue_exists: false }
        ));
        assert_eq!(show_count(&infra).await, 0);
    }

    #[test]
    fn test_notice_prefers_missing_artist() {
        let artist_id = Uuid::new_v4();
        let venue_id = Uuid::new_v4();
        let form = ShowForm {
            artist_id: Some(artist_id),
            venue_id: Some(venue_id),
            start_time: None,
        };

        let notice = outcome_notice(
            Ok(CreateShowOutcome::Invalid { artist_exists: false, venue_exists: false }),
            &form,
        );
        assert_eq!(
            notice,
            format!("There is no artist with id {} in our records", artist_id)
        );

        let notice = outcome_notice(
            Ok(CreateShowOutcome::Invalid { artist_exists: true, venue_exists: false }),
            &form,
        );
        assert_eq!(notice, format!("There is no venue with id {} in our records", venue_id));
    }

    #[test]
    fn test_notice_hides_failure_detail() {
        let notice = outcome_notice(
            Err(BookingError::from(diesel::result::Error::BrokenTransactionManager)),
            &ShowForm::default(),
        );
        assert_eq!(notice, "Something went wrong and the show was not created. Please try again.");
    }
}
