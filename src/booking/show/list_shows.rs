use axum::extract::State;
use axum::Json;
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use itertools::Itertools;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use super::super::common::error::BookingResult;
use crate::models::*;
use crate::{Database, DatabasePool};

#[derive(Debug, Serialize)]
pub struct ShowEntry {
    pub venue_id: Uuid,
    pub venue_name: String,
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct ShowsBody {
    pub shows: Vec<ShowEntry>,
}

// Only upcoming shows are listed here; past ones stay on the detail views.
pub async fn list_shows(
    pool: &DatabasePool,
    now: OffsetDateTime,
) -> BookingResult<Vec<ShowEntry>> {
    Ok(shows::table
        .inner_join(artists::table)
        .inner_join(venues::table)
        .filter(shows::start_time.ge(now))
        .order(shows::start_time.asc())
        .select((
            shows::venue_id,
            venues::name,
            shows::artist_id,
            artists::name,
            artists::image_link,
            shows::start_time,
        ))
        .get_results::<(Uuid, String, Uuid, String, Option<String>, OffsetDateTime)>(
            &mut pool.get().await?,
        )
        .await?
        .into_iter()
        .map(|(venue_id, venue_name, artist_id, artist_name, artist_image_link, start_time)| {
            ShowEntry {
                venue_id,
                venue_name,
                artist_id,
                artist_name,
                artist_image_link,
                start_time,
            }
        })
        .collect_vec())
}

pub async fn list_shows_handler(
    State(database): State<Database>,
) -> BookingResult<Json<ShowsBody>> {
    Ok(Json(ShowsBody { shows: list_shows(&database.pool, OffsetDateTime::now_utc()).await? }))
}
