use axum::extract::State;
use axum::Json;
use axum_extra::extract::Form;
use concat_string::concat_string;
use diesel::{ExpressionMethods, PgTextExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::super::common::error::BookingResult;
use super::super::show::counts::upcoming_counts_for_artists;
use crate::models::*;
use crate::{Database, DatabasePool};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchArtistsParams {
    pub search_term: String,
}

#[derive(Debug, Serialize)]
pub struct ArtistMatch {
    pub id: Uuid,
    pub name: String,
    pub num_upcoming_shows: i64,
}

#[derive(Debug, Serialize)]
pub struct ArtistSearchBody {
    pub count: usize,
    pub data: Vec<ArtistMatch>,
}

pub async fn search_artists(
    pool: &DatabasePool,
    search_term: &str,
    now: OffsetDateTime,
) -> BookingResult<Vec<ArtistMatch>> {
    let rows = artists::table
        .filter(artists::name.ilike(concat_string!("%", search_term, "%")))
        .select((artists::id, artists::name))
        .order(artists::name.asc())
        .get_results::<(Uuid, String)>(&mut pool.get().await?)
        .await?;

    let counts =
        upcoming_counts_for_artists(pool, &rows.iter().map(|(id, _)| *id).collect_vec(), now)
            .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name)| ArtistMatch {
            id,
            name,
            num_upcoming_shows: counts.get(&id).copied().unwrap_or(0),
        })
        .collect_vec())
}

pub async fn search_artists_handler(
    State(database): State<Database>,
    Form(params): Form<SearchArtistsParams>,
) -> BookingResult<Json<ArtistSearchBody>> {
    let data =
        search_artists(&database.pool, &params.search_term, OffsetDateTime::now_utc()).await?;
    Ok(Json(ArtistSearchBody { count: data.len(), data }))
}
