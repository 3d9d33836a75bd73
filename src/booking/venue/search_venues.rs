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
use super::super::show::counts::upcoming_counts_for_venues;
use super::list_venues::VenueSummary;
use crate::models::*;
use crate::{Database, DatabasePool};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchVenuesParams {
    pub search_term: String,
}

#[derive(Debug, Serialize)]
pub struct VenueSearchBody {
    pub count: usize,
    pub data: Vec<VenueSummary>,
}

// An empty term degenerates to "contains empty string" and matches all rows.
pub async fn search_venues(
    pool: &DatabasePool,
    search_term: &str,
    now: OffsetDateTime,
) -> BookingResult<Vec<VenueSummary>> {
    let rows = venues::table
        .filter(venues::name.ilike(concat_string!("%", search_term, "%")))
        .select((venues::id, venues::name))
        .order(venues::name.asc())
        .get_results::<(Uuid, String)>(&mut pool.get().await?)
        .await?;

    let counts =
        upcoming_counts_for_venues(pool, &rows.iter().map(|(id, _)| *id).collect_vec(), now)
            .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name)| VenueSummary {
            id,
            name,
            num_upcoming_shows: counts.get(&id).copied().unwrap_or(0),
        })
        .collect_vec())
}

pub async fn search_venues_handler(
    State(database): State<Database>,
    Form(params): Form<SearchVenuesParams>,
) -> BookingResult<Json<VenueSearchBody>> {
    let data =
        search_venues(&database.pool, &params.search_term, OffsetDateTime::now_utc()).await?;
    Ok(Json(VenueSearchBody { count: data.len(), data }))
}
