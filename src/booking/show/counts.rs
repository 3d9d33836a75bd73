use std::collections::HashMap;

use diesel::dsl::count_star;
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::booking::common::error::BookingResult;
use crate::models::*;
use crate::DatabasePool;

// SQL mirror of `timeline::is_upcoming`: start_time >= now.

pub async fn upcoming_counts_for_venues(
    pool: &DatabasePool,
    venue_ids: &[Uuid],
    now: OffsetDateTime,
) -> BookingResult<HashMap<Uuid, i64>> {
    Ok(shows::table
        .filter(shows::venue_id.eq_any(venue_ids))
        .filter(shows::start_time.ge(now))
        .group_by(shows::venue_id)
        .select((shows::venue_id, count_star()))
        .get_results::<(Uuid, i64)>(&mut pool.get().await?)
        .await?
        .into_iter()
        .collect())
}

pub async fn upcoming_counts_for_artists(
    pool: &DatabasePool,
    artist_ids: &[Uuid],
    now: OffsetDateTime,
) -> BookingResult<HashMap<Uuid, i64>> {
    Ok(shows::table
        .filter(shows::artist_id.eq_any(artist_ids))
        .filter(shows::start_time.ge(now))
        .group_by(shows::artist_id)
        .select((shows::artist_id, count_star()))
        .get_results::<(Uuid, i64)>(&mut pool.get().await?)
        .await?
        .into_iter()
        .collect())
}
