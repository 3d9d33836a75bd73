use axum::extract::State;
use axum::Json;
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use itertools::Itertools;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use super::super::common::error::BookingResult;
use super::super::show::counts::upcoming_counts_for_venues;
use crate::models::*;
use crate::{Database, DatabasePool};

#[derive(Debug, Serialize)]
pub struct VenueSummary {
    pub id: Uuid,
    pub name: String,
    pub num_upcoming_shows: i64,
}

#[derive(Debug, Serialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

#[derive(Debug, Serialize)]
pub struct VenuesBody {
    pub areas: Vec<VenueArea>,
}

pub async fn list_venues(
    pool: &DatabasePool,
    now: OffsetDateTime,
) -> BookingResult<Vec<VenueArea>> {
    let rows = venues::table
        .select((venues::id, venues::name, venues::city, venues::state))
        .order((venues::state.asc(), venues::city.asc(), venues::name.asc()))
        .get_results::<(Uuid, String, String, String)>(&mut pool.get().await?)
        .await?;

    let counts =
        upcoming_counts_for_venues(pool, &rows.iter().map(|(id, ..)| *id).collect_vec(), now)
            .await?;

    // rows arrive ordered by (state, city), so each location is one run
    let mut areas: Vec<VenueArea> = vec![];
    for (id, name, city, state) in rows {
        let venue = VenueSummary {
            id,
            name,
            num_upcoming_shows: counts.get(&id).copied().unwrap_or(0),
        };
        match areas.last_mut() {
            Some(area) if area.city == city && area.state == state => area.venues.push(venue),
            _ => areas.push(VenueArea { city, state, venues: vec![venue] }),
        }
    }
    Ok(areas)
}

pub async fn list_venues_handler(
    State(database): State<Database>,
) -> BookingResult<Json<VenuesBody>> {
    Ok(Json(VenuesBody {
        areas: list_venues(&database.pool, OffsetDateTime::now_utc()).await?,
    }))
}

#[cfg(test)]
mod tests {
    use time::Duration;

    use super::*;
    use crate::utils::test::Infra;

    #[tokio::test]
    async fn test_venues_are_grouped_by_location() {
        let now = OffsetDateTime::now_utc();
        let infra = Infra::new()
            .await
            .add_venue_in("San Francisco", "CA")
            .await
            .add_venue_in("San Francisco", "CA")
            .await
            .add_venue_in("New York", "NY")
            .await;

        let areas = list_venues(infra.pool(), now).await.unwrap();
        assert_eq!(areas.len(), 2);
        assert_eq!((areas[0].city.as_str(), areas[0].state.as_str()), ("San Francisco", "CA"));
        assert_eq!((areas[1].city.as_str(), areas[1].state.as_str()), ("New York", "NY"));

        // every venue lands in exactly one group
        let grouped_ids = areas
            .iter()
            .flat_map(|area| area.venues.iter().map(|venue| venue.id))
            .sorted()
            .collect_vec();
        assert_eq!(grouped_ids, infra.venue_ids(..));
    }

    #[tokio::test]
    async fn test_group_counts_only_upcoming_shows() {
        let now = OffsetDateTime::now_utc();
        let infra = Infra::new()
            .await
            .add_venue_in("San Francisco", "CA")
            .await
            .add_artist(None)
            .await
            .add_show(0, 0, now - Duration::days(7))
            .await
            .add_show(0, 0, now + Duration::days(7))
            .await
            .add_show(0, 0, now + Duration::days(14))
            .await;

        let areas = list_venues(infra.pool(), now).await.unwrap();
        assert_eq!(areas.len(), 1);
        assert_eq!(areas[0].venues[0].num_upcoming_shows, 2);
    }
}
