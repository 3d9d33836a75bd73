use axum::extract::{Path, State};
use axum::Json;
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use super::super::common::error::{BookingError, BookingResult};
use super::super::common::genres::artist_genre_values;
use super::super::common::timeline::is_upcoming;
use crate::models::*;
use crate::{Database, DatabasePool};

#[derive(Debug, Serialize)]
pub struct VenueBooking {
    pub venue_id: Uuid,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct ArtistDetail {
    pub id: Uuid,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub past_shows: Vec<VenueBooking>,
    pub upcoming_shows: Vec<VenueBooking>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

pub async fn get_artist(
    pool: &DatabasePool,
    id: Uuid,
    now: OffsetDateTime,
) -> BookingResult<ArtistDetail> {
    let artist = artists::table
        .find(id)
        .select(artists::Artist::as_select())
        .first::<artists::Artist>(&mut pool.get().await?)
        .await
        .optional()?
        .ok_or_else(|| BookingError::not_found("artist", id))?;

    let genres = artist_genre_values(&mut pool.get().await?, id).await?;

    let bookings = shows::table
        .inner_join(venues::table)
        .filter(shows::artist_id.eq(id))
        .order(shows::start_time.asc())
        .select((shows::venue_id, venues::name, venues::image_link, shows::start_time))
        .get_results::<(Uuid, String, Option<String>, OffsetDateTime)>(&mut pool.get().await?)
        .await?;

    let (upcoming_shows, past_shows): (Vec<_>, Vec<_>) = bookings
        .into_iter()
        .map(|(venue_id, venue_name, venue_image_link, start_time)| VenueBooking {
            venue_id,
            venue_name,
            venue_image_link,
            start_time,
        })
        .partition(|booking| is_upcoming(booking.start_time, now));

    Ok(ArtistDetail {
        id: artist.id,
        name: artist.name,
        genres,
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website: artist.website,
        facebook_link: artist.facebook_link,
        image_link: artist.image_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

pub async fn get_artist_handler(
    State(database): State<Database>,
    Path(artist_id): Path<Uuid>,
) -> BookingResult<Json<ArtistDetail>> {
    Ok(Json(get_artist(&database.pool, artist_id, OffsetDateTime::now_utc()).await?))
}

#[cfg(test)]
mod tests {
    use time::Duration;

    use super::*;
    use crate::utils::test::Infra;

    #[tokio::test]
    async fn test_get_artist_partitions_shows() {
        let now = OffsetDateTime::now_utc();
        let infra = Infra::new()
            .await
            .add_artist(None)
            .await
            .add_venue(None)
            .await
            .add_venue(None)
            .await
            .add_show(0, 0, now - Duration::days(30))
            .await
            .add_show(0, 1, now + Duration::days(30))
            .await;

        let detail = get_artist(infra.pool(), infra.artist_id(0), now).await.unwrap();
        assert_eq!(detail.past_shows_count, 1);
        assert_eq!(detail.upcoming_shows_count, 1);
        assert_eq!(detail.past_shows[0].venue_id, infra.venue_id(0));
        assert_eq!(detail.upcoming_shows[0].venue_id, infra.venue_id(1));
    }

    #[tokio::test]
    async fn test_get_unknown_artist_is_not_found() {
        let now = OffsetDateTime::now_utc();
        let infra = Infra::new().await;

        let error = get_artist(infra.pool(), Uuid::new_v4(), now).await.unwrap_err();
        assert!(matches!(error, BookingError::NotFound(_)));
    }
}
