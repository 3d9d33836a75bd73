use axum::extract::{Path, State};
use axum::Json;
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use super::super::common::error::{BookingError, BookingResult};
use super::super::common::genres::venue_genre_values;
use super::super::common::timeline::is_upcoming;
use crate::models::*;
use crate::{Database, DatabasePool};

#[derive(Debug, Serialize)]
pub struct ArtistBooking {
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct VenueDetail {
    pub id: Uuid,
    pub name: String,
    pub genres: Vec<String>,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub past_shows: Vec<ArtistBooking>,
    pub upcoming_shows: Vec<ArtistBooking>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

pub async fn get_venue(
    pool: &DatabasePool,
    id: Uuid,
    now: OffsetDateTime,
) -> BookingResult<VenueDetail> {
    let venue = venues::table
        .find(id)
        .select(venues::Venue::as_select())
        .first::<venues::Venue>(&mut pool.get().await?)
        .await
        .optional()?
        .ok_or_else(|| BookingError::not_found("venue", id))?;

    let genres = venue_genre_values(&mut pool.get().await?, id).await?;

    let bookings = shows::table
        .inner_join(artists::table)
        .filter(shows::venue_id.eq(id))
        .order(shows::start_time.asc())
        .select((shows::artist_id, artists::name, artists::image_link, shows::start_time))
        .get_results::<(Uuid, String, Option<String>, OffsetDateTime)>(&mut pool.get().await?)
        .await?;

    let (upcoming_shows, past_shows): (Vec<_>, Vec<_>) = bookings
        .into_iter()
        .map(|(artist_id, artist_name, artist_image_link, start_time)| ArtistBooking {
            artist_id,
            artist_name,
            artist_image_link,
            start_time,
        })
        .partition(|booking| is_upcoming(booking.start_time, now));

    Ok(VenueDetail {
        id: venue.id,
        name: venue.name,
        genres,
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone,
        website: venue.website,
        facebook_link: venue.facebook_link,
        image_link: venue.image_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

pub async fn get_venue_handler(
    State(database): State<Database>,
    Path(venue_id): Path<Uuid>,
) -> BookingResult<Json<VenueDetail>> {
    Ok(Json(get_venue(&database.pool, venue_id, OffsetDateTime::now_utc()).await?))
}
