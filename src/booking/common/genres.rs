use diesel::upsert::excluded;
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use itertools::Itertools;
use uuid::Uuid;

use super::error::BookingResult;
use crate::models::*;
use crate::DatabaseConnection;

/// Normalizes a submitted genre list into the one representation used on
/// both the write and the read path: trimmed, deduplicated, ordered.
pub fn normalize(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .sorted()
        .dedup()
        .collect_vec()
}

pub async fn upsert_genres(
    conn: &mut DatabaseConnection,
    values: &[String],
) -> BookingResult<Vec<Uuid>> {
    if values.is_empty() {
        return Ok(vec![]);
    }
    Ok(diesel::insert_into(genres::table)
        .values(values.iter().map(|value| genres::NewGenre::from(value.as_str())).collect_vec())
        .on_conflict(genres::value)
        .do_update()
        .set(genres::value.eq(excluded(genres::value)))
        .returning(genres::id)
        .get_results::<Uuid>(conn)
        .await?)
}

pub async fn set_venue_genres(
    conn: &mut DatabaseConnection,
    venue_id: Uuid,
    values: &[String],
) -> BookingResult<()> {
    let genre_ids = upsert_genres(conn, values).await?;
    diesel::delete(venue_genres::table.filter(venue_genres::venue_id.eq(venue_id)))
        .execute(conn)
        .await?;
    if !genre_ids.is_empty() {
        diesel::insert_into(venue_genres::table)
            .values(
                genre_ids
                    .into_iter()
                    .map(|genre_id| venue_genres::NewVenueGenre { venue_id, genre_id })
                    .collect_vec(),
            )
            .execute(conn)
            .await?;
    }
    Ok(())
}

pub async fn set_artist_genres(
    conn: &mut DatabaseConnection,
    artist_id: Uuid,
    values: &[String],
) -> BookingResult<()> {
    let genre_ids = upsert_genres(conn, values).await?;
    diesel::delete(artist_genres::table.filter(artist_genres::artist_id.eq(artist_id)))
        .execute(conn)
        .await?;
    if !genre_ids.is_empty() {
        diesel::insert_into(artist_genres::table)
            .values(
                genre_ids
                    .into_iter()
                    .map(|genre_id| artist_genres::NewArtistGenre { artist_id, genre_id })
                    .collect_vec(),
            )
            .execute(conn)
            .await?;
    }
    Ok(())
}

pub async fn venue_genre_values(
    conn: &mut DatabaseConnection,
    venue_id: Uuid,
) -> BookingResult<Vec<String>> {
    Ok(venue_genres::table
        .inner_join(genres::table)
        .filter(venue_genres::venue_id.eq(venue_id))
        .select(genres::value)
        .order(genres::value.asc())
        .get_results::<String>(conn)
        .await?)
}

pub async fn artist_genre_values(
    conn: &mut DatabaseConnection,
    artist_id: Uuid,
) -> BookingResult<Vec<String>> {
    Ok(artist_genres::table
        .inner_join(genres::table)
        .filter(artist_genres::artist_id.eq(artist_id))
        .select(genres::value)
        .order(genres::value.asc())
        .get_results::<String>(conn)
        .await?)
}
