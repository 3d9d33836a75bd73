use diesel::prelude::*;
use uuid::Uuid;

pub use crate::schema::artist_genres::{self, *};

#[derive(Debug, Insertable)]
#[diesel(table_name = artist_genres)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewArtistGenre {
    pub artist_id: Uuid,
    pub genre_id: Uuid,
}
