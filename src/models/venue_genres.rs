use diesel::prelude::*;
use uuid::Uuid;

pub use crate::schema::venue_genres::{self, *};

#[derive(Debug, Insertable)]
#[diesel(table_name = venue_genres)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewVenueGenre {
    pub venue_id: Uuid,
    pub genre_id: Uuid,
}
