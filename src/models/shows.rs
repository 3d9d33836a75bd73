use diesel::prelude::*;
use time::OffsetDateTime;
use uuid::Uuid;

pub use crate::schema::shows::{self, *};

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = shows)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[cfg_attr(test, derive(Clone, PartialEq, Eq))]
pub struct Show {
    pub id: Uuid,
    pub artist_id: Uuid,
    pub venue_id: Uuid,
    pub start_time: OffsetDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = shows)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewShow {
    pub artist_id: Uuid,
    pub venue_id: Uuid,
    pub start_time: OffsetDateTime,
}
