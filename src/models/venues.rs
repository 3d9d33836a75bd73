use std::borrow::Cow;

use diesel::prelude::*;
use uuid::Uuid;

pub use crate::schema::venues::{self, *};

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = venues)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[cfg_attr(test, derive(Clone, PartialEq, Eq))]
pub struct Venue {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

// serves both the insert and the whole-row update, so a blank form field
// clears the column instead of leaving the previous value behind
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = venues)]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpsertVenue<'a> {
    pub name: Cow<'a, str>,
    pub address: Option<Cow<'a, str>>,
    pub city: Cow<'a, str>,
    pub state: Cow<'a, str>,
    pub phone: Option<Cow<'a, str>>,
    pub website: Option<Cow<'a, str>>,
    pub facebook_link: Option<Cow<'a, str>>,
    pub image_link: Option<Cow<'a, str>>,
    pub seeking_talent: bool,
    pub seeking_description: Option<Cow<'a, str>>,
}
