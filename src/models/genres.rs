use std::borrow::Cow;

use diesel::prelude::*;
use uuid::Uuid;

pub use crate::schema::genres::{self, *};

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = genres)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[cfg_attr(test, derive(Clone, PartialEq, Eq, PartialOrd, Ord))]
pub struct Genre {
    pub id: Uuid,
    pub value: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = genres)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewGenre<'a> {
    pub value: Cow<'a, str>,
}

impl<'a> From<&'a str> for NewGenre<'a> {
    fn from(v: &'a str) -> Self {
        Self { value: v.into() }
    }
}
