use axum::extract::{Path, State};
use axum::response::Redirect;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::Form;
use concat_string::concat_string;
use diesel::{OptionalExtension, QueryDsl};
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use serde::Deserialize;
use uuid::Uuid;

use super::super::common::error::{BookingError, BookingResult};
use super::super::common::flash::Flash;
use crate::models::*;
use crate::{Database, DatabasePool};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeleteVenueForm {
    pub venue_id: Option<Uuid>,
}

pub async fn delete_venue(pool: &DatabasePool, id: Uuid) -> BookingResult<String> {
    let mut conn = pool.get().await?;
    conn.transaction(|conn| {
        async move {
            let name = venues::table
                .find(id)
                .select(venues::name)
                .first::<String>(conn)
                .await
                .optional()?
                .ok_or_else(|| BookingError::not_found("venue", id))?;
            diesel::delete(venues::table.find(id)).execute(conn).await?;
            Ok(name)
        }
        .scope_boxed()
    })
    .await
}

// The form body names the venue to delete; the path id is only routing.
pub async fn delete_venue_handler(
    State(database): State<Database>,
    flash: Flash,
    Path(_venue_id): Path<Uuid>,
    Form(form): Form<DeleteVenueForm>,
) -> (CookieJar, Redirect) {
    let flash = match form.venue_id {
        None => flash.notice("No venue was selected for deletion."),
        Some(id) => match delete_venue(&database.pool, id).await {
            Ok(name) => flash.notice(&concat_string!("The venue ", name, " has been deleted.")),
            Err(BookingError::NotFound(message)) => flash.notice(&message),
            Err(error) => {
                tracing::error!("{:?}", error);
                flash.notice("Something went wrong and the venue was not deleted.")
            }
        },
    };
    flash.redirect("/")
}
