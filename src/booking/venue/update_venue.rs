use axum::extract::{Path, State};
use axum::response::Redirect;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::Form;
use concat_string::concat_string;
use diesel::{OptionalExtension, QueryDsl, SelectableHelper};
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use serde::Serialize;
use uuid::Uuid;

use super::super::common::error::{BookingError, BookingResult};
use super::super::common::flash::Flash;
use super::super::common::genres::{normalize, set_venue_genres, venue_genre_values};
use super::create_venue::VenueForm;
use crate::models::*;
use crate::{Database, DatabasePool};

#[derive(Debug, Serialize)]
pub struct VenueFormView {
    pub id: Uuid,
    #[serde(flatten)]
    pub form: VenueForm,
}

pub async fn edit_venue_form(pool: &DatabasePool, id: Uuid) -> BookingResult<VenueFormView> {
    let venue = venues::table
        .find(id)
        .select(venues::Venue::as_select())
        .first::<venues::Venue>(&mut pool.get().await?)
        .await
        .optional()?
        .ok_or_else(|| BookingError::not_found("venue", id))?;
    let genres = venue_genre_values(&mut pool.get().await?, id).await?;

    Ok(VenueFormView {
        id: venue.id,
        form: VenueForm {
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            website: venue.website,
            facebook_link: venue.facebook_link,
            image_link: venue.image_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            genres,
        },
    })
}

pub async fn update_venue(
    pool: &DatabasePool,
    id: Uuid,
    form: &VenueForm,
) -> BookingResult<venues::Venue> {
    let genres = normalize(form.genres.clone());
    let mut conn = pool.get().await?;
    conn.transaction(|conn| {
        async move {
            let venue = diesel::update(venues::table.find(id))
                .set(venues::UpsertVenue::from(form))
                .returning(venues::Venue::as_returning())
                .get_result::<venues::Venue>(conn)
                .await
                .optional()?
                .ok_or_else(|| BookingError::not_found("venue", id))?;
            set_venue_genres(conn, id, &genres).await?;
            Ok(venue)
        }
        .scope_boxed()
    })
    .await
}

pub async fn edit_venue_form_handler(
    State(database): State<Database>,
    Path(venue_id): Path<Uuid>,
) -> BookingResult<Json<VenueFormView>> {
    Ok(Json(edit_venue_form(&database.pool, venue_id).await?))
}

pub async fn update_venue_handler(
    State(database): State<Database>,
    flash: Flash,
    Path(venue_id): Path<Uuid>,
    Form(form): Form<VenueForm>,
) -> (CookieJar, Redirect) {
    match update_venue(&database.pool, venue_id, &form).await {
        Ok(venue) => flash
            .notice(&concat_string!("Venue ", venue.name, " is successfully updated!"))
            .redirect(&concat_string!("/venues/", venue_id.to_string())),
        Err(BookingError::NotFound(message)) => flash.notice(&message).redirect("/"),
        Err(error) => {
            tracing::error!("{:?}", error);
            flash
                .notice(&concat_string!(
                    "An error occurred. Venue ",
                    form.name,
                    " could not be updated."
                ))
                .redirect(&concat_string!("/venues/", venue_id.to_string()))
        }
    }
}
