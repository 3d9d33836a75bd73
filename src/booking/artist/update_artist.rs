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
use super::super::common::genres::{artist_genre_values, normalize, set_artist_genres};
use super::create_artist::ArtistForm;
use crate::models::*;
use crate::{Database, DatabasePool};

#[derive(Debug, Serialize)]
pub struct ArtistFormView {
    pub id: Uuid,
    #[serde(flatten)]
    pub form: ArtistForm,
}

pub async fn edit_artist_form(pool: &DatabasePool, id: Uuid) -> BookingResult<ArtistFormView> {
    let artist = artists::table
        .find(id)
        .select(artists::Artist::as_select())
        .first::<artists::Artist>(&mut pool.get().await?)
        .await
        .optional()?
        .ok_or_else(|| BookingError::not_found("artist", id))?;
    let genres = artist_genre_values(&mut pool.get().await?, id).await?;

    Ok(ArtistFormView {
        id: artist.id,
        form: ArtistForm {
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            website: artist.website,
            facebook_link: artist.facebook_link,
            image_link: artist.image_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            genres,
        },
    })
}

pub async fn update_artist(
    pool: &DatabasePool,
    id: Uuid,
    form: &ArtistForm,
) -> BookingResult<artists::Artist> {
    let genres = normalize(form.genres.clone());
    let mut conn = pool.get().await?;
    conn.transaction(|conn| {
        async move {
            let artist = diesel::update(artists::table.find(id))
                .set(artists::UpsertArtist::from(form))
                .returning(artists::Artist::as_returning())
                .get_result::<artists::Artist>(conn)
                .await
                .optional()?
                .ok_or_else(|| BookingError::not_found("artist", id))?;
            set_artist_genres(conn, id, &genres).await?;
            Ok(artist)
        }
        .scope_boxed()
    })
    .await
}

pub async fn edit_artist_form_handler(
    State(database): State<Database>,
    Path(artist_id): Path<Uuid>,
) -> BookingResult<Json<ArtistFormView>> {
    Ok(Json(edit_artist_form(&database.pool, artist_id).await?))
}

pub async fn update_artist_handler(
    State(database): State<Database>,
    flash: Flash,
    Path(artist_id): Path<Uuid>,
    Form(form): Form<ArtistForm>,
) -> (CookieJar, Redirect) {
    match update_artist(&database.pool, artist_id, &form).await {
        Ok(artist) => flash
            .notice(&concat_string!("Artist ", artist.name, " is successfully updated!"))
            .redirect(&concat_string!("/artists/", artist_id.to_string())),
        Err(BookingError::NotFound(message)) => flash.notice(&message).redirect("/"),
        Err(error) => {
            tracing::error!("{:?}", error);
            flash
                .notice(&concat_string!(
                    "An error occurred. Artist ",
                    form.name,
                    " could not be updated."
                ))
                .redirect(&concat_string!("/artists/", artist_id.to_string()))
        }
    }
}
