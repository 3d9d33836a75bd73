use std::borrow::Cow;

use axum::extract::State;
use axum::response::Redirect;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::extract::Form;
use concat_string::concat_string;
use diesel::SelectableHelper;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use serde::{Deserialize, Serialize};

use super::super::common::error::BookingResult;
use super::super::common::flash::Flash;
use super::super::common::genres::{normalize, set_artist_genres};
use crate::models::*;
use crate::{Database, DatabasePool};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(test, derive(Clone, fake::Dummy))]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
}

impl<'a> From<&'a ArtistForm> for artists::UpsertArtist<'a> {
    fn from(form: &'a ArtistForm) -> Self {
        Self {
            name: form.name.as_str().into(),
            city: form.city.as_str().into(),
            state: form.state.as_str().into(),
            phone: form.phone.as_deref().map(Cow::Borrowed),
            website: form.website.as_deref().map(Cow::Borrowed),
            facebook_link: form.facebook_link.as_deref().map(Cow::Borrowed),
            image_link: form.image_link.as_deref().map(Cow::Borrowed),
            seeking_venue: form.seeking_venue,
            seeking_description: form.seeking_description.as_deref().map(Cow::Borrowed),
        }
    }
}

pub async fn create_artist(
    pool: &DatabasePool,
    form: &ArtistForm,
) -> BookingResult<artists::Artist> {
    let genres = normalize(form.genres.clone());
    let mut conn = pool.get().await?;
    conn.transaction(|conn| {
        async move {
            let artist = diesel::insert_into(artists::table)
                .values(artists::UpsertArtist::from(form))
                .returning(artists::Artist::as_returning())
                .get_result::<artists::Artist>(conn)
                .await?;
            set_artist_genres(conn, artist.id, &genres).await?;
            Ok(artist)
        }
        .scope_boxed()
    })
    .await
}

pub async fn new_artist_form_handler() -> Json<ArtistForm> {
    Json(ArtistForm::default())
}

pub async fn create_artist_handler(
    State(database): State<Database>,
    flash: Flash,
    Form(form): Form<ArtistForm>,
) -> (CookieJar, Redirect) {
    let flash = match create_artist(&database.pool, &form).await {
        Ok(artist) => flash.notice(&concat_string!("Artist ", artist.name, " is now listed!")),
        Err(error) => {
            tracing::error!("{:?}", error);
            flash.notice(&concat_string!(
                "An error occurred. Artist ",
                form.name,
                " could not be listed."
            ))
        }
    };
    flash.redirect("/")
}
