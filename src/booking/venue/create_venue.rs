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
use super::super::common::genres::{normalize, set_venue_genres};
use crate::models::*;
use crate::{Database, DatabasePool};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(test, derive(Clone, fake::Dummy))]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub genres: Vec<String>,
}

impl<'a> From<&'a VenueForm> for venues::UpsertVenue<'a> {
    fn from(form: &'a VenueForm) -> Self {
        Self {
            name: form.name.as_str().into(),
            address: form.address.as_deref().map(Cow::Borrowed),
            city: form.city.as_str().into(),
            state: form.state.as_str().into(),
            phone: form.phone.as_deref().map(Cow::Borrowed),
            website: form.website.as_deref().map(Cow::Borrowed),
            facebook_link: form.facebook_link.as_deref().map(Cow::Borrowed),
            image_link: form.image_link.as_deref().map(Cow::Borrowed),
            seeking_talent: form.seeking_talent,
            seeking_description: form.seeking_description.as_deref().map(Cow::Borrowed),
        }
    }
}

pub async fn create_venue(pool: &DatabasePool, form: &VenueForm) -> BookingResult<venues::Venue> {
    let genres = normalize(form.genres.clone());
    let mut conn = pool.get().await?;
    conn.transaction(|conn| {
        async move {
            let venue = diesel::insert_into(venues::table)
                .values(venues::UpsertVenue::from(form))
                .returning(venues::Venue::as_returning())
                .get_result::<venues::Venue>(conn)
                .await?;
            set_venue_genres(conn, venue.id, &genres).await?;
            Ok(venue)
        }
        .scope_boxed()
    })
    .await
}

pub async fn new_venue_form_handler() -> Json<VenueForm> {
    Json(VenueForm::default())
}

pub async fn create_venue_handler(
    State(database): State<Database>,
    flash: Flash,
    Form(form): Form<VenueForm>,
) -> (CookieJar, Redirect) {
    let flash = match create_venue(&database.pool, &form).await {
        Ok(venue) => flash.notice(&concat_string!("Venue ", venue.name, " is now listed!")),
        Err(error) => {
            tracing::error!("{:?}", error);
            flash.notice(&concat_string!(
                "An error occurred. Venue ",
                form.name,
                " could not be listed."
            ))
        }
    };
    flash.redirect("/")
}

#[cfg(test)]
mod tests {
    use fake::{Fake, Faker};

    use super::super::super::common::genres::venue_genre_values;
    use super::*;
    use crate::utils::test::Infra;

    #[tokio::test]
    async fn test_create_venue_persists_fields() {
        let infra = Infra::new().await;
        let form: VenueForm = Faker.fake();

        let venue = create_venue(infra.pool(), &form).await.unwrap();
        assert_eq!(venue.name, form.name);
        assert_eq!(venue.city, form.city);
        assert_eq!(venue.state, form.state);
        assert_eq!(venue.address, form.address);
        assert_eq!(venue.phone, form.phone);
        assert_eq!(venue.seeking_talent, form.seeking_talent);
    }

    #[tokio::test]
    async fn test_create_venue_normalizes_genres() {
        let infra = Infra::new().await;
        let form = VenueForm {
            genres: vec!["Rock".to_owned(), "Blues".to_owned(), "Rock".to_owned()],
            ..Faker.fake()
        };

        let venue = create_venue(infra.pool(), &form).await.unwrap();
        let genres = venue_genre_values(&mut infra.pool().get().await.unwrap(), venue.id)
            .await
            .unwrap();
        assert_eq!(genres, vec!["Blues".to_owned(), "Rock".to_owned()]);
    }

    #[tokio::test]
    async fn test_create_venue_reuses_genre_rows() {
        let infra = Infra::new().await;
        let genres = vec!["Jazz".to_owned()];

        create_venue(infra.pool(), &VenueForm { genres: genres.clone(), ..Faker.fake() })
            .await
            .unwrap();
        create_venue(infra.pool(), &VenueForm { genres, ..Faker.fake() })
            .await
            .unwrap();

        let count = {
            use diesel::{ExpressionMethods, QueryDsl};
            genres::table
                .filter(genres::value.eq("Jazz"))
                .count()
                .get_result::<i64>(&mut infra.pool().get().await.unwrap())
                .await
                .unwrap()
        };
        assert_eq!(count, 1);
    }
}
