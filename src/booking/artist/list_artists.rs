use axum::extract::State;
use axum::Json;
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use itertools::Itertools;
use serde::Serialize;
use uuid::Uuid;

use super::super::common::error::BookingResult;
use crate::models::*;
use crate::{Database, DatabasePool};

#[derive(Debug, Serialize)]
pub struct ArtistEntry {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ArtistsBody {
    pub artists: Vec<ArtistEntry>,
}

pub async fn list_artists(pool: &DatabasePool) -> BookingResult<Vec<ArtistEntry>> {
    Ok(artists::table
        .select((artists::id, artists::name))
        .order(artists::name.asc())
        .get_results::<(Uuid, String)>(&mut pool.get().await?)
        .await?
        .into_iter()
        .map(|(id, name)| ArtistEntry { id, name })
        .collect_vec())
}

pub async fn list_artists_handler(
    State(database): State<Database>,
) -> BookingResult<Json<ArtistsBody>> {
    Ok(Json(ArtistsBody { artists: list_artists(&database.pool).await? }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test::Infra;

    #[tokio::test]
    async fn test_list_artists_is_ordered_by_name() {
        let infra = Infra::new()
            .await
            .add_artist_named("The Wild Sax Band")
            .await
            .add_artist_named("Guns N Petals")
            .await
            .add_artist_named("Matt Quevedo")
            .await;

        let entries = list_artists(infra.pool()).await.unwrap();
        assert_eq!(
            entries.iter().map(|artist| artist.name.as_str()).collect_vec(),
            vec!["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"]
        );
        assert_eq!(entries.iter().map(|artist| artist.id).sorted().collect_vec(), infra.artist_ids(..));
    }
}
