pub mod create_artist;
pub mod get_artist;
pub mod list_artists;
pub mod search_artists;
pub mod update_artist;

use axum::routing::{get, post};
use axum::Router;

pub fn router() -> Router<crate::Database> {
    Router::new()
        .route("/artists", get(list_artists::list_artists_handler))
        .route("/artists/search", post(search_artists::search_artists_handler))
        .route(
            "/artists/create",
            get(create_artist::new_artist_form_handler).post(create_artist::create_artist_handler),
        )
        .route("/artists/:artist_id", get(get_artist::get_artist_handler))
        .route(
            "/artists/:artist_id/edit",
            get(update_artist::edit_artist_form_handler).post(update_artist::update_artist_handler),
        )
}
