pub mod create_venue;
pub mod delete_venue;
pub mod get_venue;
pub mod list_venues;
pub mod search_venues;
pub mod update_venue;

use axum::routing::{get, post};
use axum::Router;

pub fn router() -> Router<crate::Database> {
    Router::new()
        .route("/venues", get(list_venues::list_venues_handler))
        .route("/venues/search", post(search_venues::search_venues_handler))
        .route(
            "/venues/create",
            get(create_venue::new_venue_form_handler).post(create_venue::create_venue_handler),
        )
        .route(
            "/venues/:venue_id",
            get(get_venue::get_venue_handler).delete(delete_venue::delete_venue_handler),
        )
        .route(
            "/venues/:venue_id/edit",
            get(update_venue::edit_venue_form_handler).post(update_venue::update_venue_handler),
        )
}
