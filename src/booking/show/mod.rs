pub mod counts;
pub mod create_show;
pub mod list_shows;

use axum::routing::get;
use axum::Router;

pub fn router() -> Router<crate::Database> {
    Router::new()
        .route("/shows", get(list_shows::list_shows_handler))
        .route(
            "/shows/create",
            get(create_show::new_show_form_handler).post(create_show::create_show_handler),
        )
}
