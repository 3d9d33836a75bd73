use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use super::common::flash::Flash;

#[derive(Debug, Serialize)]
pub struct HomeBody {
    pub notices: Vec<String>,
}

pub async fn get_home_handler(flash: Flash) -> (CookieJar, Json<HomeBody>) {
    let (jar, notices) = flash.take();
    (jar, Json(HomeBody { notices }))
}

pub fn router() -> Router<crate::Database> {
    Router::new().route("/", get(get_home_handler))
}
