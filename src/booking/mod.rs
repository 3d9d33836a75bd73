pub mod artist;
pub mod common;
pub mod home;
pub mod show;
pub mod venue;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use self::common::error::BookingError;
use crate::Database;

async fn fallback() -> BookingError {
    BookingError::NotFound("the requested page does not exist".into())
}

pub fn build(database: Database) -> Router {
    Router::new()
        .merge(home::router())
        .merge(venue::router())
        .merge(artist::router())
        .merge(show::router())
        .fallback(fallback)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(database)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::utils::test::http::to_bytes;
    use crate::utils::test::Infra;

    #[tokio::test]
    async fn test_unmatched_route_renders_not_found() {
        let infra = Infra::new().await;
        let app = build(infra.database().clone());

        let response = app
            .oneshot(Request::builder().uri("/admin").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_flash_notice_round_trip() {
        let infra = Infra::new().await;
        let app = build(infra.database().clone());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/venues/create")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("name=The+Musical+Hop&city=San+Francisco&state=CA"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_owned();

        // the notice is surfaced exactly once by the next home view
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let removal = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_owned();
        assert!(removal.starts_with("marquee_flash=;"));
        let body: serde_json::Value = serde_json::from_slice(&to_bytes(response).await).unwrap();
        assert_eq!(body["notices"], serde_json::json!(["Venue The Musical Hop is now listed!"]));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&to_bytes(response).await).unwrap();
        assert_eq!(body["notices"], serde_json::Value::Array(vec![]));
    }
}
