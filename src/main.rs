use marquee::config::Config;
use marquee::{booking, Database};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marquee=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::new();
    tracing::info!("configuration: {:?}", config);

    let database = Database::new(&config.database.url).await;

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr())
        .await
        .expect("can not bind to the server address");
    tracing::info!(
        "listening on {}",
        listener.local_addr().expect("can not get the local address")
    );
    axum::serve(listener, booking::build(database)).await.expect("can not serve the application");
}
