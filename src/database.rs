use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::AsyncPgConnection;

use crate::migration;

pub type DatabasePool = diesel_async::pooled_connection::deadpool::Pool<AsyncPgConnection>;
pub type DatabaseConnection = diesel_async::pooled_connection::deadpool::Object<AsyncPgConnection>;

#[derive(Clone)]
pub struct Database {
    pub pool: DatabasePool,
}

impl Database {
    pub async fn new(url: &str) -> Self {
        let pool =
            DatabasePool::builder(AsyncDieselConnectionManager::<AsyncPgConnection>::new(url))
                .build()
                .expect("can not connect to the database");
        migration::run_pending_migrations(url).await;
        Self { pool }
    }
}
