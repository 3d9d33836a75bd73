use concat_string::concat_string;
use diesel_async::{AsyncConnection, AsyncPgConnection};
use url::Url;
use uuid::Uuid;

use crate::{Database, DatabasePool};

/// A freshly created database with migrations applied, dropped again when the
/// test ends.
pub struct TemporaryDatabase {
    name: String,
    root_url: String,
    database: Database,
}

impl TemporaryDatabase {
    async fn new(root_url: String) -> Self {
        let name = Uuid::new_v4().to_string();
        let mut url = Url::parse(&root_url).expect("can not parse database url");
        url.set_path(&name);

        let mut root_conn = AsyncPgConnection::establish(&root_url)
            .await
            .expect("can not connect to the database");
        diesel_async::RunQueryDsl::execute(
            diesel::sql_query(concat_string!("CREATE DATABASE \"", name, "\";")),
            &mut root_conn,
        )
        .await
        .expect("can not create the temporary database");

        let database = Database::new(url.as_str()).await;
        Self { name, root_url, database }
    }

    pub async fn new_from_env() -> Self {
        Self::new(
            std::env::var("DATABASE_URL").expect("please set `DATABASE_URL` environment variable"),
        )
        .await
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn pool(&self) -> &DatabasePool {
        &self.database.pool
    }
}

#[cfg(not(target_env = "musl"))]
impl Drop for TemporaryDatabase {
    fn drop(&mut self) {
        use diesel::{Connection, PgConnection};

        let raw_statement =
            concat_string!("DROP DATABASE IF EXISTS \"", &self.name, "\" WITH (FORCE);");

        let mut conn = match PgConnection::establish(&self.root_url) {
            Ok(conn) => conn,
            Err(error) => {
                println!("{}", error);
                println!("please drop the database manually with '{}'", &raw_statement);
                return;
            }
        };
        if let Err(error) =
            diesel::RunQueryDsl::execute(diesel::sql_query(&raw_statement), &mut conn)
        {
            println!("{}", error);
            println!("please drop the database manually with '{}'", &raw_statement);
        }
    }
}
