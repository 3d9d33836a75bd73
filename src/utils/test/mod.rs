pub mod db;
pub mod http;

pub use db::TemporaryDatabase;
pub use infra::Infra;
