use std::net::{IpAddr, SocketAddr};

use derivative::Derivative;
use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "MARQUEE_";

#[derive(Debug, Serialize, Deserialize, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct ServerConfig {
    #[derivative(Default(value = "[127u8, 0u8, 0u8, 1u8].into()"))]
    pub host: IpAddr,
    #[derivative(Default(value = "5000"))]
    pub port: u16,
}

#[derive(Deserialize, Derivative)]
#[derivative(Debug)]
pub struct DatabaseConfig {
    #[derivative(Debug = "ignore")]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Config {
    pub fn new() -> Self {
        Figment::new()
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .join(Serialized::default("server", ServerConfig::default()))
            .extract()
            .expect("can not parse initial config")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bind_addr() {
        let server_config = ServerConfig::default();
        assert_eq!(server_config.bind_addr().to_string(), "127.0.0.1:5000");
    }
}
