use std::net::{Ipv4Addr, SocketAddr};

/// Environment variable holding the store location.
pub const DB_URL_ENV: &str = "FASTN_DB_URL";

/// The fixture always listens on localhost:5000.
pub const BIND_HOST: Ipv4Addr = Ipv4Addr::LOCALHOST;
pub const BIND_PORT: u16 = 5000;

/// Application configuration loaded from environment variables.
///
/// `database_url` is optional here: a missing store location only becomes an
/// error when a request needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Config {
            database_url: std::env::var(DB_URL_ENV).ok(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((BIND_HOST, BIND_PORT))
    }
}
