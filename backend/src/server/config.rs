//! Startup configuration read from the environment.

use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;

pub const DEFAULT_LISTINGS_PATH: &str = "data/rooms.json";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub listings_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let listings_path = std::env::var("LISTINGS_PATH").unwrap_or(DEFAULT_LISTINGS_PATH.to_string());
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or(DEFAULT_BIND_ADDR.to_string());
        Self::from_values(listings_path, &bind_addr)
    }

    fn from_values(listings_path: impl Into<PathBuf>, bind_addr: &str) -> anyhow::Result<Self> {
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("BIND_ADDR is not a socket address: {}", bind_addr))?;
        Ok(Self { listings_path: listings_path.into(), bind_addr })
    }
}
