//! Server Configuration
//!
//! Command-line flags, each of which can also be supplied through an
//! environment variable.

use anyhow::Context;
use axum::http::HeaderValue;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8000;
/// Frontend dev servers allowed to call the API by default.
pub const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://0.0.0.0:3000",
];
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Parser)]
#[command(name = "legal-doc-search")]
#[command(about = "Legal Document Search API server", long_about = None)]
#[command(version)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "LEGAL_SEARCH_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// HTTP port
    #[arg(short, long, env = "LEGAL_SEARCH_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Browser origins allowed by the CORS policy (comma separated)
    #[arg(
        long,
        env = "LEGAL_SEARCH_CORS_ORIGINS",
        value_delimiter = ',',
        default_values = DEFAULT_CORS_ORIGINS
    )]
    pub cors_origins: Vec<String>,

    /// Default log filter, used when RUST_LOG is not set
    #[arg(long, env = "LEGAL_SEARCH_LOG", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Parses the configured CORS origins into header values.
    pub fn allowed_origins(&self) -> anyhow::Result<Vec<HeaderValue>> {
        self.cors_origins
            .iter()
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .with_context(|| format!("Invalid CORS origin: {:?}", origin))
            })
            .collect()
    }
}
