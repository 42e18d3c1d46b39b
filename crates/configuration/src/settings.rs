use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};

/// The root configuration structure for the service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
}

/// Where and how the HTTP server listens.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
    /// Largest request body accepted, in bytes.
    pub body_limit_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8080,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Connection pool parameters. The connection string itself never lives in a
/// config file; it is read from the environment variable named by `url_env`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub url_env: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url_env: "DB_CONN".to_string(),
            max_connections: 10,
            acquire_timeout_secs: 5,
        }
    }
}

/// Command-line overrides for the settings loaded from file and environment.
#[cfg(feature = "clap")]
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ServerArgs {
    /// Path to a TOML configuration file (default: ./albums.toml if present).
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Address to bind the HTTP server to.
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Port to bind the HTTP server to.
    #[arg(long, short)]
    pub port: Option<u16>,
}

#[cfg(feature = "clap")]
impl Settings {
    /// Flags given on the command line win over every other source.
    pub fn apply_args(&mut self, args: &ServerArgs) {
        if let Some(host) = args.host {
            self.server.host = host;
        }
        if let Some(port) = args.port {
            self.server.port = port;
        }
    }
}
