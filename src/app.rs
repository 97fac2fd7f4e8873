//! Application entry point: argument parsing, environment loading, and
//! tracing setup, then hand-off to the server.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;

use crate::config::{DEFAULT_BIND, DEFAULT_MASTER_SECRET, DEFAULT_MAX_UPLOAD, ServiceConfig};
use crate::secret::{Secret, SecretBytes};
use crate::server;

#[derive(Parser)]
#[command(
    name = "cipherdrop",
    version,
    about = "File encryption service: AES-256-CBC, Triple-DES-CBC, and a labeled RSA-hybrid profile over HTTP."
)]
pub struct App {
    /// Socket address to listen on.
    #[arg(short, long, env = "CIPHERDROP_BIND", default_value = DEFAULT_BIND)]
    bind: SocketAddr,

    /// Master secret all keys are derived from. The default exists for
    /// compatibility with the reference deployment; override it.
    #[arg(long, env = "STATIC_ENCRYPTION_KEY", hide_env_values = true, default_value = DEFAULT_MASTER_SECRET)]
    master_secret: String,

    /// HS256 secret for the verify-token endpoint.
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    jwt_secret: Option<String>,

    /// Maximum accepted upload size in bytes.
    #[arg(long, env = "CIPHERDROP_MAX_UPLOAD", default_value_t = DEFAULT_MAX_UPLOAD)]
    max_upload: usize,
}

impl App {
    pub fn init() -> Result<Self> {
        dotenvy::dotenv().ok();

        let subscriber =
            tracing_subscriber::fmt().with_file(true).with_line_number(true).finish();
        tracing::subscriber::set_global_default(subscriber)?;

        Ok(Self::parse())
    }

    pub async fn execute(self) -> Result<()> {
        let config = ServiceConfig {
            bind: self.bind,
            master_secret: SecretBytes::new(self.master_secret.as_bytes()),
            jwt_secret: self.jwt_secret.map(Secret::from_string),
            max_upload: self.max_upload,
        };

        server::serve(config).await
    }
}
