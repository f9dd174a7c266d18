//! Command-line and environment settings, read once at startup.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "json-mock-api", version, about = "Mock REST API backed by a single JSON file")]
pub struct Settings {
    /// Data file holding the collections; loaded on every request, saved after writes.
    #[arg(short, long, default_value = "data.json")]
    pub config: PathBuf,

    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Address or host name to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,
}

impl Settings {
    pub fn addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
