//! Server Configuration
//!
//! Command-line flags with environment-variable fallbacks.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", version, about = "JSON-file backed todo server")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "TODO_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// JSON file holding the todo collection (created on first read)
    #[arg(long, env = "TODO_DB", default_value = "db.json")]
    pub db: PathBuf,

    /// Built UI directory served for non-API paths
    #[arg(long, env = "TODO_DIST", default_value = "dist")]
    pub dist: PathBuf,

    /// Directory for rolled log files
    #[arg(long, env = "TODO_LOG_DIR", default_value = "logs")]
    pub log_dir: PathBuf,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "TODO_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// UI directory, if it has been built
    pub fn dist_dir(&self) -> Option<&std::path::Path> {
        self.dist.join("index.html").is_file().then_some(self.dist.as_path())
    }
}
