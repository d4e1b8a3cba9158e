//! Command-line and environment configuration for the server binary.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", version, about = "HTTP API for todo items backed by SQLite")]
pub struct ServerConfig {
    /// Interface to listen on.
    #[arg(long, env = "TODO_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3002)]
    pub port: u16,

    /// SQLite database file. Created if missing.
    #[arg(long, env = "TODO_DB_PATH", default_value = "todos.db")]
    pub db_path: PathBuf,

    /// Browser origin allowed to call the API.
    #[arg(long, env = "TODO_CORS_ORIGIN", default_value = "http://localhost:3000")]
    pub cors_origin: String,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
