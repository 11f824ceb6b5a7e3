//! Server configuration from command-line flags and environment.

use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// todo-server: REST API and static host for the to-do list application
#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "TODO_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "TODO_PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite database file
    #[arg(short, long, env = "TODO_DATABASE", default_value = "todos.db")]
    pub database: PathBuf,

    /// Origin allowed to call the API from a browser
    #[arg(long, env = "TODO_ALLOWED_ORIGIN", default_value = "http://localhost:5173")]
    pub allowed_origin: String,

    /// Directory holding the built front end
    #[arg(long, env = "TODO_STATIC_DIR", default_value = "../frontend/dist")]
    pub static_dir: PathBuf,
}

impl Config {
    /// Socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
