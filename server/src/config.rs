//! Command line and environment configuration for the server binary.

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server")]
#[command(about = "Todo CRUD HTTP server")]
#[command(version)]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// tracing filter directives
    #[arg(long, env = "RUST_LOG", default_value = "todo_server=info,tower_http=info")]
    pub log_filter: String,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
