use clap::Parser;
use tokio::net::TcpListener;
use todo_server::{config::ServerConfig, logging, InMemoryTodoRepository};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let config = ServerConfig::parse();
    logging::init(&config.log_filter);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");

    todo_server::serve(listener, InMemoryTodoRepository::new().shared(), shutdown_signal()).await?;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
