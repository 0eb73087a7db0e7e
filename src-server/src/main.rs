use clap::Parser;
use todo_server::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let _log_guard = rolling_logger::init_logger(&config.log_dir, "todo-server", &config.log_level)?;
    tracing::info!("todo-server {} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = todo_server::run(config).await {
        tracing::error!("server stopped: {:#}", e);
        return Err(e);
    }
    Ok(())
}
