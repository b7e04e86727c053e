use std::sync::Arc;

use tokio::sync::Notify;

mod config;
mod db;
mod handler;
mod http;
mod logger;
mod routing;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    // Build the Tokio runtime, honoring the workers setting
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    // The store must answer a liveness query before the listener binds;
    // an unreachable store aborts startup
    let pool = match db::connect(&cfg.database).await {
        Ok(pool) => pool,
        Err(e) => {
            logger::log_error(&format!("Database connection failed: {e}"));
            std::process::exit(1);
        }
    };
    match db::check_liveness(&pool).await {
        Ok(now) => logger::log_db_connected(&now),
        Err(e) => {
            logger::log_error(&format!("Database connection failed: {e}"));
            std::process::exit(1);
        }
    }

    let listener = server::create_listener(addr)?;
    let state = Arc::new(config::AppState::new(cfg, pool));
    let shutdown = Arc::new(Notify::new());

    server::signal::start_signal_handler(Arc::clone(&shutdown));
    logger::log_server_start(&addr, &state.config);

    server::run(listener, state, shutdown).await;
    Ok(())
}
