// Signal handling module
//
// SIGTERM and SIGINT stop the accept loop; in-flight requests finish in
// their own tasks.

use std::sync::Arc;

use tokio::sync::Notify;

use crate::logger;

/// Start the shutdown signal listener (Unix)
#[cfg(unix)]
pub fn start_signal_handler(shutdown: Arc<Notify>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => logger::log_shutdown_signal("SIGTERM"),
            _ = sigint.recv() => logger::log_shutdown_signal("SIGINT"),
        }

        shutdown.notify_waiters();
    });
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(shutdown: Arc<Notify>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            logger::log_shutdown_signal("Ctrl+C");
            shutdown.notify_waiters();
        }
    });
}
