// Server module entry point
// Listener construction, the accept loop and connection handling

pub mod connection;
pub mod listener;
pub mod signal;

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::config::AppState;
use crate::logger;

pub use listener::create_listener;

/// Accept connections until a shutdown signal arrives.
///
/// In-flight requests keep running in their own tasks after the loop
/// stops; only the listener closes here.
pub async fn run(listener: TcpListener, state: Arc<AppState>, shutdown: Arc<Notify>) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => {
                logger::log_server_stop();
                break;
            }
        }
    }
}
