//! Server module
//!
//! Listener setup and the accept loop.

mod connection;
mod listener;

pub use connection::accept_connection;
pub use listener::create_reusable_listener;

use crate::config::AppState;
use crate::logger;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Run the accept loop until Ctrl+C.
///
/// Each accepted connection is handled in its own task; the loop itself
/// only accepts and dispatches.
pub async fn run(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = tokio::signal::ctrl_c() => {
                println!("\nShutdown signal received, closing listener");
                return Ok(());
            }
        }
    }
}
