// Server loop module
// Accepts connections until a shutdown signal arrives

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config;
use crate::logger;

/// How long to wait for in-flight connections after shutdown
const DRAIN_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Server accept loop.
///
/// Accepts connections until the shutdown signal fires, then waits up to
/// `DRAIN_TIMEOUT` for in-flight connections to finish before returning.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<config::AppState>,
    active_connections: Arc<AtomicUsize>,
    shutdown: Arc<Notify>,
) -> Result<(), Box<dyn std::error::Error>> {
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

            () = shutdown.notified() => {
                logger::log_shutdown(active_connections.load(Ordering::SeqCst));
                break;
            }
        }
    }

    // Stop accepting, then give in-flight connections a bounded window
    drop(listener);
    drain_connections(&active_connections).await;
    Ok(())
}

/// Wait for active connections to finish, up to `DRAIN_TIMEOUT`.
async fn drain_connections(active_connections: &Arc<AtomicUsize>) {
    let drain_deadline = tokio::time::Instant::now() + DRAIN_TIMEOUT;

    while active_connections.load(Ordering::SeqCst) > 0 {
        if tokio::time::Instant::now() >= drain_deadline {
            logger::log_warning(&format!(
                "Drain window elapsed with {} connection(s) still active",
                active_connections.load(Ordering::SeqCst)
            ));
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }
}
