//! # mushroom-server
//!
//! HTTP front end for `mushroom-core`.
//!
//! The server holds no state of its own: every request is scored
//! independently against the immutable tables in the core crate, so axum is
//! free to handle requests concurrently.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mushroom_server::{serve, ServerConfig};
//!
//! let config = ServerConfig::default().with_port(8080);
//! serve(&config).await?;
//! ```

pub mod config;
pub mod routes;

pub use config::{ConfigError, ServerConfig};
pub use routes::router;

use std::future::Future;
use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

/// Errors from running the server.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig) -> Result<(), ServerError> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    serve_with_shutdown(listener, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve_with_shutdown<F>(listener: TcpListener, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr: Option<SocketAddr> = listener.local_addr().ok();
    tracing::info!(addr = ?local_addr, "Listening");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C. If the handler cannot be installed the server runs
/// until killed.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown requested"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tokio::sync::oneshot;

    async fn raw_request(addr: SocketAddr, request: String) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = Vec::new();
        stream.read_to_end(&mut response).await.unwrap();
        String::from_utf8(response).unwrap()
    }

    fn post(body: &str) -> String {
        format!(
            "POST /score HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        )
    }

    #[tokio::test]
    async fn test_serve_over_tcp_and_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let server = tokio::spawn(serve_with_shutdown(listener, async move {
            let _ = shutdown_rx.await;
        }));

        let ok = raw_request(
            addr,
            post(r#"{"odor":"n","stalk_root":"c","stalk_surface_below_ring":"y","spore_print_color":"r"}"#),
        )
        .await;
        assert!(ok.starts_with("HTTP/1.1 200"), "{ok}");
        assert!(ok.ends_with("\r\n\r\n1"), "{ok}");

        let rejected = raw_request(addr, post("")).await;
        assert!(rejected.starts_with("HTTP/1.1 400"), "{rejected}");
        assert!(rejected.contains("Missing columns"));

        shutdown_tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_bind_failure_is_reported() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();
        let config = ServerConfig::default().with_port(port);

        let err = serve(&config).await.unwrap_err();
        assert!(matches!(err, ServerError::Bind { .. }));
        assert!(err.to_string().contains(&config.bind_addr()));
    }
}
