use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::api::routes::build_router;
use crate::store::FileStore;

/// The directory API server.
///
/// `try_bind()` binds and keeps the listener so another process cannot
/// claim the port between binding and serving; `run()` consumes the
/// server and serves until shutdown is signalled.
pub struct ApiServer {
    pub addr: SocketAddr,
    listener: Option<TcpListener>,
    store: Arc<FileStore>,
    shutdown: Arc<Notify>,
}

impl ApiServer {
    pub fn new(store: Arc<FileStore>) -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)), // determined at bind time
            listener: None,
            store,
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Bind to `bind_addr` and return the actual bound address (relevant
    /// when the configured port is 0).
    pub async fn try_bind(&mut self, bind_addr: &str) -> Result<SocketAddr, std::io::Error> {
        let listener = TcpListener::bind(bind_addr).await?;
        let addr = listener.local_addr()?;
        self.addr = addr;
        self.listener = Some(listener);
        tracing::info!(%addr, store = %self.store.path().display(), "api bound");
        Ok(addr)
    }

    /// Handle that can stop the server from another task.
    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Serve requests until [`ServerHandle::shutdown`] is called.
    ///
    /// Call `try_bind()` first; running an unbound server is an error.
    pub async fn run(self) -> Result<(), std::io::Error> {
        let listener = self.listener.ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "try_bind() must be called before run()",
            )
        })?;

        tracing::info!(addr = %self.addr, "serving directory api");

        let app = build_router(self.store);
        let shutdown = self.shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown.notified().await;
            })
            .into_future()
            .await?;

        tracing::info!("api shut down");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ServerHandle {
    shutdown: Arc<Notify>,
}

impl ServerHandle {
    pub fn shutdown(&self) {
        // notify_one stores a permit, so a shutdown signalled before the
        // server reaches its wait point is not lost.
        self.shutdown.notify_one();
    }
}
