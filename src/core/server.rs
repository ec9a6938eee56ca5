use crate::adapters::http::{build_router, AppState};
use crate::domain::ports::{ConfigProvider, UserStore};
use crate::utils::error::Result;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

pub struct AtsServer {
    router: Router,
    address: String,
}

impl AtsServer {
    pub fn new<S, C>(store: S, config: &C) -> Self
    where
        S: UserStore + 'static,
        C: ConfigProvider,
    {
        let state = AppState::new(store, config.static_dir());
        Self {
            router: build_router(state),
            address: format!("{}:{}", config.host(), config.port()),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub async fn run(self) -> Result<()> {
        tracing::info!("Binding to {}", self.address);
        let listener = TcpListener::bind(&self.address).await?;
        tracing::info!("🚀 Server running on {}", listener.local_addr()?);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shut down");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("❌ Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("❌ Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
