use std::sync::Arc;

use beacon::app;
use beacon::services::probe::HttpUrlProber;
use beacon::services::store::{MongoStore, RecordStore};
use beacon::utils::{config::Settings, telemetry::init_tracing};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    init_tracing(settings.production);

    info!(db_name = %settings.db_name, "Starting Beacon");

    let store: Arc<dyn RecordStore> =
        Arc::new(MongoStore::connect(&settings.mongo_url, &settings.db_name).await?);
    let url_prober = Arc::new(HttpUrlProber::new()?);

    let app = app(Arc::clone(&store), url_prober, &settings.cors);

    let listener = TcpListener::bind(settings.bind_address).await?;
    info!("Server starting at http://{}", settings.bind_address);

    let served = axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await;

    if let Err(e) = &served {
        error!(error = %e, "Server terminated with error");
    }

    // in-flight requests have drained; the store goes last
    store.close().await;
    info!("Server shutdown complete");

    served.map_err(Into::into)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, stopping server");
}
