//! Gateway server entry point.

use gateway::config::{Config, LogSettings};
use tokio::signal;
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

fn init_tracing(settings: &LogSettings) {
    let filter = EnvFilter::try_new(&settings.level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(settings.json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!settings.json).then(tracing_subscriber::fmt::layer))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load .env (if any) and initialize tracing
    dotenvy::dotenv().ok();
    init_tracing(&LogSettings::from_env());

    // 2. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    // 3. Resolve configuration
    let config = Config::from_env().inspect_err(|err| {
        tracing::error!(error = %err, "invalid configuration");
    })?;

    // 4. Start one listener per selected gateway
    let (stop_tx, stop_rx) = watch::channel(false);
    let mut servers = JoinSet::new();

    for settings in &config.gateways {
        let app = gateway::create_app(settings, metrics_handle.clone())?;
        let addr = config.addr(settings);
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!(
            portal = %settings.portal,
            %addr,
            sap = %settings.sap.base_url,
            "starting gateway"
        );

        let portal = settings.portal;
        let mut stop = stop_rx.clone();
        servers.spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = stop.wait_for(|stopping| *stopping).await;
                })
                .await;
            (portal, result)
        });
    }

    // 5. Fan the shutdown signal out to every gateway
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = stop_tx.send(true);
    });

    while let Some(joined) = servers.join_next().await {
        let (portal, result) = joined?;
        match result {
            Ok(()) => tracing::info!(%portal, "gateway shut down gracefully"),
            Err(err) => tracing::error!(%portal, error = %err, "gateway server error"),
        }
    }

    Ok(())
}
