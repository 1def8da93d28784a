use std::sync::Arc;

use anyhow::{Context, Result};
use portfolio_contact::Notifier;
use portfolio_notification::EmailService;

use crate::{routes::AppState, showcase::Showcase};

pub async fn serve(
    config: crate::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting portfolio server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let notifier = EmailService::from_config(&config.email)
        .context("failed to initialize email service")?
        .map(|service| Arc::new(service) as Arc<dyn Notifier>);

    let contact = portfolio_contact::Command::new(notifier);
    tracing::info!(
        delivery = contact.delivery_enabled(),
        transport = %config.email.transport,
        "Contact form ready"
    );

    let showcase = tokio::task::spawn_blocking(Showcase::render)
        .await
        .context("scene rendering panicked")?;

    let state = AppState {
        config,
        contact,
        showcase: Arc::new(showcase),
    };

    let app = crate::routes::app(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(err = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(err = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}
