mod domain;
mod clients;

mod api;
mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod product_actor;

use tracing::{error, info};
use crate::app_system::{setup_tracing, AppConfig, RegistrySystem, SystemError};

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    let config = AppConfig::from_env()?;

    // Setup tracing once for the entire application
    setup_tracing(&config.logging.level);

    info!(id_policy = %config.registry.id_policy, "Starting product registry");

    let system = RegistrySystem::new(&config.registry);

    let address = config.server.socket_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|source| SystemError::Bind { address: address.clone(), source })?;

    info!(bind_address = %address, "HTTP server listening");

    let served = axum::serve(listener, api::router(system.product_client.clone()))
        .with_graceful_shutdown(wait_for_shutdown())
        .await;

    if let Err(e) = &served {
        error!(error = %e, "HTTP server terminated unexpectedly");
    }

    // Shutdown system gracefully
    system.shutdown().await?;
    served.map_err(SystemError::Serve)?;

    info!("Product registry stopped");
    Ok(())
}

async fn wait_for_shutdown() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Could not listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
