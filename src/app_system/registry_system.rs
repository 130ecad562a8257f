use tracing::{error, info, instrument};
use crate::actor_framework::ResourceActor;
use crate::clients::ProductClient;
use crate::domain::Product;
use super::config::RegistryConfig;
use super::error::SystemError;

/// Owns the product actor for the lifetime of the process.
///
/// Responsible for starting the actor, handing out its client, and handling
/// shutdown.
pub struct RegistrySystem {
    pub product_client: ProductClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RegistrySystem {
    /// Spawns the product actor. Must be called inside a tokio runtime.
    #[instrument(name = "registry_system", skip(config), fields(id_policy = %config.id_policy))]
    pub fn new(config: &RegistryConfig) -> Self {
        info!("Starting registry system");

        let (product_actor, product_resource_client) =
            ResourceActor::<Product>::new(config.mailbox_size, config.id_policy.assignment());
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        info!("Registry system started successfully");

        Self {
            product_client,
            handles: vec![product_handle],
        }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down registry system");

        // The actor may already be gone if every client was dropped.
        let _ = self.product_client.shutdown().await;

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(SystemError::ActorTask(e.to_string()));
            }
        }

        info!("Registry system shutdown complete");
        Ok(())
    }
}
