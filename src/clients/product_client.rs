use tracing::{debug, instrument};
use crate::domain::{Product, ProductId};
use crate::product_actor::ProductError;
use crate::actor_framework::ResourceClient;

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner.list().await.map_err(|e| ProductError::ActorCommunicationError(e.to_string()))
    }

    /// Stores the product and returns it as stored, with its final id.
    #[instrument(skip(self, product))]
    pub async fn create_product(&self, product: Product) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(product).await.map_err(|e| ProductError::ActorCommunicationError(e.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .get(id)
            .await
            .map_err(|e| ProductError::ActorCommunicationError(e.to_string()))?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), ProductError> {
        debug!("Sending shutdown request");
        self.inner.shutdown().await.map_err(|e| ProductError::ActorCommunicationError(e.to_string()))
    }
}
