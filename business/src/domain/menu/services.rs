use async_trait::async_trait;

use super::errors::MenuError;
use super::model::MenuItem;

/// Service port for generating a restaurant's menu on demand.
///
/// The provider is opaque: any failure (network, credentials, malformed
/// response) surfaces as `MenuError::GenerationFailed`.
#[async_trait]
pub trait MenuGeneratorService: Send + Sync {
    async fn generate(&self, restaurant_name: &str) -> Result<Vec<MenuItem>, MenuError>;
}
