use async_trait::async_trait;

use super::catalog_model::{Development, DevelopmentUpdate, NewDevelopment};
use crate::errors::Result;

/// Trait for catalog repository operations.
#[async_trait]
pub trait CatalogRepositoryTrait: Send + Sync {
    fn list_developments(&self) -> Result<Vec<Development>>;
    fn get_development(&self, development_id: &str) -> Result<Development>;
    async fn insert_new_development(&self, new_development: NewDevelopment) -> Result<Development>;
    async fn update_development(&self, update: DevelopmentUpdate) -> Result<Development>;
}

/// Trait for catalog service operations.
#[async_trait]
pub trait CatalogServiceTrait: Send + Sync {
    fn get_developments(&self) -> Result<Vec<Development>>;
    fn get_development(&self, development_id: &str) -> Result<Development>;
    async fn create_development(&self, new_development: NewDevelopment) -> Result<Development>;
    async fn update_development(&self, update: DevelopmentUpdate) -> Result<Development>;
}
