use std::sync::Arc;

use super::catalog_model::{Development, DevelopmentUpdate, NewDevelopment};
use super::catalog_traits::{CatalogRepositoryTrait, CatalogServiceTrait};
use crate::errors::Result;

/// Service for the development catalog.
pub struct CatalogService {
    repository: Arc<dyn CatalogRepositoryTrait>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn CatalogRepositoryTrait>) -> Self {
        CatalogService { repository }
    }
}

#[async_trait::async_trait]
impl CatalogServiceTrait for CatalogService {
    fn get_developments(&self) -> Result<Vec<Development>> {
        self.repository.list_developments()
    }

    fn get_development(&self, development_id: &str) -> Result<Development> {
        self.repository.get_development(development_id)
    }

    async fn create_development(&self, new_development: NewDevelopment) -> Result<Development> {
        new_development.validate()?;
        self.repository
            .insert_new_development(new_development)
            .await
    }

    async fn update_development(&self, update: DevelopmentUpdate) -> Result<Development> {
        update.validate()?;
        self.repository.update_development(update).await
    }
}
