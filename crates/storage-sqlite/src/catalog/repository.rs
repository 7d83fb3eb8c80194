use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use super::model::DevelopmentDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::developments;
use crate::schema::developments::dsl::*;

use brickdesk_core::catalog::{
    CatalogRepositoryTrait, Development, DevelopmentUpdate, NewDevelopment,
};
use brickdesk_core::Result;

pub struct CatalogRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CatalogRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CatalogRepository { pool, writer }
    }
}

#[async_trait]
impl CatalogRepositoryTrait for CatalogRepository {
    fn list_developments(&self) -> Result<Vec<Development>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = developments
            .select(DevelopmentDB::as_select())
            .order(name.asc())
            .load::<DevelopmentDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(Development::try_from).collect()
    }

    fn get_development(&self, development_id: &str) -> Result<Development> {
        let mut conn = get_connection(&self.pool)?;
        let row = developments
            .select(DevelopmentDB::as_select())
            .find(development_id)
            .first::<DevelopmentDB>(&mut conn)
            .map_err(StorageError::from)?;
        Development::try_from(row)
    }

    async fn insert_new_development(
        &self,
        new_development: NewDevelopment,
    ) -> Result<Development> {
        self.writer
            .exec(move |conn| {
                let development_id = new_development
                    .id
                    .clone()
                    .unwrap_or_else(|| Uuid::new_v4().to_string());
                let row = DevelopmentDB::from_new(new_development, development_id)?;
                let inserted = diesel::insert_into(developments::table)
                    .values(&row)
                    .returning(DevelopmentDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Development::try_from(inserted)
            })
            .await
    }

    async fn update_development(&self, update: DevelopmentUpdate) -> Result<Development> {
        self.writer
            .exec(move |conn| {
                let existing = developments
                    .select(DevelopmentDB::as_select())
                    .find(&update.id)
                    .first::<DevelopmentDB>(conn)
                    .map_err(StorageError::from)?;

                let row = DevelopmentDB::from_update(update, existing.created_at)?;
                diesel::update(developments.find(&row.id))
                    .set(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Development::try_from(row)
            })
            .await
    }
}
