use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use super::model::ProfileDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::profiles;
use crate::schema::profiles::dsl::*;

use brickdesk_core::profiles::{
    AdminProfileUpdate, NewProfile, Profile, ProfileRepositoryTrait, ProfileUpdate,
};
use brickdesk_core::Result;

pub struct ProfileRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ProfileRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ProfileRepository { pool, writer }
    }
}

#[async_trait]
impl ProfileRepositoryTrait for ProfileRepository {
    fn list_profiles(&self) -> Result<Vec<Profile>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = profiles
            .select(ProfileDB::as_select())
            .order(full_name.asc())
            .load::<ProfileDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(Profile::try_from).collect()
    }

    fn get_profile(&self, profile_id: &str) -> Result<Profile> {
        let mut conn = get_connection(&self.pool)?;
        let row = profiles
            .select(ProfileDB::as_select())
            .find(profile_id)
            .first::<ProfileDB>(&mut conn)
            .map_err(StorageError::from)?;
        Profile::try_from(row)
    }

    fn get_by_email(&self, email_param: &str) -> Result<Profile> {
        let mut conn = get_connection(&self.pool)?;
        let row = profiles
            .select(ProfileDB::as_select())
            .filter(email.eq(email_param))
            .first::<ProfileDB>(&mut conn)
            .map_err(StorageError::from)?;
        Profile::try_from(row)
    }

    fn get_password_hash(&self, profile_id: &str) -> Result<String> {
        let mut conn = get_connection(&self.pool)?;
        let hash = profiles
            .find(profile_id)
            .select(password_hash)
            .first::<String>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(hash)
    }

    fn count_profiles(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        let count = profiles
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(count)
    }

    async fn insert_new_profile(
        &self,
        new_profile: NewProfile,
        hash: String,
    ) -> Result<Profile> {
        self.writer
            .exec(move |conn| {
                let row = ProfileDB {
                    id: new_profile.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                    email: new_profile.email.trim().to_lowercase(),
                    full_name: new_profile.full_name,
                    role: new_profile.role.as_db_str().to_string(),
                    avatar_url: None,
                    phone: new_profile.phone,
                    // Admin invites skip the confirmation email.
                    email_confirmed: true,
                    password_hash: hash,
                    created_at: chrono::Utc::now().naive_utc(),
                };
                let inserted = diesel::insert_into(profiles::table)
                    .values(&row)
                    .returning(ProfileDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Profile::try_from(inserted)
            })
            .await
    }

    async fn update_profile(&self, profile_id: String, update: ProfileUpdate) -> Result<Profile> {
        self.writer
            .exec(move |conn| {
                let mut row = profiles
                    .select(ProfileDB::as_select())
                    .find(&profile_id)
                    .first::<ProfileDB>(conn)
                    .map_err(StorageError::from)?;

                if let Some(name) = update.full_name {
                    row.full_name = name;
                }
                if let Some(new_phone) = update.phone {
                    row.phone = Some(new_phone);
                }
                if let Some(new_avatar) = update.avatar_url {
                    row.avatar_url = Some(new_avatar);
                }

                diesel::update(profiles.find(&profile_id))
                    .set(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Profile::try_from(row)
            })
            .await
    }

    async fn admin_update_profile(
        &self,
        profile_id: String,
        update: AdminProfileUpdate,
        hash: Option<String>,
    ) -> Result<Profile> {
        self.writer
            .exec(move |conn| {
                let mut row = profiles
                    .select(ProfileDB::as_select())
                    .find(&profile_id)
                    .first::<ProfileDB>(conn)
                    .map_err(StorageError::from)?;

                if let Some(new_role) = update.role {
                    row.role = new_role.as_db_str().to_string();
                }
                if let Some(new_email) = update.email {
                    row.email = new_email.trim().to_lowercase();
                }
                if let Some(name) = update.full_name {
                    row.full_name = name;
                }
                if let Some(new_phone) = update.phone {
                    row.phone = Some(new_phone);
                }
                if let Some(new_hash) = hash {
                    row.password_hash = new_hash;
                }

                diesel::update(profiles.find(&profile_id))
                    .set(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Profile::try_from(row)
            })
            .await
    }

    async fn delete_profile(&self, profile_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn| {
                Ok(diesel::delete(profiles.find(profile_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
