use log::debug;
use std::sync::Arc;

use super::profiles_model::{AdminProfileUpdate, NewProfile, Profile, ProfileUpdate};
use super::profiles_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
use crate::errors::Result;

/// Service for managing team member profiles.
pub struct ProfileService {
    repository: Arc<dyn ProfileRepositoryTrait>,
}

impl ProfileService {
    pub fn new(repository: Arc<dyn ProfileRepositoryTrait>) -> Self {
        ProfileService { repository }
    }
}

#[async_trait::async_trait]
impl ProfileServiceTrait for ProfileService {
    fn get_profiles(&self) -> Result<Vec<Profile>> {
        self.repository.list_profiles()
    }

    fn get_profile(&self, profile_id: &str) -> Result<Profile> {
        self.repository.get_profile(profile_id)
    }

    fn get_by_email(&self, email: &str) -> Result<Profile> {
        self.repository.get_by_email(email)
    }

    fn get_password_hash(&self, profile_id: &str) -> Result<String> {
        self.repository.get_password_hash(profile_id)
    }

    fn count_profiles(&self) -> Result<i64> {
        self.repository.count_profiles()
    }

    async fn create_profile(
        &self,
        new_profile: NewProfile,
        password_hash: String,
    ) -> Result<Profile> {
        new_profile.validate()?;
        debug!("Creating profile for {}", new_profile.email);
        self.repository
            .insert_new_profile(new_profile, password_hash)
            .await
    }

    async fn update_profile(&self, profile_id: String, update: ProfileUpdate) -> Result<Profile> {
        update.validate()?;
        self.repository.update_profile(profile_id, update).await
    }

    async fn admin_update_profile(
        &self,
        profile_id: String,
        update: AdminProfileUpdate,
        password_hash: Option<String>,
    ) -> Result<Profile> {
        update.validate()?;
        self.repository
            .admin_update_profile(profile_id, update, password_hash)
            .await
    }

    async fn delete_profile(&self, profile_id: String) -> Result<usize> {
        self.repository.delete_profile(profile_id).await
    }
}
