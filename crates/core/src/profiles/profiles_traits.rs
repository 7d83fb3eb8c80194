use async_trait::async_trait;

use super::profiles_model::{AdminProfileUpdate, NewProfile, Profile, ProfileUpdate};
use crate::errors::Result;

/// Trait for profile repository operations.
///
/// Password hashes are write-only through this trait except for
/// `get_password_hash`, which the auth layer uses for login verification.
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    fn list_profiles(&self) -> Result<Vec<Profile>>;
    fn get_profile(&self, profile_id: &str) -> Result<Profile>;
    fn get_by_email(&self, email: &str) -> Result<Profile>;
    fn get_password_hash(&self, profile_id: &str) -> Result<String>;
    fn count_profiles(&self) -> Result<i64>;
    async fn insert_new_profile(
        &self,
        new_profile: NewProfile,
        password_hash: String,
    ) -> Result<Profile>;
    async fn update_profile(&self, profile_id: String, update: ProfileUpdate) -> Result<Profile>;
    async fn admin_update_profile(
        &self,
        profile_id: String,
        update: AdminProfileUpdate,
        password_hash: Option<String>,
    ) -> Result<Profile>;
    async fn delete_profile(&self, profile_id: String) -> Result<usize>;
}

/// Trait for profile service operations.
///
/// Password hashing happens above this trait (in the server's auth layer);
/// the service receives hashes, never plaintext.
#[async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    fn get_profiles(&self) -> Result<Vec<Profile>>;
    fn get_profile(&self, profile_id: &str) -> Result<Profile>;
    fn get_by_email(&self, email: &str) -> Result<Profile>;
    fn get_password_hash(&self, profile_id: &str) -> Result<String>;
    fn count_profiles(&self) -> Result<i64>;
    async fn create_profile(
        &self,
        new_profile: NewProfile,
        password_hash: String,
    ) -> Result<Profile>;
    async fn update_profile(&self, profile_id: String, update: ProfileUpdate) -> Result<Profile>;
    async fn admin_update_profile(
        &self,
        profile_id: String,
        update: AdminProfileUpdate,
        password_hash: Option<String>,
    ) -> Result<Profile>;
    async fn delete_profile(&self, profile_id: String) -> Result<usize>;
}
