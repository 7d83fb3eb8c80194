//! Database models for profiles.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use brickdesk_core::profiles::{Profile, Role};
use brickdesk_core::Error;

/// Database model for team member profiles.
///
/// Carries the password hash; conversion to the domain model drops it.
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::profiles)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct ProfileDB {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub email_confirmed: bool,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

// Parse at the boundary: unknown role strings are a storage-level error,
// not a silent default.
impl TryFrom<ProfileDB> for Profile {
    type Error = Error;

    fn try_from(db: ProfileDB) -> Result<Self, Self::Error> {
        Ok(Profile {
            role: Role::from_db_str(&db.role)?,
            id: db.id,
            email: db.email,
            full_name: db.full_name,
            avatar_url: db.avatar_url,
            phone: db.phone,
            email_confirmed: db.email_confirmed,
            created_at: db.created_at,
        })
    }
}
