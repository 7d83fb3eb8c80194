//! Database models for the development catalog.
//!
//! Unit types and amenities are stored as JSON text columns; the conversion
//! to the domain model parses them at the boundary.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use brickdesk_core::catalog::{Development, DevelopmentStatus, DevelopmentUpdate, NewDevelopment, Tipologia};
use brickdesk_core::errors::ValidationError;
use brickdesk_core::Error;

/// Database model for developments.
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::developments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct DevelopmentDB {
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: String,
    pub tipologias: String,
    pub amenities: String,
    pub avance: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn parse_json_column<T: serde::de::DeserializeOwned>(column: &str, raw: &str) -> Result<T, Error> {
    serde_json::from_str(raw).map_err(|e| {
        Error::Validation(ValidationError::InvalidInput(format!(
            "Malformed JSON in '{column}' column: {e}"
        )))
    })
}

impl TryFrom<DevelopmentDB> for Development {
    type Error = Error;

    fn try_from(db: DevelopmentDB) -> Result<Self, Self::Error> {
        Ok(Development {
            status: DevelopmentStatus::from_db_str(&db.status)?,
            tipologias: parse_json_column::<Vec<Tipologia>>("tipologias", &db.tipologias)?,
            amenities: parse_json_column::<Vec<String>>("amenities", &db.amenities)?,
            id: db.id,
            name: db.name,
            location: db.location,
            avance: db.avance,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl DevelopmentDB {
    pub fn from_new(new_development: NewDevelopment, development_id: String) -> Result<Self, Error> {
        let now = chrono::Utc::now().naive_utc();
        Ok(DevelopmentDB {
            id: development_id,
            name: new_development.name,
            location: new_development.location,
            status: new_development.status.as_db_str().to_string(),
            tipologias: serde_json::to_string(&new_development.tipologias)?,
            amenities: serde_json::to_string(&new_development.amenities)?,
            avance: new_development.avance,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn from_update(update: DevelopmentUpdate, created: NaiveDateTime) -> Result<Self, Error> {
        Ok(DevelopmentDB {
            id: update.id,
            name: update.name,
            location: update.location,
            status: update.status.as_db_str().to_string(),
            tipologias: serde_json::to_string(&update.tipologias)?,
            amenities: serde_json::to_string(&update.amenities)?,
            avance: update.avance,
            created_at: created,
            updated_at: chrono::Utc::now().naive_utc(),
        })
    }
}
