//! Catalog domain models: developments and their unit types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Construction status of a development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DevelopmentStatus {
    EnPozo,
    EnConstruccion,
    EntregaInmediata,
}

impl DevelopmentStatus {
    pub fn as_db_str(&self) -> &'static str {
        match self {
            DevelopmentStatus::EnPozo => "en_pozo",
            DevelopmentStatus::EnConstruccion => "en_construccion",
            DevelopmentStatus::EntregaInmediata => "entrega_inmediata",
        }
    }

    pub fn from_db_str(value: &str) -> Result<Self> {
        match value {
            "en_pozo" => Ok(DevelopmentStatus::EnPozo),
            "en_construccion" => Ok(DevelopmentStatus::EnConstruccion),
            "entrega_inmediata" => Ok(DevelopmentStatus::EntregaInmediata),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown development status '{other}'"
            )))),
        }
    }
}

/// A unit-type variant within a development: bedroom count, area, price and
/// remaining availability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tipologia {
    pub ambientes: i32,
    /// Area in square meters.
    pub superficie: f64,
    pub precio: f64,
    pub disponibles: i32,
}

impl Tipologia {
    pub fn validate(&self) -> Result<()> {
        if self.ambientes <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Tipologia must have at least one ambiente".to_string(),
            )));
        }
        if self.superficie <= 0.0 || self.precio < 0.0 || self.disponibles < 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Tipologia surface, price and availability cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}

/// Domain model representing a real-estate development in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Development {
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: DevelopmentStatus,
    pub tipologias: Vec<Tipologia>,
    pub amenities: Vec<String>,
    /// Construction progress, 0-100.
    pub avance: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

fn validate_common(
    name: &str,
    location: &str,
    tipologias: &[Tipologia],
    avance: i32,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "name".to_string(),
        )));
    }
    if location.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "location".to_string(),
        )));
    }
    if !(0..=100).contains(&avance) {
        return Err(Error::Validation(ValidationError::OutOfRange {
            field: "avance".to_string(),
            min: 0,
            max: 100,
        }));
    }
    for tipologia in tipologias {
        tipologia.validate()?;
    }
    Ok(())
}

/// Input model for creating a development.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDevelopment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub location: String,
    pub status: DevelopmentStatus,
    #[serde(default)]
    pub tipologias: Vec<Tipologia>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub avance: i32,
}

impl NewDevelopment {
    pub fn validate(&self) -> Result<()> {
        validate_common(&self.name, &self.location, &self.tipologias, self.avance)
    }
}

/// Input model for updating a development.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevelopmentUpdate {
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: DevelopmentStatus,
    pub tipologias: Vec<Tipologia>,
    pub amenities: Vec<String>,
    pub avance: i32,
}

impl DevelopmentUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        validate_common(&self.name, &self.location, &self.tipologias, self.avance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_development() -> NewDevelopment {
        NewDevelopment {
            id: None,
            name: "Torre Alvear".to_string(),
            location: "Recoleta, CABA".to_string(),
            status: DevelopmentStatus::EnConstruccion,
            tipologias: vec![Tipologia {
                ambientes: 2,
                superficie: 58.0,
                precio: 185_000.0,
                disponibles: 4,
            }],
            amenities: vec!["pileta".to_string(), "gym".to_string()],
            avance: 65,
        }
    }

    #[test]
    fn status_uses_snake_case_wire_names() {
        assert_eq!(
            serde_json::to_string(&DevelopmentStatus::EnPozo).unwrap(),
            "\"en_pozo\""
        );
        assert_eq!(
            serde_json::from_str::<DevelopmentStatus>("\"entrega_inmediata\"").unwrap(),
            DevelopmentStatus::EntregaInmediata
        );
    }

    #[test]
    fn avance_outside_bounds_is_rejected() {
        let mut dev = new_development();
        dev.avance = 101;
        assert!(dev.validate().is_err());
        dev.avance = -1;
        assert!(dev.validate().is_err());
        dev.avance = 0;
        assert!(dev.validate().is_ok());
    }

    #[test]
    fn tipologia_bounds_are_enforced() {
        let mut dev = new_development();
        dev.tipologias[0].disponibles = -1;
        assert!(dev.validate().is_err());

        let mut dev = new_development();
        dev.tipologias[0].ambientes = 0;
        assert!(dev.validate().is_err());

        let mut dev = new_development();
        dev.tipologias[0].superficie = 0.0;
        assert!(dev.validate().is_err());
    }

    #[test]
    fn name_and_location_are_required() {
        let mut dev = new_development();
        dev.name = String::new();
        assert!(dev.validate().is_err());

        let mut dev = new_development();
        dev.location = "  ".to_string();
        assert!(dev.validate().is_err());
    }
}
