//! Service catalog read at startup.
//!
//! The catalog is supplied by the host (database export, static YAML) and is
//! treated as read-only for the lifetime of the process.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

const BUNDLED_CATALOG: &str = include_str!("../../../data/services.yaml");

/// Errors raised while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Duplicate service id in catalog: {0}")]
    DuplicateId(String),

    #[error("Service '{id}' is invalid: {reason}")]
    InvalidService { id: String, reason: String },
}

/// How a service is priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    Hour,
    Piece,
    SquareMeter,
    Meter,
    Fixed,
}

impl PriceUnit {
    /// Price label shown after an amount, e.g. "450 kr/st".
    pub fn label(&self) -> &'static str {
        match self {
            PriceUnit::Hour => "kr/tim",
            PriceUnit::Piece => "kr/st",
            PriceUnit::SquareMeter => "kr/m²",
            PriceUnit::Meter => "kr/m",
            PriceUnit::Fixed => "kr",
        }
    }

    /// Quantity label, e.g. "6 st" or "3 timmar".
    pub fn quantity_label(&self, quantity: u32) -> String {
        match self {
            PriceUnit::Hour if quantity == 1 => "1 timme".to_string(),
            PriceUnit::Hour => format!("{} timmar", quantity),
            PriceUnit::Piece => format!("{} st", quantity),
            PriceUnit::SquareMeter => format!("{} m²", quantity),
            PriceUnit::Meter => format!("{} m", quantity),
            PriceUnit::Fixed => "fast pris".to_string(),
        }
    }

    /// Typical working hours per unit, used for duration estimates.
    pub fn hours_per_unit(&self) -> f64 {
        match self {
            PriceUnit::Hour => 1.0,
            PriceUnit::Piece => 0.5,
            PriceUnit::SquareMeter => 0.25,
            PriceUnit::Meter => 0.1,
            PriceUnit::Fixed => 4.0,
        }
    }
}

/// Which tax deductions a category qualifies for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxEligibility {
    #[serde(default)]
    pub rot: bool,
    #[serde(default)]
    pub rut: bool,
}

/// A bookable service inside a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubService {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub base_price: u32,
    pub price_unit: PriceUnit,
}

/// A top-level service category, e.g. "Elektriker".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCategory {
    pub title: String,
    pub slug: String,
    pub description: String,
    /// Hourly base price for the category.
    pub base_price: u32,
    #[serde(default)]
    pub eligible: TaxEligibility,
    #[serde(default)]
    pub sub_services: Vec<SubService>,
}

/// The full catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCatalog {
    pub categories: Vec<ServiceCategory>,
}

impl ServiceCatalog {
    /// Parses and validates a catalog from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: ServiceCatalog = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reads a YAML catalog from disk.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let yaml = tokio::fs::read_to_string(path).await?;
        Self::from_yaml_str(&yaml)
    }

    /// The catalog shipped with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUNDLED_CATALOG)
    }

    /// Checks id uniqueness, titles and prices.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();

        for category in &self.categories {
            check_entry(&category.slug, &category.title, category.base_price)?;
            if !seen.insert(category.slug.as_str()) {
                return Err(CatalogError::DuplicateId(category.slug.clone()));
            }

            for sub in &category.sub_services {
                check_entry(&sub.id, &sub.title, sub.base_price)?;
                if !seen.insert(sub.id.as_str()) {
                    return Err(CatalogError::DuplicateId(sub.id.clone()));
                }
            }
        }

        Ok(())
    }

    /// Looks up a category by slug.
    pub fn category(&self, slug: &str) -> Option<&ServiceCategory> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Finds a sub-service and the category it belongs to.
    pub fn sub_service(&self, id: &str) -> Option<(&ServiceCategory, &SubService)> {
        self.categories.iter().find_map(|category| {
            category
                .sub_services
                .iter()
                .find(|s| s.id == id)
                .map(|sub| (category, sub))
        })
    }
}

fn check_entry(id: &str, title: &str, price: u32) -> Result<(), CatalogError> {
    if id.trim().is_empty() {
        return Err(CatalogError::InvalidService {
            id: title.to_string(),
            reason: "id cannot be empty".to_string(),
        });
    }
    if title.trim().is_empty() {
        return Err(CatalogError::InvalidService {
            id: id.to_string(),
            reason: "title cannot be empty".to_string(),
        });
    }
    if price == 0 {
        return Err(CatalogError::InvalidService {
            id: id.to_string(),
            reason: "base price must be positive".to_string(),
        });
    }
    Ok(())
}
