//! Retrievable knowledge units.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::catalog::{PriceUnit, TaxEligibility};
use crate::domain::foundation::Percentage;
use crate::domain::pricing::{DeductionKind, PricedService};

/// What an item describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeKind {
    Service,
    Faq,
    Policy,
    Rule,
}

/// Kind-specific structured payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemMetadata {
    Service {
        base_price: u32,
        price_unit: PriceUnit,
        eligible: TaxEligibility,
        category_slug: String,
        /// `None` for the category item itself.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sub_service_id: Option<String>,
    },
    Rule {
        deduction: DeductionKind,
        rate: Percentage,
        annual_cap: u32,
    },
    Faq {
        question: String,
        answer: String,
    },
    Policy {
        regions: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeItem {
    pub id: String,
    pub kind: KnowledgeKind,
    pub title: String,
    pub content: String,
    pub category: String,
    /// Lower-cased match terms, synonyms included.
    pub keywords: BTreeSet<String>,
    pub metadata: ItemMetadata,
}

impl KnowledgeItem {
    /// Pricing view of a service item.
    pub fn priced_service(&self) -> Option<PricedService> {
        match &self.metadata {
            ItemMetadata::Service {
                base_price,
                price_unit,
                eligible,
                ..
            } => Some(PricedService {
                id: self.id.clone(),
                title: self.title.clone(),
                base_price: *base_price,
                unit: *price_unit,
                eligible: *eligible,
            }),
            _ => None,
        }
    }

    /// Question and answer of an FAQ item.
    pub fn faq(&self) -> Option<(&str, &str)> {
        match &self.metadata {
            ItemMetadata::Faq { question, answer } => Some((question, answer)),
            _ => None,
        }
    }
}
