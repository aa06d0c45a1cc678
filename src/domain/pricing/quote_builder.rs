//! Multi-line quote calculation for hand-built offers.
//!
//! Generalises the chat estimate: deductions are computed on the work share of
//! the discounted, VAT-inclusive total, and capped by the annual limits.

use serde::{Deserialize, Serialize};

use super::policy::{DeductionKind, TaxPolicy};
use crate::domain::foundation::Percentage;

/// Whether a line is labour or material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Work,
    Material,
}

/// One line on a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLineItem {
    pub description: String,
    pub kind: LineKind,
    pub quantity: f64,
    pub unit_price: f64,
    /// Deduction scheme for work lines. Ignored on material lines.
    #[serde(default)]
    pub deduction: Option<DeductionKind>,
}

impl QuoteLineItem {
    pub fn work(
        description: impl Into<String>,
        quantity: f64,
        unit_price: f64,
        deduction: Option<DeductionKind>,
    ) -> Self {
        Self {
            description: description.into(),
            kind: LineKind::Work,
            quantity,
            unit_price,
            deduction,
        }
    }

    pub fn material(description: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            description: description.into(),
            kind: LineKind::Material,
            quantity,
            unit_price,
            deduction: None,
        }
    }

    pub fn amount(&self) -> f64 {
        (self.quantity * self.unit_price).max(0.0)
    }
}

/// Totals for a [`QuoteCalculation`], in whole kronor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTotals {
    pub work_cost: i64,
    pub material_cost: i64,
    pub subtotal: i64,
    pub discount_amount: i64,
    /// Post-discount amount excluding VAT.
    pub net_amount: i64,
    pub vat: i64,
    pub total_incl_vat: i64,
    pub rot_deduction: i64,
    pub rut_deduction: i64,
    pub total_after_deductions: i64,
}

/// A quote under construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteCalculation {
    pub items: Vec<QuoteLineItem>,
    #[serde(default)]
    pub discount: Percentage,
    pub vat_rate: Percentage,
    /// Line prices already include VAT.
    #[serde(default)]
    pub prices_include_vat: bool,
}

impl QuoteCalculation {
    pub fn new(vat_rate: Percentage) -> Self {
        Self {
            items: Vec::new(),
            discount: Percentage::ZERO,
            vat_rate,
            prices_include_vat: false,
        }
    }

    pub fn with_item(mut self, item: QuoteLineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_discount(mut self, discount: Percentage) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_prices_including_vat(mut self, included: bool) -> Self {
        self.prices_include_vat = included;
        self
    }

    /// Computes totals. Deduction rates and caps come from `policy`; the VAT
    /// rate is the quote's own.
    pub fn totals(&self, policy: &TaxPolicy) -> QuoteTotals {
        let sum_where = |pred: &dyn Fn(&QuoteLineItem) -> bool| -> f64 {
            self.items.iter().filter(|i| pred(*i)).map(QuoteLineItem::amount).sum()
        };

        let work = sum_where(&|i| i.kind == LineKind::Work);
        let material = sum_where(&|i| i.kind == LineKind::Material);
        let rot_work =
            sum_where(&|i| i.kind == LineKind::Work && i.deduction == Some(DeductionKind::Rot));
        let rut_work =
            sum_where(&|i| i.kind == LineKind::Work && i.deduction == Some(DeductionKind::Rut));

        let subtotal = work + material;
        let discount_amount = self.discount.of(subtotal);
        let discounted = subtotal - discount_amount;
        let vat_factor = 1.0 + self.vat_rate.as_fraction();

        let (net, vat, gross) = if self.prices_include_vat {
            let net = discounted / vat_factor;
            (net, discounted - net, discounted)
        } else {
            let vat = self.vat_rate.of(discounted);
            (discounted, vat, discounted + vat)
        };

        let share = |part: f64| if subtotal > 0.0 { part / subtotal } else { 0.0 };
        let raw_rot = policy.rot_rate.of(gross * share(rot_work));
        let raw_rut = policy.rut_rate.of(gross * share(rut_work));

        let rot = raw_rot.min(f64::from(policy.rot_annual_cap));
        let rut = raw_rut.min((f64::from(policy.combined_annual_cap) - rot).max(0.0));

        let total_incl_vat = gross.round() as i64;
        let rot_deduction = rot.round() as i64;
        let rut_deduction = rut.round() as i64;

        QuoteTotals {
            work_cost: work.round() as i64,
            material_cost: material.round() as i64,
            subtotal: subtotal.round() as i64,
            discount_amount: discount_amount.round() as i64,
            net_amount: net.round() as i64,
            vat: vat.round() as i64,
            total_incl_vat,
            rot_deduction,
            rut_deduction,
            total_after_deductions: (total_incl_vat - rot_deduction - rut_deduction).max(0),
        }
    }
}
