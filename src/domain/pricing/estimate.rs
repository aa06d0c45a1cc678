//! Chat price estimator.
//!
//! `estimate_quote` is a pure function over a single work item. The chat
//! calculator panel wraps it in a [`PriceBreakdown`] that also reports the
//! RUT alternative and a duration estimate.

use serde::{Deserialize, Serialize};

use super::policy::{DeductionKind, TaxPolicy};
use crate::domain::catalog::{PriceUnit, TaxEligibility};

/// Input to [`estimate_quote`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateInput {
    /// Hourly or per-unit price excluding VAT.
    pub hourly_price: f64,
    pub quantity: f64,
    #[serde(default)]
    pub material_cost: f64,
    pub rot_eligible: bool,
}

/// Output of [`estimate_quote`]. All amounts in whole kronor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    pub work_cost: i64,
    pub material_cost: i64,
    pub subtotal: i64,
    pub vat: i64,
    pub total_incl_vat: i64,
    pub rot_deduction: i64,
    pub total_after_rot: i64,
}

/// Estimates a quote with the default [`TaxPolicy`].
///
/// ROT is 50% of the work cost including VAT. That rate applies to work paid
/// through 31 December 2025 and reverts to 30% afterwards; pass a different
/// policy to [`TaxPolicy::estimate`] to override it.
pub fn estimate_quote(input: &EstimateInput) -> EstimateResult {
    TaxPolicy::default().estimate(input)
}

impl TaxPolicy {
    /// Estimates a quote under this policy.
    pub fn estimate(&self, input: &EstimateInput) -> EstimateResult {
        let work = input.hourly_price * input.quantity;
        let material = input.material_cost.max(0.0);
        let subtotal = work + material;
        let vat = self.vat_rate.of(subtotal);
        let total_incl_vat = (subtotal + vat).round() as i64;

        let rot_deduction = if input.rot_eligible {
            self.deduction_on_work(work, DeductionKind::Rot)
        } else {
            0
        };

        EstimateResult {
            work_cost: work.round() as i64,
            material_cost: material.round() as i64,
            subtotal: subtotal.round() as i64,
            vat: vat.round() as i64,
            total_incl_vat,
            rot_deduction,
            total_after_rot: (total_incl_vat - rot_deduction).max(0),
        }
    }
}

/// The service a breakdown is computed for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedService {
    pub id: String,
    pub title: String,
    pub base_price: u32,
    pub unit: PriceUnit,
    pub eligible: TaxEligibility,
}

/// Price after one deduction scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionOutcome {
    pub kind: DeductionKind,
    pub deduction: i64,
    pub price_after: i64,
    /// Savings relative to the ordinary price, whole percent.
    pub savings_percent: u8,
}

/// What the calculator panel renders for the selected service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub service: PricedService,
    pub quantity: u32,
    pub estimate: EstimateResult,
    /// Price including VAT before any deduction.
    pub ordinary_price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rot: Option<DeductionOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rut: Option<DeductionOutcome>,
    pub estimated_hours: f64,
}

impl PriceBreakdown {
    /// Computes the breakdown for `quantity` units of `service`.
    ///
    /// A quantity of zero is treated as one unit.
    pub fn compute(service: &PricedService, quantity: u32, policy: &TaxPolicy) -> Self {
        let quantity = quantity.max(1);
        let estimate = policy.estimate(&EstimateInput {
            hourly_price: f64::from(service.base_price),
            quantity: f64::from(quantity),
            material_cost: 0.0,
            rot_eligible: service.eligible.rot,
        });
        let ordinary_price = estimate.total_incl_vat;

        let rot = service.eligible.rot.then(|| {
            outcome(DeductionKind::Rot, estimate.rot_deduction, ordinary_price)
        });
        let rut = service.eligible.rut.then(|| {
            let deduction = policy.deduction_on_work(estimate.work_cost as f64, DeductionKind::Rut);
            outcome(DeductionKind::Rut, deduction, ordinary_price)
        });

        let hours = f64::from(quantity) * service.unit.hours_per_unit();
        let estimated_hours = ((hours * 2.0).ceil() / 2.0).max(1.0);

        Self {
            service: service.clone(),
            quantity,
            estimate,
            ordinary_price,
            rot,
            rut,
            estimated_hours,
        }
    }

    /// The cheapest available price, i.e. after the best deduction.
    pub fn best_price(&self) -> i64 {
        [self.rot, self.rut]
            .iter()
            .flatten()
            .map(|o| o.price_after)
            .min()
            .unwrap_or(self.ordinary_price)
    }

    /// The deduction the customer most likely uses.
    pub fn primary_deduction(&self) -> Option<&DeductionOutcome> {
        self.rot.as_ref().or(self.rut.as_ref())
    }
}

fn outcome(kind: DeductionKind, deduction: i64, ordinary_price: i64) -> DeductionOutcome {
    let savings_percent = if ordinary_price > 0 {
        ((deduction as f64 / ordinary_price as f64) * 100.0).round() as u8
    } else {
        0
    };

    DeductionOutcome {
        kind,
        deduction,
        price_after: (ordinary_price - deduction).max(0),
        savings_percent,
    }
}
