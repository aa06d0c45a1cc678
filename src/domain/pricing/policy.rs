//! Swedish VAT and ROT/RUT deduction parameters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;

/// Standard Swedish VAT.
pub const VAT_RATE: Percentage = Percentage::new(25);

/// Temporary ROT rate for work paid from 12 May 2025 through 31 December 2025.
pub const ROT_TEMPORARY_RATE: Percentage = Percentage::new(50);

/// Ordinary ROT rate, in force again once the temporary rate expires.
pub const ROT_ORDINARY_RATE: Percentage = Percentage::new(30);

/// RUT rate.
pub const RUT_RATE: Percentage = Percentage::new(50);

/// Maximum ROT deduction per person and year, in kronor.
pub const ROT_ANNUAL_CAP: u32 = 50_000;

/// Maximum combined ROT and RUT deduction per person and year, in kronor.
pub const COMBINED_ANNUAL_CAP: u32 = 75_000;

/// Tax deduction schemes for household work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeductionKind {
    /// Repairs, maintenance, conversion and extension of the home.
    Rot,
    /// Household services such as cleaning, gardening and moving.
    Rut,
}

impl fmt::Display for DeductionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeductionKind::Rot => write!(f, "ROT"),
            DeductionKind::Rut => write!(f, "RUT"),
        }
    }
}

/// Tax parameters used by every price calculation.
///
/// `rot_rate` is a policy constant, not derived from today's date: the 50%
/// level is time-boxed (valid through `rot_rate_valid_through`, reverting to
/// `rot_rate_after` afterwards) and hosts override it through configuration
/// once it lapses. [`TaxPolicy::rot_rate_on`] gives the date-aware rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxPolicy {
    pub vat_rate: Percentage,
    pub rot_rate: Percentage,
    pub rot_rate_valid_through: NaiveDate,
    pub rot_rate_after: Percentage,
    pub rut_rate: Percentage,
    pub rot_annual_cap: u32,
    pub combined_annual_cap: u32,
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self {
            vat_rate: VAT_RATE,
            rot_rate: ROT_TEMPORARY_RATE,
            rot_rate_valid_through: NaiveDate::from_ymd_opt(2025, 12, 31)
                .unwrap_or(NaiveDate::MAX),
            rot_rate_after: ROT_ORDINARY_RATE,
            rut_rate: RUT_RATE,
            rot_annual_cap: ROT_ANNUAL_CAP,
            combined_annual_cap: COMBINED_ANNUAL_CAP,
        }
    }
}

impl TaxPolicy {
    /// The configured rate for a deduction scheme.
    pub fn rate_for(&self, kind: DeductionKind) -> Percentage {
        match kind {
            DeductionKind::Rot => self.rot_rate,
            DeductionKind::Rut => self.rut_rate,
        }
    }

    /// ROT rate for work paid on `date`.
    pub fn rot_rate_on(&self, date: NaiveDate) -> Percentage {
        if date <= self.rot_rate_valid_through {
            self.rot_rate
        } else {
            self.rot_rate_after
        }
    }

    /// Annual cap for a scheme. RUT shares the combined cap with ROT.
    pub fn annual_cap(&self, kind: DeductionKind) -> u32 {
        match kind {
            DeductionKind::Rot => self.rot_annual_cap,
            DeductionKind::Rut => self.combined_annual_cap,
        }
    }

    /// Gross-up factor for VAT (1.25 at 25%).
    pub fn vat_factor(&self) -> f64 {
        1.0 + self.vat_rate.as_fraction()
    }

    /// Deduction on a work cost excluding VAT, rounded to whole kronor.
    ///
    /// The deduction is taken on the VAT-inclusive labour cost only; material
    /// never qualifies.
    pub fn deduction_on_work(&self, work_cost: f64, kind: DeductionKind) -> i64 {
        self.rate_for(kind).of(work_cost * self.vat_factor()).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_current_swedish_rules() {
        let policy = TaxPolicy::default();
        assert_eq!(policy.vat_rate.value(), 25);
        assert_eq!(policy.rot_rate.value(), 50);
        assert_eq!(policy.rut_rate.value(), 50);
        assert_eq!(policy.rot_annual_cap, 50_000);
        assert_eq!(policy.combined_annual_cap, 75_000);
    }

    #[test]
    fn rot_rate_reverts_after_cutoff() {
        let policy = TaxPolicy::default();
        let within = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let after = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        assert_eq!(policy.rot_rate_on(within).value(), 50);
        assert_eq!(policy.rot_rate_on(after).value(), 30);
    }

    #[test]
    fn rate_is_overridable() {
        let policy = TaxPolicy {
            rot_rate: ROT_ORDINARY_RATE,
            ..TaxPolicy::default()
        };
        assert_eq!(policy.deduction_on_work(1000.0, DeductionKind::Rot), 375);
    }

    #[test]
    fn deduction_includes_vat_on_work() {
        let policy = TaxPolicy::default();
        assert_eq!(policy.deduction_on_work(1000.0, DeductionKind::Rot), 625);
        assert_eq!(policy.deduction_on_work(2700.0, DeductionKind::Rut), 1688);
    }

    #[test]
    fn policy_deserializes_with_partial_overrides() {
        let policy: TaxPolicy =
            serde_json::from_str(r#"{"rot_rate": 30, "rot_rate_valid_through": "2026-06-30"}"#)
                .unwrap();
        assert_eq!(policy.rot_rate.value(), 30);
        assert_eq!(policy.vat_rate.value(), 25);
        assert_eq!(
            policy.rot_rate_valid_through,
            NaiveDate::from_ymd_opt(2026, 6, 30).unwrap()
        );
    }

    #[test]
    fn deduction_kind_displays_uppercase() {
        assert_eq!(DeductionKind::Rot.to_string(), "ROT");
        assert_eq!(DeductionKind::Rut.to_string(), "RUT");
    }
}
