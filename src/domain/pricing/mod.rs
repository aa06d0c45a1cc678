//! Pricing: VAT, ROT/RUT deductions and quote estimates.

mod estimate;
mod format;
mod policy;
mod quote_builder;

pub use estimate::{
    estimate_quote, DeductionOutcome, EstimateInput, EstimateResult, PriceBreakdown, PricedService,
};
pub use format::{format_amount, format_kronor};
pub use policy::{
    DeductionKind, TaxPolicy, COMBINED_ANNUAL_CAP, ROT_ANNUAL_CAP, ROT_ORDINARY_RATE,
    ROT_TEMPORARY_RATE, RUT_RATE, VAT_RATE,
};
pub use quote_builder::{LineKind, QuoteCalculation, QuoteLineItem, QuoteTotals};
