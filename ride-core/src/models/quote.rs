//! Pricing request and quote models.

use crate::models::VehicleClass;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Input for a pricing calculation.
#[derive(Debug, Clone)]
pub struct PriceRequest {
    pub distance_km: Decimal,
    /// Estimated ride duration; the per-minute term is skipped when absent.
    pub duration_min: Option<i64>,
    pub vehicle_class: VehicleClass,
    /// Local wall-clock pickup time, drives time-band resolution.
    pub pickup_local: NaiveDateTime,
    /// Selected add-on keys; unknown keys are ignored.
    pub option_keys: HashSet<String>,
}

/// Result of a pricing calculation.
///
/// `base_price` and `options_price` are exact; only `total_price` is rounded
/// (two decimals, half-up).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub base_price: Decimal,
    pub options_price: Decimal,
    pub total_price: Decimal,
}
