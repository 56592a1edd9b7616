//! Ride price computation over time-banded tariffs.

use crate::error::PricingError;
use crate::models::{OptionCatalog, PriceQuote, PriceRequest, TariffCatalog, TimeBand};
use rust_decimal::{Decimal, RoundingStrategy};

/// Compute a quote for a ride request against the supplied catalogs.
///
/// Deterministic and side-effect free: identical inputs always produce the
/// identical quote, so concurrent and repeated calls are safe.
///
/// The tariff band is resolved from the request's vehicle class and local
/// pickup time; the total is floored at `minimum_fare` and rounded half-up
/// to two decimals. Unknown option keys are skipped.
pub fn calculate_price(
    request: &PriceRequest,
    tariffs: &TariffCatalog,
    options: &OptionCatalog,
    minimum_fare: Decimal,
) -> Result<PriceQuote, PricingError> {
    if request.distance_km < Decimal::ZERO {
        return Err(PricingError::InvalidInput(format!(
            "distance_km must be >= 0, got {}",
            request.distance_km
        )));
    }
    if let Some(duration) = request.duration_min {
        if duration < 0 {
            return Err(PricingError::InvalidInput(format!(
                "duration_min must be >= 0, got {}",
                duration
            )));
        }
    }
    if minimum_fare < Decimal::ZERO {
        return Err(PricingError::InvalidInput(format!(
            "minimum_fare must be >= 0, got {}",
            minimum_fare
        )));
    }

    if !tariffs.has_vehicle_class(request.vehicle_class) {
        return Err(PricingError::UnknownVehicleClass(request.vehicle_class));
    }

    let time_band = TimeBand::from_local(request.pickup_local);
    let tariff = tariffs
        .band_for(request.vehicle_class, time_band)
        .ok_or(PricingError::MissingTariff {
            vehicle_class: request.vehicle_class,
            time_band,
        })?;

    let mut base_price = tariff.base_fare + request.distance_km * tariff.per_km_rate;
    if let Some(duration) = request.duration_min {
        base_price += Decimal::from(duration) * tariff.per_minute_rate;
    }

    let options_price: Decimal = request
        .option_keys
        .iter()
        .filter_map(|key| options.flat_fee(key))
        .sum();

    // Rounded once, at the total; the base/options split stays exact.
    let total_price = (base_price + options_price)
        .max(minimum_fare)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Ok(PriceQuote {
        base_price,
        options_price,
        total_price,
    })
}
