//! Typed errors raised by the pricing engine and the ride status machine.
//!
//! Every variant is a precondition or logic failure: retrying the same call
//! unchanged cannot succeed, the caller has to correct its request.

use crate::models::{ActorRole, RideStatus, TimeBand, VehicleClass};
use thiserror::Error;

/// Errors raised by [`crate::pricing::calculate_price`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("invalid pricing input: {0}")]
    InvalidInput(String),

    #[error("vehicle class {0} has no tariff in the catalog")]
    UnknownVehicleClass(VehicleClass),

    #[error("no tariff configured for {vehicle_class} in the {time_band} band")]
    MissingTariff {
        vehicle_class: VehicleClass,
        time_band: TimeBand,
    },
}

/// Errors raised by [`crate::lifecycle::transition`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("{actor} cannot move a ride from {from} to {to}")]
    IllegalTransition {
        actor: ActorRole,
        from: RideStatus,
        to: RideStatus,
    },

    #[error("transition to {target} requires {field}")]
    MissingField {
        target: RideStatus,
        field: &'static str,
    },
}

/// Catalog construction failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate tariff band for {vehicle_class}/{time_band}")]
    DuplicateTariffBand {
        vehicle_class: VehicleClass,
        time_band: TimeBand,
    },

    #[error("duplicate ride option key {0:?}")]
    DuplicateOptionKey(String),
}

/// Failure to parse a domain enum from its string form.
///
/// Unknown strings are an error, never silently mapped to a default.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}
