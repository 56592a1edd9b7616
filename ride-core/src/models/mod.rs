//! Domain models for the ride core.

mod option;
mod quote;
mod ride;
mod tariff;

pub use option::{OptionCatalog, RideOption};
pub use quote::{PriceQuote, PriceRequest};
pub use ride::{ActorRole, DelayReason, Ride, RideStatus};
pub use tariff::{TariffBand, TariffCatalog, TimeBand, VehicleClass};
