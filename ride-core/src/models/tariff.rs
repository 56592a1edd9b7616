//! Tariff model: vehicle classes, time bands and per-band price formulas.

use crate::error::{CatalogError, ParseEnumError};
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vehicle class a ride is booked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    Standard,
    Premium,
}

impl VehicleClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleClass::Standard => "standard",
            VehicleClass::Premium => "premium",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleClass {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(VehicleClass::Standard),
            "premium" => Ok(VehicleClass::Premium),
            _ => Err(ParseEnumError {
                kind: "vehicle class",
                value: s.to_string(),
            }),
        }
    }
}

/// Time-of-day tariff category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBand {
    OffPeak,
    Peak,
}

impl TimeBand {
    /// Resolve the band for a local wall-clock pickup time.
    ///
    /// Off-peak covers [20:00, 07:00) plus the whole of Saturday and Sunday;
    /// weekday daytime is peak.
    pub fn from_local(at: NaiveDateTime) -> Self {
        let weekend = matches!(at.weekday(), Weekday::Sat | Weekday::Sun);
        if weekend || at.hour() >= 20 || at.hour() < 7 {
            TimeBand::OffPeak
        } else {
            TimeBand::Peak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeBand::OffPeak => "off_peak",
            TimeBand::Peak => "peak",
        }
    }
}

impl fmt::Display for TimeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeBand {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off_peak" => Ok(TimeBand::OffPeak),
            "peak" => Ok(TimeBand::Peak),
            _ => Err(ParseEnumError {
                kind: "time band",
                value: s.to_string(),
            }),
        }
    }
}

/// Price formula active for one (vehicle class, time band) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffBand {
    pub vehicle_class: VehicleClass,
    pub time_band: TimeBand,
    pub base_fare: Decimal,
    pub per_km_rate: Decimal,
    pub per_minute_rate: Decimal,
}

/// Validated set of tariff bands.
///
/// At most one band may exist per (vehicle class, time band) pair. Missing
/// pairs are accepted here and surface as pricing errors on lookup.
#[derive(Debug, Clone, Default)]
pub struct TariffCatalog {
    bands: Vec<TariffBand>,
}

impl TariffCatalog {
    pub fn new(bands: Vec<TariffBand>) -> Result<Self, CatalogError> {
        for (i, band) in bands.iter().enumerate() {
            let duplicate = bands[..i]
                .iter()
                .any(|b| b.vehicle_class == band.vehicle_class && b.time_band == band.time_band);
            if duplicate {
                return Err(CatalogError::DuplicateTariffBand {
                    vehicle_class: band.vehicle_class,
                    time_band: band.time_band,
                });
            }
        }
        Ok(Self { bands })
    }

    pub fn band_for(&self, vehicle_class: VehicleClass, time_band: TimeBand) -> Option<&TariffBand> {
        self.bands
            .iter()
            .find(|b| b.vehicle_class == vehicle_class && b.time_band == time_band)
    }

    pub fn has_vehicle_class(&self, vehicle_class: VehicleClass) -> bool {
        self.bands.iter().any(|b| b.vehicle_class == vehicle_class)
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}
