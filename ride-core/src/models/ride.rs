//! Ride record and lifecycle vocabulary.

use crate::error::ParseEnumError;
use crate::models::VehicleClass;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Ride status.
///
/// `Completed`, the three cancellation variants and `NoShow` are terminal:
/// no further transition is permitted out of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideStatus {
    Pending,
    Scheduled,
    InProgress,
    Completed,
    ClientCanceled,
    DriverCanceled,
    AdminCanceled,
    NoShow,
    Delayed,
}

impl RideStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RideStatus::Pending => "pending",
            RideStatus::Scheduled => "scheduled",
            RideStatus::InProgress => "in_progress",
            RideStatus::Completed => "completed",
            RideStatus::ClientCanceled => "client_canceled",
            RideStatus::DriverCanceled => "driver_canceled",
            RideStatus::AdminCanceled => "admin_canceled",
            RideStatus::NoShow => "no_show",
            RideStatus::Delayed => "delayed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RideStatus::Completed
                | RideStatus::ClientCanceled
                | RideStatus::DriverCanceled
                | RideStatus::AdminCanceled
                | RideStatus::NoShow
        )
    }
}

impl fmt::Display for RideStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RideStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RideStatus::Pending),
            "scheduled" => Ok(RideStatus::Scheduled),
            "in_progress" => Ok(RideStatus::InProgress),
            "completed" => Ok(RideStatus::Completed),
            "client_canceled" => Ok(RideStatus::ClientCanceled),
            "driver_canceled" => Ok(RideStatus::DriverCanceled),
            "admin_canceled" => Ok(RideStatus::AdminCanceled),
            "no_show" => Ok(RideStatus::NoShow),
            "delayed" => Ok(RideStatus::Delayed),
            _ => Err(ParseEnumError {
                kind: "ride status",
                value: s.to_string(),
            }),
        }
    }
}

/// Role of the caller requesting a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    Customer,
    Driver,
    Admin,
}

impl ActorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorRole::Customer => "customer",
            ActorRole::Driver => "driver",
            ActorRole::Admin => "admin",
        }
    }
}

impl fmt::Display for ActorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActorRole {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(ActorRole::Customer),
            "driver" => Ok(ActorRole::Driver),
            "admin" => Ok(ActorRole::Admin),
            _ => Err(ParseEnumError {
                kind: "actor role",
                value: s.to_string(),
            }),
        }
    }
}

/// Which side caused a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelayReason {
    Driver,
    Client,
}

impl DelayReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DelayReason::Driver => "driver",
            DelayReason::Client => "client",
        }
    }
}

impl fmt::Display for DelayReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DelayReason {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driver" => Ok(DelayReason::Driver),
            "client" => Ok(DelayReason::Client),
            _ => Err(ParseEnumError {
                kind: "delay reason",
                value: s.to_string(),
            }),
        }
    }
}

/// Ride record governed by the status machine.
///
/// Created by the booking flow in `Pending`; mutated exclusively through
/// [`crate::lifecycle::transition`]. `delay_reason`/`delay_minutes` are set
/// only while the ride is `Delayed`; `status_notes` is always present on a
/// cancelled or no-show ride.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    pub ride_id: Uuid,
    pub customer_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub status: RideStatus,
    pub vehicle_class: VehicleClass,
    pub pickup_at: DateTime<Utc>,
    pub distance_km: Decimal,
    pub duration_min: Option<i64>,
    pub option_keys: HashSet<String>,
    pub delay_reason: Option<DelayReason>,
    pub delay_minutes: Option<i64>,
    pub status_notes: Option<String>,
    pub status_changed_at: DateTime<Utc>,
    pub created_utc: DateTime<Utc>,
}
