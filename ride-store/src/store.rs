//! Ride store contract and in-memory reference implementation.

use async_trait::async_trait;
use ride_core::models::{Ride, RideStatus};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("ride {0} not found")]
    NotFound(Uuid),

    #[error("ride {0} already exists")]
    Duplicate(Uuid),
}

/// Result of a conditional ride update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The persisted status matched and the new value was written.
    Updated,
    /// Another writer got there first; nothing was written.
    Conflict { current: RideStatus },
}

/// Persistence contract for ride records.
///
/// `update_ride_if_status` is the compare-and-swap that makes concurrent
/// transitions safe: the status machine validates a transition in isolation,
/// and the store only commits the result while the persisted status still
/// matches the one the transition was computed from. Of two racing valid
/// transitions, exactly one commits.
#[async_trait]
pub trait RideStore: Send + Sync {
    async fn insert_ride(&self, ride: Ride) -> Result<(), StoreError>;

    async fn get_ride(&self, ride_id: Uuid) -> Result<Option<Ride>, StoreError>;

    async fn update_ride_if_status(
        &self,
        ride_id: Uuid,
        expected_status: RideStatus,
        new_ride: Ride,
    ) -> Result<UpdateOutcome, StoreError>;
}

/// In-memory reference implementation of the conditional update.
#[derive(Default)]
pub struct InMemoryRideStore {
    rides: RwLock<HashMap<Uuid, Ride>>,
}

impl InMemoryRideStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RideStore for InMemoryRideStore {
    async fn insert_ride(&self, ride: Ride) -> Result<(), StoreError> {
        let mut rides = self.rides.write().await;
        if rides.contains_key(&ride.ride_id) {
            return Err(StoreError::Duplicate(ride.ride_id));
        }
        rides.insert(ride.ride_id, ride);
        Ok(())
    }

    async fn get_ride(&self, ride_id: Uuid) -> Result<Option<Ride>, StoreError> {
        Ok(self.rides.read().await.get(&ride_id).cloned())
    }

    async fn update_ride_if_status(
        &self,
        ride_id: Uuid,
        expected_status: RideStatus,
        new_ride: Ride,
    ) -> Result<UpdateOutcome, StoreError> {
        // The write lock spans the compare and the swap.
        let mut rides = self.rides.write().await;
        let current = rides
            .get(&ride_id)
            .ok_or(StoreError::NotFound(ride_id))?
            .status;

        if current != expected_status {
            info!(
                ride_id = %ride_id,
                expected = %expected_status,
                current = %current,
                "Conditional ride update lost the race"
            );
            return Ok(UpdateOutcome::Conflict { current });
        }

        rides.insert(ride_id, new_ride);
        Ok(UpdateOutcome::Updated)
    }
}
