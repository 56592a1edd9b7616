//! Ride lifecycle state machine: role-gated status transitions.

use crate::error::TransitionError;
use crate::models::{ActorRole, DelayReason, Ride, RideStatus};
use chrono::Utc;
use uuid::Uuid;

/// Extra fields accompanying a transition request.
///
/// Which fields are required depends on the target status; fields unrelated
/// to the target are ignored.
#[derive(Debug, Clone, Default)]
pub struct TransitionExtras {
    pub driver_id: Option<Uuid>,
    pub vehicle_id: Option<Uuid>,
    pub status_notes: Option<String>,
    pub delay_reason: Option<DelayReason>,
    pub delay_minutes: Option<i64>,
}

/// Recorded when a customer cancels without giving a reason, so cancelled
/// rides always carry a note.
const DEFAULT_CLIENT_CANCEL_NOTE: &str = "Cancelled by customer";

/// Apply a status transition to a ride.
///
/// Returns a new ride value with the target status, a fresh
/// `status_changed_at` and the target-relevant extras copied in; the input
/// ride is never mutated. Persisting the result is the caller's job.
///
/// Fails with [`TransitionError::IllegalTransition`] when the
/// (status, actor, target) triple is not in the transition table, which
/// includes same-status requests and anything out of a terminal status, and
/// with [`TransitionError::MissingField`] when a required extra is absent.
pub fn transition(
    ride: &Ride,
    actor: ActorRole,
    target: RideStatus,
    extras: &TransitionExtras,
) -> Result<Ride, TransitionError> {
    if !is_allowed(actor, ride.status, target) {
        return Err(TransitionError::IllegalTransition {
            actor,
            from: ride.status,
            to: target,
        });
    }

    let mut next = ride.clone();
    next.status = target;
    next.status_changed_at = Utc::now();

    // Delay details only live on a delayed ride.
    if ride.status == RideStatus::Delayed {
        next.delay_reason = None;
        next.delay_minutes = None;
    }

    match target {
        RideStatus::Scheduled => {
            next.driver_id = Some(require(extras.driver_id, target, "driver_id")?);
            next.vehicle_id = Some(require(extras.vehicle_id, target, "vehicle_id")?);
        }
        RideStatus::ClientCanceled => {
            next.status_notes =
                Some(notes(extras).unwrap_or_else(|| DEFAULT_CLIENT_CANCEL_NOTE.to_string()));
        }
        RideStatus::DriverCanceled | RideStatus::AdminCanceled | RideStatus::NoShow => {
            next.status_notes = Some(require(notes(extras), target, "status_notes")?);
        }
        RideStatus::Delayed => {
            next.delay_reason = Some(require(extras.delay_reason, target, "delay_reason")?);
            let minutes = require(extras.delay_minutes, target, "delay_minutes")?;
            if minutes < 1 {
                return Err(TransitionError::MissingField {
                    target,
                    field: "delay_minutes",
                });
            }
            next.delay_minutes = Some(minutes);
            if let Some(note) = notes(extras) {
                next.status_notes = Some(note);
            }
        }
        RideStatus::InProgress | RideStatus::Completed => {}
        // Pending never appears as a target in the transition table.
        RideStatus::Pending => {}
    }

    Ok(next)
}

/// The transition table: (actor, current status, target status).
fn is_allowed(actor: ActorRole, from: RideStatus, to: RideStatus) -> bool {
    use ActorRole::{Admin, Customer, Driver};
    use RideStatus::*;

    match (actor, from, to) {
        // Admin assigns a driver and vehicle to a fresh booking.
        (Admin, Pending, Scheduled) => true,
        // Driver runs the ride.
        (Driver, Scheduled, InProgress) => true,
        (Driver, InProgress, Completed) => true,
        // Customer may back out until the ride starts.
        (Customer, Pending | Scheduled, ClientCanceled) => true,
        // Driver may decline an assigned ride.
        (Driver, Scheduled, DriverCanceled) => true,
        // Admin may cancel anything still in flight.
        (Admin, current, AdminCanceled) if !current.is_terminal() => true,
        // A no-show only makes sense for an assigned, not-yet-started ride.
        (Admin | Driver, Scheduled, NoShow) => true,
        (Admin | Driver, Scheduled | InProgress, Delayed) => true,
        // A delayed ride resumes, finishes or is declined by its driver.
        (Driver, Delayed, InProgress | Completed | DriverCanceled) => true,
        _ => false,
    }
}

fn require<T>(value: Option<T>, target: RideStatus, field: &'static str) -> Result<T, TransitionError> {
    value.ok_or(TransitionError::MissingField { target, field })
}

/// Trimmed status notes; blank notes count as absent.
fn notes(extras: &TransitionExtras) -> Option<String> {
    extras
        .status_notes
        .as_deref()
        .map(str::trim)
        .filter(|notes| !notes.is_empty())
        .map(str::to_string)
}
