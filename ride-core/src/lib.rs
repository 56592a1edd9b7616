//! Ride pricing and lifecycle core for the Élégance Mobilité booking platform.
//!
//! Pure domain logic: `pricing` computes quotes from time-banded tariffs and
//! `lifecycle` validates role-gated ride status transitions. Persistence,
//! transport and change notification belong to the callers.

pub mod error;
pub mod lifecycle;
pub mod models;
pub mod pricing;
