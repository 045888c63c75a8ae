//! Error types for the simulation core.
//!
//! Every fallible operation surfaces its error synchronously to the
//! caller; the core never retries and never swallows a failure. A failed
//! operation leaves ship state exactly as it was.

use thiserror::Error;

use crate::bullet::BulletId;

/// Errors raised by [`Ship`](crate::ship::Ship) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShipError {
    /// A vector argument contained a NaN or infinite component.
    #[error("vector component is not finite: ({x}, {y})")]
    NonFiniteVector {
        /// X component as received.
        x: f32,
        /// Y component as received.
        y: f32,
    },

    /// A negative timestep was passed to `update`.
    #[error("timestep must be non-negative, got {0}")]
    NegativeTimestep(f32),

    /// `destroy_bullet` was asked to remove a bullet the ship does not own.
    #[error("bullet {0} is not owned by this ship")]
    BulletNotFound(BulletId),

    /// The operation is not valid on a destroyed ship.
    #[error("ship `{name}` has been destroyed")]
    Destroyed {
        /// Name of the destroyed ship.
        name: String,
    },
}
