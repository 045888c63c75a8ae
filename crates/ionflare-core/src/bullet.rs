//! Bullet: a short-lived projectile record owned by a ship.
//!
//! Bullets are created by [`Ship::shoot`](crate::ship::Ship::shoot) and
//! removed by [`Ship::destroy_bullet`](crate::ship::Ship::destroy_bullet)
//! (or a [`cull_bullets`](crate::ship::Ship::cull_bullets) pass). Their
//! velocity is fixed at creation; the external physics driver advances
//! their position, and the external collision engine is the only
//! collaborator that flips a bullet's alive flag.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::scene::{VisualId, VolumeId};

/// Identifier for a bullet within its owning ship.
///
/// Ids are assigned by the owning ship, increase monotonically, and are
/// never reused for the lifetime of that ship. They let the host address
/// a bullet without holding a borrow into the ship's bullet list.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BulletId(u64);

impl BulletId {
    /// Creates a `BulletId` from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for BulletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BulletId({})", self.0)
    }
}

impl fmt::Display for BulletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A live projectile owned by a ship.
///
/// A bullet exclusively owns one visual handle and one physical
/// (collision-volume) handle; both are released exactly once when the
/// owning ship destroys the bullet. There is no acceleration: velocity
/// is constant after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    id: BulletId,
    velocity: Vec2,
    visual: VisualId,
    physical: VolumeId,
    alive: bool,
}

impl Bullet {
    /// Creates a live bullet. Called by the owning ship's `shoot`.
    #[must_use]
    pub const fn new(id: BulletId, velocity: Vec2, visual: VisualId, physical: VolumeId) -> Self {
        Self {
            id,
            velocity,
            visual,
            physical,
            alive: true,
        }
    }

    /// Returns this bullet's identifier.
    #[must_use]
    pub const fn id(&self) -> BulletId {
        self.id
    }

    /// Returns the bullet's (constant) velocity.
    #[must_use]
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Returns the handle of the bullet's renderable representation.
    #[must_use]
    pub const fn visual(&self) -> VisualId {
        self.visual
    }

    /// Returns the handle of the bullet's collision volume.
    #[must_use]
    pub const fn physical(&self) -> VolumeId {
        self.physical
    }

    /// Returns `true` while the bullet is live.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Marks the bullet as expired.
    ///
    /// Called by the external collision engine (or a lifetime rule in the
    /// host) when the bullet should stop existing. The bullet stays in
    /// its ship's list, handles intact, until the next removal pass.
    pub fn kill(&mut self) {
        self.alive = false;
    }
}
