//! # Ionflare Core
//!
//! Deterministic simulation core of a 2D arcade space-shooter: a single
//! controllable [`Ship`](ship::Ship) that moves under thrust and queued
//! impulse forces, rotates, fires [`Bullet`](bullet::Bullet)s, and
//! tracks collision contacts and health.
//!
//! The surrounding application concerns are collaborators, not part of
//! this crate:
//!
//! - **Rendering** and **collision volumes** sit behind the
//!   [`Scene`](scene::Scene) trait; the core keeps opaque handles in
//!   sync but never draws or intersects anything.
//! - **Collision detection** is an external engine that calls
//!   [`Ship::add_collision`](ship::Ship::add_collision) and may invoke
//!   the stored collision handler.
//! - **Input** arrives as plain method calls on the ship's control
//!   surface (see the `ionflare-shell` crate for the event layer).
//!
//! Everything is single-threaded and tick-driven: the host loop calls
//! [`Ship::update`](ship::Ship::update) once per frame.
//!
//! ## Usage
//!
//! ```
//! use ionflare_core::scene::HeadlessScene;
//! use ionflare_core::ship::Ship;
//!
//! let mut scene = HeadlessScene::new();
//! let mut ship = Ship::new(&mut scene);
//!
//! ship.thrust_on();
//! for _ in 0..60 {
//!     ship.update(1.0 / 60.0, &mut scene)?;
//! }
//! assert!(ship.velocity().length() > 0.0);
//! # Ok::<(), ionflare_core::error::ShipError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bullet;
pub mod error;
pub mod scene;
pub mod ship;
pub mod vec2;

// Re-exports for convenience
pub use bullet::{Bullet, BulletId};
pub use error::ShipError;
pub use scene::{HeadlessScene, Scene, VisualId, VolumeId};
pub use ship::{ControlFlags, Ship};

#[cfg(test)]
mod tests;
