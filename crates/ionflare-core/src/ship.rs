//! Ship: the physics-and-combat model at the heart of the simulation.
//!
//! A [`Ship`] owns its kinematic state (position, velocity, heading, a
//! one-tick force buffer), its combat state (health, live bullets), its
//! collision bookkeeping, and the opaque scene handles for its visual
//! representation and collision volume. A host game loop drives it by
//! calling [`Ship::update`] once per frame with the elapsed timestep and
//! the [`Scene`] collaborator.
//!
//! # Integration contract
//!
//! Each `update(dt, scene)` performs, in order:
//!
//! 1. net acceleration = thrust along the current heading + the sum of
//!    all queued forces;
//! 2. `velocity += net * dt`;
//! 3. the force buffer is cleared — forces are one-tick impulses, and a
//!    caller wanting a continuous push must re-apply every tick;
//! 4. velocity is clamped to [`SPEED_MAX`];
//! 5. `position += velocity * dt`;
//! 6. heading turns by [`ROTATION_RATE`]` * dt` left or right; if both
//!    or neither rotation flag is set the net rotation cancels;
//! 7. the visual handle, if one exists, is placed at the new position
//!    and heading, and the collision volume is placed at the new
//!    position.
//!
//! `dt == 0` therefore degenerates to a force-clear plus velocity clamp,
//! and with no thrust and no queued forces the position is bit-for-bit
//! unchanged by an update.
//!
//! # Concurrency
//!
//! Strictly single-threaded and synchronous. Nothing here blocks,
//! suspends or spawns; the one-tick force buffer is a consumption
//! semantic, not a queue between threads.

use std::fmt;

use bitflags::bitflags;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::bullet::{Bullet, BulletId};
use crate::error::ShipError;
use crate::scene::{Scene, VisualId, VolumeId};

/// Default name given to a ship constructed with [`Ship::new`].
pub const NAME_DEFAULT: &str = "unnamed ship";

/// Maximum speed (units/s) a ship may travel at after velocity limiting.
pub const SPEED_MAX: f32 = 50.0;

/// Forward acceleration (units/s²) applied along the heading while
/// thrust is on.
pub const THRUST_ACCELERATION: f32 = 25.0;

/// Turn rate (radians/s) while exactly one rotation flag is set.
pub const ROTATION_RATE: f32 = std::f32::consts::PI;

/// Muzzle speed (units/s) of a fired bullet, along the ship's heading.
pub const BULLET_SPEED: f32 = 80.0;

/// Health a ship starts with.
pub const HEALTH_MAX: i32 = 100;

/// Health lost per bullet hit.
pub const BULLET_DAMAGE: i32 = 25;

bitflags! {
    /// Control flags driven by the input layer.
    ///
    /// Flags are independent: left and right rotation may legally be set
    /// at the same time, in which case the net rotation cancels (see the
    /// module docs, step 6).
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct ControlFlags: u8 {
        /// Forward thrust is engaged.
        const THRUST = 1;
        /// Counterclockwise rotation is engaged.
        const ROTATE_LEFT = 1 << 1;
        /// Clockwise rotation is engaged.
        const ROTATE_RIGHT = 1 << 2;
    }
}

/// Stored collision callback.
///
/// The external collision engine invokes this with the two volumes it
/// found intersecting; the return value reports whether the collision
/// was consumed. The core stores and hands out the callback but never
/// calls it itself.
pub type CollisionHandler = Box<dyn FnMut(VolumeId, VolumeId) -> bool>;

/// A controllable vessel: force accumulation, velocity-limited
/// integration, rotation, bullet lifecycle, collision bookkeeping and
/// health.
///
/// See the [module docs](self) for the per-tick integration contract.
///
/// # Ownership
///
/// A ship exclusively owns its bullets, its visual handle and its
/// collision volume. [`Ship::destroy`] is terminal and releases every
/// owned scene resource exactly once; calling it again is a no-op.
///
/// # Example
///
/// ```
/// use glam::Vec2;
/// use ionflare_core::scene::HeadlessScene;
/// use ionflare_core::ship::Ship;
///
/// let mut scene = HeadlessScene::new();
/// let mut ship = Ship::new(&mut scene);
///
/// ship.thrust_on();
/// ship.update(1.0, &mut scene).unwrap();
/// assert!(ship.velocity().length() > 0.0);
/// assert_ne!(ship.position(), Vec2::ZERO);
/// ```
pub struct Ship {
    name: String,
    position: Vec2,
    velocity: Vec2,
    /// Scalar thrust magnitude; zero whenever thrust is off.
    acceleration: f32,
    /// Facing angle in radians, counterclockwise positive, 0 at creation.
    heading: f32,
    controls: ControlFlags,
    /// One-tick impulse buffer, consumed by the next `update`.
    forces: Vec<Vec2>,
    /// Accumulated contact points. Never cleared by the core itself.
    collisions: Vec<Vec2>,
    health: i32,
    alive: bool,
    bullets: Vec<Bullet>,
    next_bullet_id: u64,
    collision_handler: Option<CollisionHandler>,
    /// Created on demand, `None` after release.
    visual: Option<VisualId>,
    /// Created at construction, `None` only after release.
    volume: Option<VolumeId>,
}

impl Ship {
    /// Creates a ship named [`NAME_DEFAULT`] at the origin.
    ///
    /// The collision volume is created immediately; the visual handle is
    /// created on demand via [`Ship::create_visual`].
    #[must_use]
    pub fn new(scene: &mut dyn Scene) -> Self {
        Self::with_name(NAME_DEFAULT, scene)
    }

    /// Creates a named ship at the origin.
    #[must_use]
    pub fn with_name(name: impl Into<String>, scene: &mut dyn Scene) -> Self {
        let volume = scene.create_volume();
        scene.place_volume(volume, Vec2::ZERO);
        Self {
            name: name.into(),
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: 0.0,
            heading: 0.0,
            controls: ControlFlags::empty(),
            forces: Vec::new(),
            collisions: Vec::new(),
            health: HEALTH_MAX,
            alive: true,
            bullets: Vec::new(),
            next_bullet_id: 0,
            collision_handler: None,
            visual: None,
            volume: Some(volume),
        }
    }

    // =========================================================================
    // Kinematic integration
    // =========================================================================

    /// Advances the ship by one timestep.
    ///
    /// Performs the seven integration steps described in the
    /// [module docs](self). On a destroyed ship this is a silent no-op.
    ///
    /// # Errors
    ///
    /// [`ShipError::NegativeTimestep`] if `dt` is negative or not finite.
    /// A failed update mutates nothing.
    pub fn update(&mut self, dt: f32, scene: &mut dyn Scene) -> Result<(), ShipError> {
        if !self.alive {
            return Ok(());
        }
        if !dt.is_finite() || dt < 0.0 {
            return Err(ShipError::NegativeTimestep(dt));
        }

        // 1-2: accelerate along the heading, plus the queued impulses.
        let thrust = Vec2::from_angle(self.heading) * self.acceleration;
        let net = self.forces.iter().fold(thrust, |acc, f| acc + *f);
        self.velocity += net * dt;

        // 3: forces are valid for exactly one tick.
        self.forces.clear();

        // 4-5: clamp, then move.
        self.limit_velocity();
        self.position += self.velocity * dt;

        // 6: rotation; both flags (or neither) cancel out.
        let left = self.controls.contains(ControlFlags::ROTATE_LEFT);
        let right = self.controls.contains(ControlFlags::ROTATE_RIGHT);
        if left && !right {
            self.heading += ROTATION_RATE * dt;
        } else if right && !left {
            self.heading -= ROTATION_RATE * dt;
        }

        // 7: keep the renderable representation and collision volume in
        // sync with the new transform.
        if let Some(visual) = self.visual {
            scene.place_visual(visual, self.position, self.heading);
        }
        if let Some(volume) = self.volume {
            scene.place_volume(volume, self.position);
        }
        Ok(())
    }

    /// Clamps the velocity to [`SPEED_MAX`], preserving direction.
    ///
    /// Idempotent: applying it twice yields the same velocity as once.
    /// Velocities at or below the limit are untouched.
    pub fn limit_velocity(&mut self) {
        let max_sq = SPEED_MAX * SPEED_MAX;
        if self.velocity.length_squared() > max_sq {
            let mut clamped = self.velocity.normalize() * SPEED_MAX;
            // The rescale can round a single ulp past the cap; nudge it
            // under so the guard above never refires on the same vector.
            while clamped.length_squared() > max_sq {
                clamped *= 1.0 - f32::EPSILON;
            }
            self.velocity = clamped;
        }
    }

    /// Queues a one-tick impulse to be summed into the next `update`.
    ///
    /// Multiple forces queued before an update accumulate additively at
    /// integration time.
    ///
    /// # Errors
    ///
    /// [`ShipError::NonFiniteVector`] if either component is NaN or
    /// infinite; [`ShipError::Destroyed`] on a destroyed ship. The force
    /// buffer is unchanged on error.
    pub fn apply_force(&mut self, force: Vec2) -> Result<(), ShipError> {
        if !self.alive {
            return Err(ShipError::Destroyed {
                name: self.name.clone(),
            });
        }
        if !force.is_finite() {
            return Err(ShipError::NonFiniteVector {
                x: force.x,
                y: force.y,
            });
        }
        self.forces.push(force);
        Ok(())
    }

    // =========================================================================
    // Rotation & thrust controls
    // =========================================================================

    /// Engages forward thrust at [`THRUST_ACCELERATION`].
    pub fn thrust_on(&mut self) {
        self.controls.insert(ControlFlags::THRUST);
        self.acceleration = THRUST_ACCELERATION;
        trace!(ship = %self.name, "thrust on");
    }

    /// Disengages thrust; the stored magnitude drops to zero immediately
    /// (last write wins, nothing is queued).
    pub fn thrust_off(&mut self) {
        self.controls.remove(ControlFlags::THRUST);
        self.acceleration = 0.0;
        trace!(ship = %self.name, "thrust off");
    }

    /// Starts counterclockwise rotation.
    pub fn rotate_left_on(&mut self) {
        self.controls.insert(ControlFlags::ROTATE_LEFT);
    }

    /// Stops counterclockwise rotation.
    pub fn rotate_left_off(&mut self) {
        self.controls.remove(ControlFlags::ROTATE_LEFT);
    }

    /// Starts clockwise rotation.
    pub fn rotate_right_on(&mut self) {
        self.controls.insert(ControlFlags::ROTATE_RIGHT);
    }

    /// Stops clockwise rotation.
    pub fn rotate_right_off(&mut self) {
        self.controls.remove(ControlFlags::ROTATE_RIGHT);
    }

    // =========================================================================
    // Combat
    // =========================================================================

    /// Fires one bullet at [`BULLET_SPEED`] along the current heading.
    ///
    /// The bullet's velocity derives from the heading only; the ship's
    /// own velocity is not added. A fresh visual handle and collision
    /// volume are created for the bullet, and its visual starts at the
    /// ship's position.
    ///
    /// # Errors
    ///
    /// [`ShipError::Destroyed`] on a destroyed ship; no handle is
    /// created in that case.
    pub fn shoot(&mut self, scene: &mut dyn Scene) -> Result<BulletId, ShipError> {
        if !self.alive {
            return Err(ShipError::Destroyed {
                name: self.name.clone(),
            });
        }
        let id = BulletId::new(self.next_bullet_id);
        self.next_bullet_id += 1;

        let velocity = Vec2::from_angle(self.heading) * BULLET_SPEED;
        let visual = scene.create_visual();
        let physical = scene.create_volume();
        scene.place_visual(visual, self.position, self.heading);
        scene.place_volume(physical, self.position);

        self.bullets.push(Bullet::new(id, velocity, visual, physical));
        debug!(ship = %self.name, bullet = %id, "shot fired");
        Ok(id)
    }

    /// Applies one bullet hit: health drops by [`BULLET_DAMAGE`], and a
    /// ship at or below zero health is destroyed.
    ///
    /// No-op on a ship that is already destroyed.
    pub fn bullet_hit(&mut self, scene: &mut dyn Scene) {
        if !self.alive {
            return;
        }
        self.health -= BULLET_DAMAGE;
        debug!(ship = %self.name, health = self.health, "bullet hit");
        if self.health <= 0 {
            self.destroy(scene);
        }
    }

    /// Destroys the ship: terminal, idempotent.
    ///
    /// Releases the visual handle, the collision volume, and every live
    /// bullet's handles, each exactly once. Repeated calls do nothing.
    /// Getters remain safe to call afterwards.
    pub fn destroy(&mut self, scene: &mut dyn Scene) {
        if let Some(visual) = self.visual.take() {
            scene.destroy_visual(visual);
        }
        if let Some(volume) = self.volume.take() {
            scene.destroy_volume(volume);
        }
        for bullet in self.bullets.drain(..) {
            scene.destroy_visual(bullet.visual());
            scene.destroy_volume(bullet.physical());
        }
        if self.alive {
            self.alive = false;
            debug!(ship = %self.name, "ship destroyed");
        }
    }

    /// Removes `id` from the bullet list, releasing its visual and
    /// physical handles.
    ///
    /// # Errors
    ///
    /// [`ShipError::BulletNotFound`] if the ship does not own a bullet
    /// with that id; the list is unchanged.
    pub fn destroy_bullet(&mut self, id: BulletId, scene: &mut dyn Scene) -> Result<(), ShipError> {
        let index = self
            .bullets
            .iter()
            .position(|b| b.id() == id)
            .ok_or(ShipError::BulletNotFound(id))?;
        let bullet = self.bullets.remove(index);
        scene.destroy_visual(bullet.visual());
        scene.destroy_volume(bullet.physical());
        debug!(ship = %self.name, bullet = %id, "bullet destroyed");
        Ok(())
    }

    /// Removal pass: destroys every bullet whose alive flag the external
    /// collision engine has cleared. Returns how many were removed.
    ///
    /// After this call the bullet list contains only live bullets.
    pub fn cull_bullets(&mut self, scene: &mut dyn Scene) -> usize {
        let mut removed = 0;
        let mut index = 0;
        while index < self.bullets.len() {
            if self.bullets[index].is_alive() {
                index += 1;
            } else {
                let bullet = self.bullets.remove(index);
                scene.destroy_visual(bullet.visual());
                scene.destroy_volume(bullet.physical());
                removed += 1;
            }
        }
        if removed > 0 {
            debug!(ship = %self.name, removed, "culled expired bullets");
        }
        removed
    }

    // =========================================================================
    // Collision bookkeeping
    // =========================================================================

    /// Records a collision contact point.
    ///
    /// The list is diagnostic and consumer-facing; the core never clears
    /// it on its own.
    ///
    /// # Errors
    ///
    /// [`ShipError::NonFiniteVector`] if either component is NaN or
    /// infinite; the list is unchanged.
    pub fn add_collision(&mut self, point: Vec2) -> Result<(), ShipError> {
        if !point.is_finite() {
            return Err(ShipError::NonFiniteVector {
                x: point.x,
                y: point.y,
            });
        }
        self.collisions.push(point);
        Ok(())
    }

    /// Read-only view of the accumulated collision contact points.
    #[must_use]
    pub fn collisions(&self) -> &[Vec2] {
        &self.collisions
    }

    /// Empties the collision list. For the external engine or host; the
    /// core never calls this itself.
    pub fn clear_collisions(&mut self) {
        self.collisions.clear();
    }

    /// Stores the collision callback the external engine will invoke.
    /// Replaces any previously stored handler.
    pub fn set_collision_handler<F>(&mut self, handler: F)
    where
        F: FnMut(VolumeId, VolumeId) -> bool + 'static,
    {
        self.collision_handler = Some(Box::new(handler));
    }

    /// Returns `true` if a collision handler is currently stored.
    #[must_use]
    pub fn has_collision_handler(&self) -> bool {
        self.collision_handler.is_some()
    }

    /// Mutable access to the stored collision handler, for the external
    /// collision engine to invoke. The core never invokes it.
    pub fn collision_handler_mut(&mut self) -> Option<&mut CollisionHandler> {
        self.collision_handler.as_mut()
    }

    // =========================================================================
    // Visual handle
    // =========================================================================

    /// Creates the ship's visual representation if it does not exist yet,
    /// placing it at the current position and heading.
    ///
    /// Returns the (new or existing) handle, or `None` on a destroyed
    /// ship.
    pub fn create_visual(&mut self, scene: &mut dyn Scene) -> Option<VisualId> {
        if !self.alive {
            return None;
        }
        if self.visual.is_none() {
            let visual = scene.create_visual();
            scene.place_visual(visual, self.position, self.heading);
            self.visual = Some(visual);
        }
        self.visual
    }

    /// Handle of the ship's visual representation, if one exists.
    #[must_use]
    pub fn visual(&self) -> Option<VisualId> {
        self.visual
    }

    /// Handle of the ship's collision volume. `None` only after the ship
    /// has been destroyed.
    #[must_use]
    pub fn volume(&self) -> Option<VolumeId> {
        self.volume
    }

    /// Returns `true` once a visual handle exists and the scene reports
    /// it attached.
    #[must_use]
    pub fn is_visible(&self, scene: &dyn Scene) -> bool {
        self.visual.is_some_and(|visual| scene.is_attached(visual))
    }

    // =========================================================================
    // Queries & setters
    // =========================================================================

    /// The ship's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current linear velocity.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Scalar thrust magnitude: [`THRUST_ACCELERATION`] while thrust is
    /// on, zero otherwise.
    #[must_use]
    pub fn acceleration(&self) -> f32 {
        self.acceleration
    }

    /// Facing angle in radians.
    #[must_use]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Current control flags.
    #[must_use]
    pub fn controls(&self) -> ControlFlags {
        self.controls
    }

    /// Returns `true` while the left-rotation flag is set.
    #[must_use]
    pub fn is_rotating_left(&self) -> bool {
        self.controls.contains(ControlFlags::ROTATE_LEFT)
    }

    /// Returns `true` while the right-rotation flag is set.
    #[must_use]
    pub fn is_rotating_right(&self) -> bool {
        self.controls.contains(ControlFlags::ROTATE_RIGHT)
    }

    /// Remaining health.
    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Returns `true` until the ship is destroyed.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// The ship's live bullets, in firing order.
    #[must_use]
    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    /// Mutable access to one bullet, for the external collision engine
    /// to mark it expired.
    pub fn bullet_mut(&mut self, id: BulletId) -> Option<&mut Bullet> {
        self.bullets.iter_mut().find(|b| b.id() == id)
    }

    /// Forces queued for the next `update`.
    #[must_use]
    pub fn forces(&self) -> &[Vec2] {
        &self.forces
    }

    /// Teleports the ship. The visual catches up on the next `update`.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Overwrites the velocity, bypassing integration. Not clamped until
    /// the next [`Ship::limit_velocity`] or `update`.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ship")
            .field("name", &self.name)
            .field("position", &self.position)
            .field("velocity", &self.velocity)
            .field("acceleration", &self.acceleration)
            .field("heading", &self.heading)
            .field("controls", &self.controls)
            .field("health", &self.health)
            .field("alive", &self.alive)
            .field("bullets", &self.bullets.len())
            .field("has_handler", &self.collision_handler.is_some())
            .finish_non_exhaustive()
    }
}
