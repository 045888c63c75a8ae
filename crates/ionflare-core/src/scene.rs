//! Scene collaborator interface and opaque resource handles.
//!
//! The core keeps a renderable representation and a collision volume in
//! sync for every entity it owns, but it does not know how either is
//! implemented. Both collaborators are reached through the [`Scene`]
//! trait; the core addresses individual resources through the opaque
//! [`VisualId`] and [`VolumeId`] handles the scene allocates.
//!
//! # Ownership
//!
//! Handles are exclusively owned: a ship owns its visual and its
//! collision volume, a bullet owns its visual and its physical volume,
//! and nothing is shared between entities. The owner is responsible for
//! releasing each handle exactly once through [`Scene::destroy_visual`]
//! or [`Scene::destroy_volume`].
//!
//! [`HeadlessScene`] is a concrete bookkeeping implementation for hosts
//! that run the simulation without a renderer (and for tests).

use std::collections::BTreeMap;
use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque handle to a renderable representation owned by an entity.
///
/// `VisualId` is a newtype around `u64`. Handles are allocated by a
/// [`Scene`] and are only meaningful to the scene that created them.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VisualId(u64);

impl VisualId {
    /// Creates a handle from a raw value. Intended for `Scene` implementations.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw handle value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for VisualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VisualId({})", self.0)
    }
}

impl fmt::Display for VisualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle to a collision volume owned by an entity.
///
/// The external collision engine performs intersection tests between
/// volumes; the core only creates, positions and destroys them.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VolumeId(u64);

impl VolumeId {
    /// Creates a handle from a raw value. Intended for `Scene` implementations.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw handle value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for VolumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VolumeId({})", self.0)
    }
}

impl fmt::Display for VolumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// External scene collaborator: rendering plus collision-volume storage.
///
/// The host application implements this trait over its actual scene
/// graph and collision engine. The core calls it but never defines how
/// resources are drawn or intersected.
///
/// Destroying an unknown or already-destroyed handle must be a no-op;
/// the core's own release tracking never double-destroys, but scene
/// implementations should stay robust anyway.
pub trait Scene {
    /// Allocates a new renderable representation and returns its handle.
    fn create_visual(&mut self) -> VisualId;

    /// Releases a renderable representation.
    fn destroy_visual(&mut self, id: VisualId);

    /// Moves and orients a renderable representation.
    fn place_visual(&mut self, id: VisualId, position: Vec2, heading: f32);

    /// Returns `true` while `id` refers to a live, attached representation.
    fn is_attached(&self, id: VisualId) -> bool;

    /// Allocates a new collision volume and returns its handle.
    fn create_volume(&mut self) -> VolumeId;

    /// Releases a collision volume.
    fn destroy_volume(&mut self, id: VolumeId);

    /// Moves a collision volume so the external collision engine tests
    /// it at the owner's current position.
    fn place_volume(&mut self, id: VolumeId, position: Vec2);
}

/// Scene implementation that tracks resources without rendering anything.
///
/// `HeadlessScene` records which handles are live and where each visual
/// and volume was last placed. Hosts without a renderer (dedicated simulation
/// loops, tests) use it as their scene backend, and tests use its
/// counters to assert on resource lifecycles.
///
/// # Example
///
/// ```
/// use ionflare_core::scene::{HeadlessScene, Scene};
///
/// let mut scene = HeadlessScene::new();
/// let visual = scene.create_visual();
/// assert!(scene.is_attached(visual));
/// assert_eq!(scene.live_visuals(), 1);
///
/// scene.destroy_visual(visual);
/// assert!(!scene.is_attached(visual));
/// assert_eq!(scene.live_visuals(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeadlessScene {
    next_id: u64,
    /// Last placed transform per live visual. `None` until first placement.
    visuals: BTreeMap<VisualId, Option<(Vec2, f32)>>,
    /// Last placed position per live volume. `None` until first placement.
    volumes: BTreeMap<VolumeId, Option<Vec2>>,
}

impl HeadlessScene {
    /// Creates an empty headless scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently live visuals.
    #[must_use]
    pub fn live_visuals(&self) -> usize {
        self.visuals.len()
    }

    /// Number of currently live collision volumes.
    #[must_use]
    pub fn live_volumes(&self) -> usize {
        self.volumes.len()
    }

    /// Last transform pushed to `id` via [`Scene::place_visual`].
    ///
    /// Returns `None` if the visual is unknown, destroyed, or was never
    /// placed.
    #[must_use]
    pub fn placed_transform(&self, id: VisualId) -> Option<(Vec2, f32)> {
        self.visuals.get(&id).copied().flatten()
    }

    /// Last position pushed to `id` via [`Scene::place_volume`].
    ///
    /// Returns `None` if the volume is unknown, destroyed, or was never
    /// placed.
    #[must_use]
    pub fn placed_volume_position(&self, id: VolumeId) -> Option<Vec2> {
        self.volumes.get(&id).copied().flatten()
    }

    fn next(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Scene for HeadlessScene {
    fn create_visual(&mut self) -> VisualId {
        let id = VisualId::new(self.next());
        self.visuals.insert(id, None);
        id
    }

    fn destroy_visual(&mut self, id: VisualId) {
        self.visuals.remove(&id);
    }

    fn place_visual(&mut self, id: VisualId, position: Vec2, heading: f32) {
        if let Some(transform) = self.visuals.get_mut(&id) {
            *transform = Some((position, heading));
        }
    }

    fn is_attached(&self, id: VisualId) -> bool {
        self.visuals.contains_key(&id)
    }

    fn create_volume(&mut self) -> VolumeId {
        let id = VolumeId::new(self.next());
        self.volumes.insert(id, None);
        id
    }

    fn destroy_volume(&mut self, id: VolumeId) {
        self.volumes.remove(&id);
    }

    fn place_volume(&mut self, id: VolumeId, position: Vec2) {
        if let Some(slot) = self.volumes.get_mut(&id) {
            *slot = Some(position);
        }
    }
}
