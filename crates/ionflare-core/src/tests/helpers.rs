//! Shared setup utilities for the scenario and property suites.

use glam::Vec2;

use crate::scene::HeadlessScene;
use crate::ship::Ship;

/// A ship and the headless scene backing it.
pub struct Fixture {
    /// The ship under test.
    pub ship: Ship,
    /// The scene collaborator its handles live in.
    pub scene: HeadlessScene,
}

/// Creates a default ship in a fresh headless scene.
pub fn fixture() -> Fixture {
    let mut scene = HeadlessScene::new();
    let ship = Ship::new(&mut scene);
    Fixture { ship, scene }
}

/// Creates a ship that already has a visual representation.
pub fn visible_fixture() -> Fixture {
    let mut fx = fixture();
    fx.ship
        .create_visual(&mut fx.scene)
        .expect("live ship can create a visual");
    fx
}

/// Runs `ticks` updates of `dt` seconds each.
pub fn run_ticks(fx: &mut Fixture, ticks: u32, dt: f32) {
    for _ in 0..ticks {
        fx.ship
            .update(dt, &mut fx.scene)
            .expect("update with valid dt succeeds");
    }
}

/// Asserts two vectors agree within `tol` per component.
pub fn assert_vec2_near(actual: Vec2, expected: Vec2, tol: f32) {
    assert!(
        (actual.x - expected.x).abs() <= tol && (actual.y - expected.y).abs() <= tol,
        "expected {expected:?} within {tol}, got {actual:?}"
    );
}
