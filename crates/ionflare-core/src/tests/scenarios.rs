//! Feature-level scenario tests.
//!
//! These drive a ship through whole ticks the way a host game loop
//! would, checking higher-level behavior (forces, thrust, rotation,
//! combat, resource lifecycles) rather than any single method.

use glam::Vec2;

use crate::ship::{BULLET_DAMAGE, HEALTH_MAX, SPEED_MAX, THRUST_ACCELERATION};

use super::helpers::{assert_vec2_near, fixture, run_ticks, visible_fixture};

#[test]
fn idle_ship_stays_put() {
    let mut fx = fixture();
    let before = fx.ship.position();
    run_ticks(&mut fx, 100, 0.01);
    // Exact equality: no thrust, no forces, no drift.
    assert_eq!(fx.ship.position(), before);
    assert_eq!(fx.ship.velocity(), Vec2::ZERO);
}

#[test]
fn single_impulse_moves_the_ship() {
    let mut fx = fixture();
    assert_eq!(fx.ship.position(), Vec2::ZERO);

    // First tick without the force: no movement.
    fx.ship.update(0.01, &mut fx.scene).unwrap();
    assert_eq!(fx.ship.position(), Vec2::ZERO);

    // One impulse, one tick: the ship has moved.
    fx.ship.apply_force(Vec2::new(4.0, 6.0)).unwrap();
    fx.ship.update(0.01, &mut fx.scene).unwrap();
    assert_ne!(fx.ship.position(), Vec2::ZERO);

    // The impulse direction shows in the displacement.
    let displacement = fx.ship.position();
    assert!(displacement.x > 0.0);
    assert!(displacement.y > 0.0);
    assert_vec2_near(
        displacement,
        Vec2::new(4.0, 6.0) * 0.01 * 0.01,
        1e-6,
    );
}

#[test]
fn impulse_coasts_after_the_tick_that_consumed_it() {
    let mut fx = fixture();
    fx.ship.apply_force(Vec2::new(10.0, 0.0)).unwrap();
    run_ticks(&mut fx, 1, 0.1);
    let speed = fx.ship.velocity().length();

    // Ten more ticks with no new force: speed holds, position drifts.
    run_ticks(&mut fx, 10, 0.1);
    assert!((fx.ship.velocity().length() - speed).abs() < 1e-5);
    assert!(fx.ship.position().length() > 0.0);
}

#[test]
fn thrust_beats_coasting_baseline() {
    let mut baseline = fixture();
    run_ticks(&mut baseline, 1, 1.0);

    let mut thrusting = fixture();
    thrusting.ship.thrust_on();
    run_ticks(&mut thrusting, 1, 1.0);

    assert!(thrusting.ship.velocity().length() > baseline.ship.velocity().length());
    // One second of thrust from rest: speed is dt * acceleration.
    assert!((thrusting.ship.velocity().length() - THRUST_ACCELERATION).abs() < 1e-4);
}

#[test]
fn sustained_thrust_saturates_at_speed_max() {
    let mut fx = fixture();
    fx.ship.thrust_on();
    // Far more thrust time than needed to reach the cap.
    run_ticks(&mut fx, 600, 1.0 / 60.0);
    assert!(fx.ship.velocity().length() <= SPEED_MAX + 0.01);
    assert!((fx.ship.velocity().length() - SPEED_MAX).abs() < 0.01);
}

#[test]
fn overspeed_velocity_is_clamped_within_tolerance() {
    let mut fx = fixture();
    fx.ship.set_velocity(Vec2::new(SPEED_MAX, SPEED_MAX));
    fx.ship.limit_velocity();
    let speed = fx.ship.velocity().length();
    assert!((speed - SPEED_MAX).abs() < 0.01);
    assert!(speed >= 0.0);
}

#[test]
fn turning_changes_where_thrust_takes_you() {
    // Thrust straight ahead.
    let mut straight = fixture();
    straight.ship.thrust_on();
    run_ticks(&mut straight, 60, 1.0 / 60.0);

    // Turn for half a second, then thrust the same amount of time.
    let mut turned = fixture();
    turned.ship.rotate_left_on();
    run_ticks(&mut turned, 30, 1.0 / 60.0);
    turned.ship.rotate_left_off();
    turned.ship.thrust_on();
    run_ticks(&mut turned, 60, 1.0 / 60.0);

    let a = straight.ship.position();
    let b = turned.ship.position();
    assert!(a.distance(b) > 0.1, "headings {a:?} vs {b:?} should diverge");
}

#[test]
fn visual_tracks_ship_through_a_flight() {
    let mut fx = visible_fixture();
    let visual = fx.ship.visual().unwrap();

    fx.ship.thrust_on();
    fx.ship.rotate_right_on();
    run_ticks(&mut fx, 30, 1.0 / 60.0);

    let (pos, heading) = fx.scene.placed_transform(visual).unwrap();
    assert_eq!(pos, fx.ship.position());
    assert_eq!(heading, fx.ship.heading());
    assert!(heading < 0.0); // turned right
}

#[test]
fn shots_fired_while_turning_diverge() {
    let mut fx = fixture();
    let first = fx.ship.shoot(&mut fx.scene).unwrap();

    fx.ship.rotate_left_on();
    run_ticks(&mut fx, 30, 1.0 / 60.0);
    let second = fx.ship.shoot(&mut fx.scene).unwrap();

    let bullets = fx.ship.bullets();
    let v1 = bullets.iter().find(|b| b.id() == first).unwrap().velocity();
    let v2 = bullets.iter().find(|b| b.id() == second).unwrap().velocity();
    assert!(v1.distance(v2) > 1.0);
    // Same muzzle speed either way.
    assert!((v1.length() - v2.length()).abs() < 1e-3);
}

#[test]
fn collision_engine_expires_bullets_and_cull_reclaims() {
    let mut fx = fixture();
    let a = fx.ship.shoot(&mut fx.scene).unwrap();
    let _b = fx.ship.shoot(&mut fx.scene).unwrap();
    let volumes_with_two_bullets = fx.scene.live_volumes();

    // The external collision engine decides bullet `a` hit something.
    fx.ship.bullet_mut(a).unwrap().kill();
    let removed = fx.ship.cull_bullets(&mut fx.scene);

    assert_eq!(removed, 1);
    assert_eq!(fx.ship.bullets().len(), 1);
    assert_eq!(fx.scene.live_volumes(), volumes_with_two_bullets - 1);
    assert!(fx.ship.bullets().iter().all(crate::bullet::Bullet::is_alive));
}

#[test]
fn four_hits_end_the_ship_and_reclaim_every_resource() {
    let mut fx = visible_fixture();
    fx.ship.shoot(&mut fx.scene).unwrap();

    let hits_to_kill = (HEALTH_MAX + BULLET_DAMAGE - 1) / BULLET_DAMAGE;
    for i in 1..=hits_to_kill {
        assert!(fx.ship.is_alive(), "ship died early at hit {i}");
        fx.ship.bullet_hit(&mut fx.scene);
    }

    assert!(!fx.ship.is_alive());
    assert!(fx.ship.health() <= 0);
    // Ship visual, ship volume, bullet visual and bullet volume all gone.
    assert_eq!(fx.scene.live_visuals(), 0);
    assert_eq!(fx.scene.live_volumes(), 0);

    // Getters stay safe after destruction.
    assert_eq!(fx.ship.bullets().len(), 0);
    assert!(!fx.ship.is_visible(&fx.scene));
}

#[test]
fn health_decreases_monotonically_and_stays_dead() {
    let mut fx = fixture();
    let mut last = fx.ship.health();
    for _ in 0..10 {
        fx.ship.bullet_hit(&mut fx.scene);
        assert!(fx.ship.health() <= last);
        last = fx.ship.health();
        if fx.ship.health() <= 0 {
            assert!(!fx.ship.is_alive());
        }
    }
    assert!(!fx.ship.is_alive());
}

#[test]
fn two_ships_in_one_scene_keep_resources_separate() {
    let mut fx = fixture();
    let mut other = crate::ship::Ship::with_name("raider", &mut fx.scene);
    other.shoot(&mut fx.scene).unwrap();
    assert_eq!(fx.scene.live_volumes(), 3); // 2 ships + 1 bullet

    other.destroy(&mut fx.scene);
    // Only the raider's resources are reclaimed.
    assert_eq!(fx.scene.live_volumes(), 1);
    assert!(fx.ship.is_alive());
    assert!(fx.ship.volume().is_some());
}
