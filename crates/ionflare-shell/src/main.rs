//! Minimal host loop: a player flies a ship for a few seconds of
//! simulated time over a headless scene, logging what happens.

use std::cell::RefCell;
use std::rc::Rc;

use ionflare_core::scene::HeadlessScene;
use ionflare_core::ship::Ship;
use ionflare_shell::{apply_intent, EventBus, Player, PlayerIntent};
use tracing::info;

/// Fixed timestep, one tick per simulated frame at 60 FPS.
const DT: f32 = 1.0 / 60.0;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut scene = HeadlessScene::new();
    let mut ship = Ship::with_name("ace", &mut scene);
    ship.create_visual(&mut scene);

    let mut player = Player::with_name("ace");
    let mut bus = EventBus::new();

    // Subscribers run while the bus is borrowed, so they park intents in
    // a queue the loop drains before each tick.
    let queue: Rc<RefCell<Vec<PlayerIntent>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = queue.clone();
    bus.subscribe(move |event| sink.borrow_mut().push(event.intent));

    // A short scripted flight: turn, burn, fire twice, coast.
    let script: &[(u32, PlayerIntent)] = &[
        (0, PlayerIntent::RotateLeftOn),
        (30, PlayerIntent::RotateLeftOff),
        (30, PlayerIntent::MoveForwardOn),
        (60, PlayerIntent::Shoot),
        (90, PlayerIntent::Shoot),
        (120, PlayerIntent::MoveForwardOff),
    ];

    for tick in 0..240u32 {
        for &(at, intent) in script {
            if at == tick {
                match intent {
                    PlayerIntent::MoveForwardOn => player.move_forward_on(&mut bus),
                    PlayerIntent::MoveForwardOff => player.move_forward_off(&mut bus),
                    PlayerIntent::RotateLeftOn => player.rotate_left_on(&mut bus),
                    PlayerIntent::RotateLeftOff => player.rotate_left_off(&mut bus),
                    PlayerIntent::RotateRightOn => player.rotate_right_on(&mut bus),
                    PlayerIntent::RotateRightOff => player.rotate_right_off(&mut bus),
                    PlayerIntent::Shoot => player.shoot(&mut bus),
                }
            }
        }

        for intent in queue.borrow_mut().drain(..) {
            if let Err(err) = apply_intent(&mut ship, &mut scene, intent) {
                info!(%err, "intent dropped");
            }
        }

        if let Err(err) = ship.update(DT, &mut scene) {
            info!(%err, "update failed");
            break;
        }
    }

    info!(
        position = ?ship.position(),
        speed = ship.velocity().length(),
        heading = ship.heading(),
        bullets = ship.bullets().len(),
        "flight complete"
    );
}
