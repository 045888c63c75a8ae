//! Translation from published player intents to ship control calls.
//!
//! The simulation core knows nothing about events; this is the glue
//! that turns a drained queue of [`PlayerIntent`]s into calls on the
//! ship's control surface.

use ionflare_core::error::ShipError;
use ionflare_core::scene::Scene;
use ionflare_core::ship::Ship;

use crate::event::PlayerIntent;

/// Applies one intent to a ship.
///
/// # Errors
///
/// [`ShipError::Destroyed`] if the intent was a shot and the ship is
/// already destroyed; flag intents on a destroyed ship succeed but have
/// no further kinematic effect.
pub fn apply_intent(
    ship: &mut Ship,
    scene: &mut dyn Scene,
    intent: PlayerIntent,
) -> Result<(), ShipError> {
    match intent {
        PlayerIntent::MoveForwardOn => ship.thrust_on(),
        PlayerIntent::MoveForwardOff => ship.thrust_off(),
        PlayerIntent::RotateLeftOn => ship.rotate_left_on(),
        PlayerIntent::RotateLeftOff => ship.rotate_left_off(),
        PlayerIntent::RotateRightOn => ship.rotate_right_on(),
        PlayerIntent::RotateRightOff => ship.rotate_right_off(),
        PlayerIntent::Shoot => {
            ship.shoot(scene)?;
        }
    }
    Ok(())
}
