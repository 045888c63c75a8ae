//! Player: input intent flags and score, publishing to the event bus.
//!
//! A `Player` mirrors the control surface of a ship as plain on/off
//! flags. Each intent method flips its flag and publishes the matching
//! named event on the bus it is handed; the host wires subscribers that
//! translate those events into calls on the simulated ship.

use crate::event::{EventBus, PlayerIntent};

/// Default name for a player constructed with [`Player::new`].
pub const NAME_DEFAULT: &str = "unnamed";

/// A player's input state and score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    forward: bool,
    rotate_left: bool,
    rotate_right: bool,
    score: u32,
}

impl Player {
    /// Creates a player named [`NAME_DEFAULT`] with all intents off.
    #[must_use]
    pub fn new() -> Self {
        Self::with_name(NAME_DEFAULT)
    }

    /// Creates a named player with all intents off.
    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            forward: false,
            rotate_left: false,
            rotate_right: false,
            score: 0,
        }
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fires one shot. Publishes [`PlayerIntent::Shoot`]; no flag state.
    pub fn shoot(&mut self, bus: &mut EventBus) {
        bus.publish(&self.name, PlayerIntent::Shoot);
    }

    /// Engages forward thrust.
    pub fn move_forward_on(&mut self, bus: &mut EventBus) {
        self.forward = true;
        bus.publish(&self.name, PlayerIntent::MoveForwardOn);
    }

    /// Releases forward thrust.
    pub fn move_forward_off(&mut self, bus: &mut EventBus) {
        self.forward = false;
        bus.publish(&self.name, PlayerIntent::MoveForwardOff);
    }

    /// Returns `true` while the forward intent is held.
    #[must_use]
    pub fn is_forward_on(&self) -> bool {
        self.forward
    }

    /// Engages left rotation.
    pub fn rotate_left_on(&mut self, bus: &mut EventBus) {
        self.rotate_left = true;
        bus.publish(&self.name, PlayerIntent::RotateLeftOn);
    }

    /// Releases left rotation.
    pub fn rotate_left_off(&mut self, bus: &mut EventBus) {
        self.rotate_left = false;
        bus.publish(&self.name, PlayerIntent::RotateLeftOff);
    }

    /// Returns `true` while the rotate-left intent is held.
    #[must_use]
    pub fn is_rotate_left_on(&self) -> bool {
        self.rotate_left
    }

    /// Engages right rotation.
    pub fn rotate_right_on(&mut self, bus: &mut EventBus) {
        self.rotate_right = true;
        bus.publish(&self.name, PlayerIntent::RotateRightOn);
    }

    /// Releases right rotation.
    pub fn rotate_right_off(&mut self, bus: &mut EventBus) {
        self.rotate_right = false;
        bus.publish(&self.name, PlayerIntent::RotateRightOff);
    }

    /// Returns `true` while the rotate-right intent is held.
    #[must_use]
    pub fn is_rotate_right_on(&self) -> bool {
        self.rotate_right
    }

    /// The player's score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Awards points.
    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
