//! # Ionflare Shell
//!
//! The input/event layer around the `ionflare-core` simulation:
//!
//! - [`event`]: player intents, named broadcast events, and the explicit
//!   publish/subscribe [`EventBus`](event::EventBus) (no global
//!   messenger — hosts construct a bus and pass it where it is needed)
//! - [`player`]: per-player intent flags and score
//! - [`host`]: translation from drained intents to ship control calls
//!
//! The `ionflare` binary in this crate wires the three together over a
//! headless scene as a minimal host loop.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod event;
pub mod host;
pub mod player;

// Re-exports for convenience
pub use event::{named_event, EventBus, PlayerEvent, PlayerIntent};
pub use host::apply_intent;
pub use player::Player;
