//! Player intents and the broadcast event bus.
//!
//! Input devices translate into [`PlayerIntent`]s; each intent carries a
//! human-readable label, and [`named_event`] builds the `"<player>
//! <label>"` broadcast string consumers key their subscriptions on.
//!
//! The bus is an explicit object the host constructs and passes around.
//! There is no ambient global messenger: anything that wants to hear
//! events subscribes on the bus instance it was handed.

use std::fmt;

/// An on/off or one-shot intent raised by a player.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PlayerIntent {
    /// Forward thrust engaged.
    MoveForwardOn,
    /// Forward thrust released.
    MoveForwardOff,
    /// Left rotation engaged.
    RotateLeftOn,
    /// Left rotation released.
    RotateLeftOff,
    /// Right rotation engaged.
    RotateRightOn,
    /// Right rotation released.
    RotateRightOff,
    /// Fire one shot.
    Shoot,
}

impl PlayerIntent {
    /// The broadcast label for this intent.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MoveForwardOn => "Player Move Forward On",
            Self::MoveForwardOff => "Player Move Forward Off",
            Self::RotateLeftOn => "Player Rotate Left On",
            Self::RotateLeftOff => "Player Rotate Left Off",
            Self::RotateRightOn => "Player Rotate Right On",
            Self::RotateRightOff => "Player Rotate Right Off",
            Self::Shoot => "Player Shoot",
        }
    }
}

impl fmt::Display for PlayerIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Builds the per-player broadcast name: `"<player> <label>"`.
///
/// # Example
///
/// ```
/// use ionflare_shell::event::{named_event, PlayerIntent};
///
/// let name = named_event("ace", PlayerIntent::Shoot);
/// assert_eq!(name, "ace Player Shoot");
/// ```
#[must_use]
pub fn named_event(player: &str, intent: PlayerIntent) -> String {
    format!("{player} {}", intent.label())
}

/// A published event: which player raised which intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEvent {
    /// Name of the player that raised the intent.
    pub player: String,
    /// The intent itself.
    pub intent: PlayerIntent,
}

impl PlayerEvent {
    /// The broadcast name of this event (see [`named_event`]).
    #[must_use]
    pub fn name(&self) -> String {
        named_event(&self.player, self.intent)
    }
}

/// Subscriber callback invoked for every published event.
pub type Subscriber = Box<dyn FnMut(&PlayerEvent)>;

/// Explicit publish/subscribe bus for player events.
///
/// Single-threaded, synchronous: `publish` invokes every subscriber in
/// subscription order before returning.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use ionflare_shell::event::{EventBus, PlayerIntent};
///
/// let mut bus = EventBus::new();
/// let seen = Rc::new(Cell::new(0));
/// let counter = seen.clone();
/// bus.subscribe(move |_| counter.set(counter.get() + 1));
///
/// bus.publish("ace", PlayerIntent::Shoot);
/// assert_eq!(seen.get(), 1);
/// ```
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
}

impl EventBus {
    /// Creates a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber invoked for every subsequent publish.
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&PlayerEvent) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Number of registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Publishes one intent to every subscriber, synchronously.
    pub fn publish(&mut self, player: &str, intent: PlayerIntent) {
        let event = PlayerEvent {
            player: player.to_string(),
            intent,
        };
        tracing::trace!(event = %event.name(), "publish");
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn labels_are_distinct() {
        use PlayerIntent::{
            MoveForwardOff, MoveForwardOn, RotateLeftOff, RotateLeftOn, RotateRightOff,
            RotateRightOn, Shoot,
        };
        let all = [
            MoveForwardOn,
            MoveForwardOff,
            RotateLeftOn,
            RotateLeftOff,
            RotateRightOn,
            RotateRightOff,
            Shoot,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn named_event_prefixes_player_name() {
        assert_eq!(
            named_event("red five", PlayerIntent::RotateLeftOn),
            "red five Player Rotate Left On"
        );
    }

    #[test]
    fn publish_reaches_every_subscriber_in_order() {
        let mut bus = EventBus::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let log = log.clone();
            bus.subscribe(move |event| {
                log.borrow_mut().push((tag, event.intent));
            });
        }
        assert_eq!(bus.subscriber_count(), 2);

        bus.publish("ace", PlayerIntent::Shoot);
        assert_eq!(
            log.borrow().as_slice(),
            &[("first", PlayerIntent::Shoot), ("second", PlayerIntent::Shoot)]
        );
    }

    #[test]
    fn publish_with_no_subscribers_is_fine() {
        let mut bus = EventBus::new();
        bus.publish("ace", PlayerIntent::MoveForwardOn);
    }

    #[test]
    fn event_name_matches_named_event() {
        let event = PlayerEvent {
            player: "ace".to_string(),
            intent: PlayerIntent::Shoot,
        };
        assert_eq!(event.name(), "ace Player Shoot");
    }
}
