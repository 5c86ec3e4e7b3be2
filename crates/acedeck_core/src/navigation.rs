//! Slide navigation state machine.
//!
//! States are the slide indices `0..len`, the initial state is `0`, and the
//! transitions are [`Navigator::advance`], [`Navigator::retreat`] and
//! [`Navigator::jump_to`]. What happens at either end of the deck is decided
//! once, at construction, by a [`BoundaryPolicy`].

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::deck::Deck;

/// Behavior when navigating past the first or last slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Moving past either end has no effect
    Clamp,
    /// Moving past the last slide returns to the first, and vice versa
    #[default]
    Wrap,
}

impl BoundaryPolicy {
    pub const ALL: [BoundaryPolicy; 2] = [BoundaryPolicy::Clamp, BoundaryPolicy::Wrap];

    pub fn name(&self) -> &'static str {
        match self {
            BoundaryPolicy::Clamp => "clamp",
            BoundaryPolicy::Wrap => "wrap",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// A navigation request from any input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Advance,
    Retreat,
    JumpTo(usize),
}

/// Owns the current slide index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    len: NonZeroUsize,
    policy: BoundaryPolicy,
}

impl Navigator {
    pub fn new(len: NonZeroUsize, policy: BoundaryPolicy) -> Self {
        Self {
            current: 0,
            len,
            policy,
        }
    }

    pub fn for_deck(deck: &Deck, policy: BoundaryPolicy) -> Self {
        Self::new(deck.len(), policy)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    fn last(&self) -> usize {
        self.len.get() - 1
    }

    /// Whether `advance` would change the index.
    pub fn can_advance(&self) -> bool {
        match self.policy {
            BoundaryPolicy::Wrap => self.len.get() > 1,
            BoundaryPolicy::Clamp => self.current < self.last(),
        }
    }

    /// Whether `retreat` would change the index.
    pub fn can_retreat(&self) -> bool {
        match self.policy {
            BoundaryPolicy::Wrap => self.len.get() > 1,
            BoundaryPolicy::Clamp => self.current > 0,
        }
    }

    /// Move to the next slide. Returns true if the index changed.
    pub fn advance(&mut self) -> bool {
        let before = self.current;
        self.current = if self.current < self.last() {
            self.current + 1
        } else {
            match self.policy {
                BoundaryPolicy::Clamp => self.current,
                BoundaryPolicy::Wrap => 0,
            }
        };
        before != self.current
    }

    /// Move to the previous slide. Returns true if the index changed.
    pub fn retreat(&mut self) -> bool {
        let before = self.current;
        self.current = if self.current > 0 {
            // An index left out of range by `jump_to` walks back from the end
            self.current.min(self.len.get()) - 1
        } else {
            match self.policy {
                BoundaryPolicy::Clamp => 0,
                BoundaryPolicy::Wrap => self.last(),
            }
        };
        before != self.current
    }

    /// Set the index directly.
    ///
    /// No clamping is performed: callers enumerate valid indices (one dot per
    /// slide). Renderers must tolerate an out-of-range index by looking slides
    /// up with [`Deck::get`].
    pub fn jump_to(&mut self, index: usize) -> bool {
        let before = self.current;
        self.current = index;
        before != self.current
    }

    pub fn apply(&mut self, command: NavCommand) -> bool {
        match command {
            NavCommand::Advance => self.advance(),
            NavCommand::Retreat => self.retreat(),
            NavCommand::JumpTo(index) => self.jump_to(index),
        }
    }

    /// One-based position for "Slide X of N" labels.
    pub fn position(&self) -> (usize, usize) {
        (self.current + 1, self.len.get())
    }
}
