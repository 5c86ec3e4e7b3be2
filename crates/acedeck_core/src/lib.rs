//! Slide deck model and navigation engine
//!
//! This crate holds everything about a presentation that does not depend on
//! a rendering backend:
//! - The immutable deck (slides, content blocks, deck metadata)
//! - The navigation state machine with clamp or wrap boundary policies
//! - A single-threaded input bus with RAII subscriptions, used to scope
//!   keyboard listeners to the lifetime of a mounted presentation
//!
//! # Example
//!
//! ```
//! use acedeck_core::{BoundaryPolicy, Deck, DeckMeta, Navigator, Slide};
//!
//! let deck = Deck::new(
//!     DeckMeta::titled("Demo"),
//!     vec![Slide::new("One"), Slide::new("Two"), Slide::new("Three")],
//! )
//! .unwrap();
//!
//! let mut nav = Navigator::for_deck(&deck, BoundaryPolicy::Clamp);
//! nav.advance();
//! nav.advance();
//! nav.advance();
//! assert_eq!(nav.current(), 2);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod content;
pub mod deck;
pub mod error;
pub mod input;
pub mod navigation;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use content::{Column, ContentBlock, Tone};
pub use deck::{Deck, DeckMeta, Slide};
pub use error::DeckError;
pub use input::{InputBus, Subscription};
pub use navigation::{BoundaryPolicy, NavCommand, Navigator};
