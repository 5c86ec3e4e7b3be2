//! Terminal slide-deck viewer
//!
//! Presents a fixed deck of slides (the ACE research-paper walkthrough by
//! default) with keyboard and mouse navigation:
//! - Left/right arrows move through the deck via a scoped input-bus listener
//! - Dots, a "Slide X of N" label and previous/next buttons show progress
//! - Clicking a dot jumps straight to its slide
//!
//! Native builds run in the terminal through crossterm; web builds render into
//! the browser through ratzilla.

// ============================================================================
// Shared modules
// ============================================================================

pub mod components;
pub mod data;
pub mod event;
pub mod keybindings;
pub mod logging;
pub mod presentation;
pub mod state;
pub mod util;

// ============================================================================
// Platform entry points
// ============================================================================

#[cfg(feature = "native")]
pub mod app;

#[cfg(feature = "web")]
mod web;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

#[cfg(feature = "native")]
pub use app::App;
#[cfg(feature = "native")]
pub use logging::init_logging;
#[cfg(feature = "web")]
pub use logging::init_logging_web;
pub use presentation::Presentation;
