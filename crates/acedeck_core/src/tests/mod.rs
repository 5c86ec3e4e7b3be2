//! Behavioral tests for the deck engine
//!
//! Tests are organized by topic:
//! - `navigation` - Boundary policies and transition properties
//! - `input_bus` - Subscription lifecycle and dispatch order
//! - `listener` - Key listener wired through the bus to a navigator

mod input_bus;
