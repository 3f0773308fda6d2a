//! Combine-latest aggregation over the session/speaker/day feeds.
//!
//! # Responsibility
//! - Accept three independently-updating snapshot feeds.
//! - Re-emit a complete `Schedule` whenever any of them produces a new value.
//!
//! # Invariants
//! - No emission before every input has produced at least one value.
//! - Only the latest value per input is retained.
//! - An upstream failure is forwarded unchanged and ends the aggregate feed.
//! - Dropping or unsubscribing the aggregate feed releases all three inputs.

pub mod combine;
pub mod feed;
