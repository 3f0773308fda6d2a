//! Pure join and grouping steps behind every schedule recomputation.
//!
//! # Responsibility
//! - Index speaker/day snapshots by id.
//! - Join each session with its speakers and day.
//! - Bucket joined events into ordered day pages.
//!
//! # Invariants
//! - Every function here is pure and synchronous; same inputs give structurally
//!   equal outputs.
//! - Per-record anomalies resolve to sentinels or `None`, never to errors.

pub mod group;
pub mod index;
pub mod join;
