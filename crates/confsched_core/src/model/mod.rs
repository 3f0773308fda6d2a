//! Schedule domain model: raw backend records and display-ready projections.
//!
//! # Responsibility
//! - Define loosely-typed input records as they arrive from the backend.
//! - Define the immutable, denormalized schedule shape consumed by display layers.
//!
//! # Invariants
//! - Raw records never fail to deserialize because of missing or null fields.
//! - Display records hold resolved names and dates, never raw references to
//!   speaker or day records.

pub mod ids;
pub mod raw;
pub mod schedule;
