//! Display-ready schedule projections.
//!
//! # Responsibility
//! - Hold denormalized events with speaker names and dates already resolved.
//! - Organize events into per-day pages under one immutable root aggregate.
//!
//! # Invariants
//! - `ResolvedEvent::speakers` has one slot per referenced speaker id, in order.
//!   `None` marks a reference that could not be resolved to a name.
//! - A `Schedule` is replaced as a whole on every recomputation; nothing in this
//!   module offers in-place mutation of an emitted value.

use serde::{Deserialize, Serialize};

/// Audience level declared for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    /// Missing or unrecognized backend code.
    Unknown,
}

impl ExperienceLevel {
    /// Maps a raw backend code; never fails.
    pub fn from_raw_level(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Unknown;
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "beginner" => Self::Beginner,
            "intermediate" => Self::Intermediate,
            "advanced" => Self::Advanced,
            _ => Self::Unknown,
        }
    }
}

/// One session joined with its speakers and day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEvent {
    /// Numeric session id, `INVALID_ID` when the raw id was malformed.
    pub id: i64,
    /// Day ordinal parsed from `day_id`, `-1` when not numeric.
    pub day: i32,
    /// Raw day reference this event was grouped under.
    pub day_id: String,
    /// Calendar date of the referenced day, `None` when the day is unknown.
    pub date: Option<String>,
    pub title: String,
    pub place_id: String,
    pub experience_level: ExperienceLevel,
    /// Display names in reference order.
    pub speakers: Vec<Option<String>>,
}

/// All events that share one day, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePage {
    pub day: i32,
    /// Empty when the day reference did not resolve.
    pub date: String,
    pub events: Vec<ResolvedEvent>,
}

/// Root aggregate emitted by the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub pages: Vec<SchedulePage>,
}

impl Schedule {
    pub fn new(pages: Vec<SchedulePage>) -> Self {
        Self { pages }
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total number of events across all pages.
    pub fn event_count(&self) -> usize {
        self.pages.iter().map(|page| page.events.len()).sum()
    }
}
