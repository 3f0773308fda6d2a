//! Day bucketing of resolved events.
//!
//! Events are bucketed in a single pass: day order is first-seen order and
//! events keep their relative input order inside a bucket. No time-based sort
//! is applied.

use crate::model::schedule::{ResolvedEvent, Schedule, SchedulePage};
use std::collections::HashMap;

/// Events sharing one raw day reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    /// Ordinal of the day, taken from the first event of the group.
    pub day: i32,
    pub day_id: String,
    pub events: Vec<ResolvedEvent>,
}

impl DayGroup {
    /// First resolved date among the group's events.
    pub fn date(&self) -> Option<&str> {
        self.events.iter().find_map(|event| event.date.as_deref())
    }

    pub fn into_page(self) -> SchedulePage {
        let date = self.date().unwrap_or_default().to_string();
        SchedulePage {
            day: self.day,
            date,
            events: self.events,
        }
    }
}

/// Stable partition of `events` by day reference.
///
/// The key is the raw `day_id` rather than the parsed ordinal, so distinct
/// non-numeric references do not merge into the sentinel bucket.
pub fn group_by_day(events: Vec<ResolvedEvent>) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for event in events {
        match slots.get(event.day_id.as_str()) {
            Some(&slot) => groups[slot].events.push(event),
            None => {
                slots.insert(event.day_id.clone(), groups.len());
                groups.push(DayGroup {
                    day: event.day,
                    day_id: event.day_id.clone(),
                    events: vec![event],
                });
            }
        }
    }

    groups
}

/// Converts groups into the root aggregate, one page per group.
pub fn into_schedule(groups: Vec<DayGroup>) -> Schedule {
    Schedule::new(groups.into_iter().map(DayGroup::into_page).collect())
}
