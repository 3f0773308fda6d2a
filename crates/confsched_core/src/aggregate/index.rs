//! Id lookup indexes over speaker/day snapshots.

use crate::model::raw::{RawDay, RawSpeaker};
use log::debug;
use std::collections::HashMap;

/// Speaker records keyed by raw id.
pub type SpeakerIndex = HashMap<String, RawSpeaker>;
/// Day records keyed by raw id.
pub type DayIndex = HashMap<String, RawDay>;

/// Record that can be indexed by its raw id.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for RawSpeaker {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for RawDay {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Builds an id -> record map in one pass.
///
/// Duplicate ids resolve to the record that appears last in `records`.
pub fn build_index<T>(records: &[T]) -> HashMap<String, T>
where
    T: Keyed + Clone,
{
    let mut index = HashMap::with_capacity(records.len());
    let mut duplicates = 0_usize;
    for record in records {
        if index
            .insert(record.key().to_string(), record.clone())
            .is_some()
        {
            duplicates += 1;
        }
    }
    if duplicates > 0 {
        debug!(
            "event=index_build module=aggregate status=duplicates records={} duplicates={}",
            records.len(),
            duplicates
        );
    }
    index
}

pub fn build_speaker_index(speakers: &[RawSpeaker]) -> SpeakerIndex {
    build_index(speakers)
}

pub fn build_day_index(days: &[RawDay]) -> DayIndex {
    build_index(days)
}
