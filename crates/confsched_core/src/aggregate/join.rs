//! Session -> display event join.
//!
//! # Invariants
//! - Output speaker list length equals `session.speaker_ids.len()`.
//! - Unknown day/speaker references and malformed ids never abort the join.

use crate::aggregate::index::{DayIndex, SpeakerIndex};
use crate::model::ids::{parse_day_ordinal, parse_event_id};
use crate::model::raw::RawSession;
use crate::model::schedule::{ExperienceLevel, ResolvedEvent};

/// Joins one session with the current speaker and day indexes.
pub fn resolve(
    session: &RawSession,
    speakers: &SpeakerIndex,
    days: &DayIndex,
) -> ResolvedEvent {
    ResolvedEvent {
        id: parse_event_id(&session.id),
        day: parse_day_ordinal(&session.day_id),
        day_id: session.day_id.clone(),
        date: resolve_date(&session.day_id, days),
        title: session.title.clone(),
        place_id: session.place_id.clone(),
        experience_level: ExperienceLevel::from_raw_level(session.experience_level.as_deref()),
        speakers: resolve_speaker_names(&session.speaker_ids, speakers),
    }
}

/// Joins every session, keeping session order.
pub fn resolve_all(
    sessions: &[RawSession],
    speakers: &SpeakerIndex,
    days: &DayIndex,
) -> Vec<ResolvedEvent> {
    sessions
        .iter()
        .map(|session| resolve(session, speakers, days))
        .collect()
}

/// Looks up the calendar date for a day reference.
pub fn resolve_date(day_id: &str, days: &DayIndex) -> Option<String> {
    days.get(day_id).map(|day| day.date.clone())
}

/// Position-preserving speaker name lookup.
///
/// A miss and a speaker without a name both produce `None` in that slot.
pub fn resolve_speaker_names(
    speaker_ids: &[String],
    speakers: &SpeakerIndex,
) -> Vec<Option<String>> {
    speaker_ids
        .iter()
        .map(|id| speakers.get(id).and_then(|speaker| speaker.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{resolve_date, resolve_speaker_names};
    use crate::aggregate::index::{build_day_index, build_speaker_index};
    use crate::model::raw::{RawDay, RawSpeaker};

    #[test]
    fn speaker_names_keep_positions_of_misses() {
        let index = build_speaker_index(&[
            RawSpeaker::new("s1", "Ada"),
            RawSpeaker::unnamed("s3"),
        ]);
        let ids = vec!["s2".to_string(), "s1".to_string(), "s3".to_string()];

        let names = resolve_speaker_names(&ids, &index);

        assert_eq!(names, vec![None, Some("Ada".to_string()), None]);
    }

    #[test]
    fn unknown_day_has_no_date() {
        let index = build_day_index(&[RawDay::new("d1", "2024-05-01")]);
        assert_eq!(resolve_date("d1", &index).as_deref(), Some("2024-05-01"));
        assert_eq!(resolve_date("d7", &index), None);
        assert_eq!(resolve_date("", &index), None);
    }
}
