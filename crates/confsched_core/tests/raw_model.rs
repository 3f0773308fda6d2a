use confsched_core::{RawDay, RawSession, RawSpeaker};

#[test]
fn session_reads_backend_field_names() {
    let value = serde_json::json!({
        "id": "12",
        "day_id": "2",
        "name": "Rust in production",
        "place_id": "room-a",
        "experience_level": "intermediate",
        "speaker_ids": ["s1", "s2"]
    });

    let session: RawSession = serde_json::from_value(value).unwrap();
    assert_eq!(session.id, "12");
    assert_eq!(session.day_id, "2");
    assert_eq!(session.title, "Rust in production");
    assert_eq!(session.place_id, "room-a");
    assert_eq!(session.experience_level.as_deref(), Some("intermediate"));
    assert_eq!(session.speaker_ids, vec!["s1", "s2"]);
}

#[test]
fn numeric_ids_are_accepted_as_strings() {
    let value = serde_json::json!({
        "id": 42,
        "day_id": 1,
        "title": "Lightning talks",
        "speaker_ids": [7, "s8"]
    });

    let session: RawSession = serde_json::from_value(value).unwrap();
    assert_eq!(session.id, "42");
    assert_eq!(session.day_id, "1");
    assert_eq!(session.speaker_ids, vec!["7", "s8"]);
}

#[test]
fn missing_and_null_fields_default_instead_of_failing() {
    let session: RawSession = serde_json::from_value(serde_json::json!({
        "id": null,
        "speaker_ids": null
    }))
    .unwrap();
    assert_eq!(session, RawSession::default());

    let speaker: RawSpeaker =
        serde_json::from_value(serde_json::json!({ "id": "s1", "name": null })).unwrap();
    assert_eq!(speaker, RawSpeaker::unnamed("s1"));

    let day: RawDay = serde_json::from_value(serde_json::json!({ "id": "d1" })).unwrap();
    assert_eq!(day, RawDay::new("d1", ""));
}

#[test]
fn null_speaker_references_keep_their_slot() {
    let session: RawSession = serde_json::from_value(serde_json::json!({
        "id": "1",
        "speaker_ids": ["s1", null, "s3"]
    }))
    .unwrap();
    assert_eq!(session.speaker_ids, vec!["s1", "", "s3"]);
}
