use confsched_core::{
    build_day_index, build_speaker_index, resolve, resolve_all, ExperienceLevel, RawDay,
    RawSession, RawSpeaker, INVALID_ID,
};

#[test]
fn resolve_fills_names_date_and_level() {
    let speakers = build_speaker_index(&[
        RawSpeaker::new("s1", "Ada"),
        RawSpeaker::new("s2", "Grace"),
    ]);
    let days = build_day_index(&[RawDay::new("1", "2024-05-01")]);
    let session = RawSession::new("10", "1", "Ownership deep dive")
        .with_place("hall-1")
        .with_level("Advanced")
        .with_speakers(["s2", "s1"]);

    let event = resolve(&session, &speakers, &days);

    assert_eq!(event.id, 10);
    assert_eq!(event.day, 1);
    assert_eq!(event.day_id, "1");
    assert_eq!(event.date.as_deref(), Some("2024-05-01"));
    assert_eq!(event.title, "Ownership deep dive");
    assert_eq!(event.place_id, "hall-1");
    assert_eq!(event.experience_level, ExperienceLevel::Advanced);
    assert_eq!(
        event.speakers,
        vec![Some("Grace".to_string()), Some("Ada".to_string())]
    );
}

#[test]
fn unresolved_references_never_fail_the_join() {
    let speakers = build_speaker_index(&[]);
    let days = build_day_index(&[]);
    let session = RawSession::new("not-a-number", "day-x", "Mystery talk")
        .with_level("guru")
        .with_speakers(["s1", "s2", "s3"]);

    let event = resolve(&session, &speakers, &days);

    assert_eq!(event.id, INVALID_ID);
    assert_eq!(event.day, -1);
    assert_eq!(event.date, None);
    assert_eq!(event.experience_level, ExperienceLevel::Unknown);
    assert_eq!(event.speakers.len(), session.speaker_ids.len());
    assert!(event.speakers.iter().all(Option::is_none));
}

#[test]
fn duplicate_speaker_ids_resolve_to_last_record() {
    let speakers = build_speaker_index(&[
        RawSpeaker::new("s1", "Old name"),
        RawSpeaker::new("s1", "New name"),
    ]);
    let days = build_day_index(&[]);
    let session = RawSession::new("1", "1", "Talk").with_speakers(["s1", "s1"]);

    let event = resolve(&session, &speakers, &days);

    assert_eq!(
        event.speakers,
        vec![Some("New name".to_string()), Some("New name".to_string())]
    );
}

#[test]
fn resolve_all_keeps_session_order() {
    let speakers = build_speaker_index(&[]);
    let days = build_day_index(&[]);
    let sessions = vec![
        RawSession::new("3", "1", "c"),
        RawSession::new("1", "1", "a"),
        RawSession::new("2", "1", "b"),
    ];

    let ids: Vec<i64> = resolve_all(&sessions, &speakers, &days)
        .into_iter()
        .map(|event| event.id)
        .collect();

    assert_eq!(ids, vec![3, 1, 2]);
}
