use confsched_core::{
    build_day_index, build_speaker_index, group_by_day, into_schedule, resolve_all, RawDay,
    RawSession,
};

fn grouped(sessions: &[RawSession], days: &[RawDay]) -> Vec<confsched_core::DayGroup> {
    let events = resolve_all(sessions, &build_speaker_index(&[]), &build_day_index(days));
    group_by_day(events)
}

#[test]
fn day_order_follows_first_appearance() {
    let sessions = vec![
        RawSession::new("1", "2", "first on day 2"),
        RawSession::new("2", "1", "only on day 1"),
        RawSession::new("3", "2", "second on day 2"),
        RawSession::new("4", "3", "only on day 3"),
    ];

    let groups = grouped(&sessions, &[]);

    let days: Vec<i32> = groups.iter().map(|group| group.day).collect();
    assert_eq!(days, vec![2, 1, 3]);
    let day_two: Vec<i64> = groups[0].events.iter().map(|event| event.id).collect();
    assert_eq!(day_two, vec![1, 3]);
}

#[test]
fn days_without_sessions_get_no_page() {
    let sessions = vec![RawSession::new("1", "2", "talk")];
    let days = vec![
        RawDay::new("1", "2024-05-01"),
        RawDay::new("2", "2024-05-02"),
        RawDay::new("3", "2024-05-03"),
    ];

    let schedule = into_schedule(grouped(&sessions, &days));

    assert_eq!(schedule.page_count(), 1);
    assert_eq!(schedule.pages[0].day, 2);
    assert_eq!(schedule.pages[0].date, "2024-05-02");
}

#[test]
fn empty_input_yields_empty_schedule() {
    let schedule = into_schedule(group_by_day(Vec::new()));
    assert!(schedule.is_empty());
    assert_eq!(schedule.event_count(), 0);
}
