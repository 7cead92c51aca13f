#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Local, TimeZone};
    use clockout::libs::projector::{default_daily_target, project, ScanState};
    use clockout::libs::normalizer::normalize_events;
    use clockout::libs::punch::PunchEvent;

    fn at(h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 15, h, m, 0).unwrap()
    }

    fn in_at(h: u32, m: u32) -> PunchEvent {
        PunchEvent::clock_in(at(h, m))
    }

    fn out_at(h: u32, m: u32) -> PunchEvent {
        PunchEvent::clock_out(at(h, m))
    }

    #[test]
    fn test_no_entries() {
        let projection = project(&[], at(10, 0), default_daily_target());

        assert_eq!(projection.total_worked, Duration::zero());
        assert_eq!(projection.remaining, Duration::hours(8));
        assert_eq!(projection.expected_completion, None);
        assert!(!projection.is_clocked_in());
        assert!(projection.sessions.is_empty());
    }

    #[test]
    fn test_single_open_session() {
        let projection = project(&[in_at(9, 0)], at(12, 0), default_daily_target());

        assert_eq!(projection.total_worked, Duration::hours(3));
        assert_eq!(projection.remaining, Duration::hours(5));
        assert_eq!(projection.expected_completion, Some(at(17, 0)));
        assert_eq!(projection.open_since, Some(at(9, 0)));
        assert_eq!(projection.last_in_time, Some(at(9, 0)));
        assert_eq!(projection.last_out_time, None);
    }

    #[test]
    fn test_break_then_open_session() {
        let entries = [in_at(9, 0), out_at(12, 0), in_at(13, 0)];
        let projection = project(&entries, at(15, 0), default_daily_target());

        assert_eq!(projection.total_worked, Duration::hours(5));
        assert_eq!(projection.remaining, Duration::hours(3));
        assert_eq!(projection.expected_completion, Some(at(18, 0)));

        assert_eq!(projection.sessions.len(), 2);
        assert_eq!(projection.sessions[0].end, Some(at(12, 0)));
        assert_eq!(projection.sessions[0].duration, Duration::hours(3));
        assert!(projection.sessions[1].is_open());
        assert_eq!(projection.sessions[1].duration, Duration::hours(2));
    }

    #[test]
    fn test_closed_day_past_target() {
        let entries = [in_at(9, 0), out_at(17, 30)];
        let projection = project(&entries, at(18, 0), default_daily_target());

        assert_eq!(projection.total_worked, Duration::minutes(510));
        assert_eq!(projection.remaining, Duration::zero());
        assert_eq!(projection.expected_completion, None);
        assert!(!projection.is_clocked_in());
        assert_eq!(projection.last_out_time, Some(at(17, 30)));
    }

    #[test]
    fn test_closed_day_short_of_target_has_no_projection() {
        let entries = [in_at(9, 0), out_at(11, 0)];
        let projection = project(&entries, at(12, 0), default_daily_target());

        assert_eq!(projection.total_worked, Duration::hours(2));
        assert_eq!(projection.remaining, Duration::hours(6));
        assert_eq!(projection.expected_completion, None);
    }

    #[test]
    fn test_open_session_past_target() {
        let projection = project(&[in_at(8, 0)], at(17, 0), default_daily_target());

        assert_eq!(projection.total_worked, Duration::hours(9));
        assert_eq!(projection.remaining, Duration::zero());
        assert_eq!(projection.expected_completion, None);
        assert!(projection.is_clocked_in());
    }

    #[test]
    fn test_leading_out_is_ignored() {
        let entries = [out_at(8, 0), in_at(9, 0), out_at(10, 0)];
        let projection = project(&entries, at(11, 0), default_daily_target());

        assert_eq!(projection.total_worked, Duration::hours(1));
        assert_eq!(projection.sessions.len(), 1);
    }

    #[test]
    fn test_repeated_in_restarts_session() {
        let entries = [in_at(9, 0), in_at(10, 0), out_at(11, 0)];
        let projection = project(&entries, at(12, 0), default_daily_target());

        assert_eq!(projection.total_worked, Duration::hours(1));
        assert_eq!(projection.sessions[0].start, at(10, 0));
    }

    #[test]
    fn test_repeated_out_is_ignored() {
        let entries = [in_at(9, 0), out_at(10, 0), out_at(11, 0)];
        let projection = project(&entries, at(12, 0), default_daily_target());

        assert_eq!(projection.total_worked, Duration::hours(1));
        assert_eq!(projection.last_out_time, Some(at(11, 0)));
    }

    #[test]
    fn test_session_open_since_previous_day() {
        let yesterday = Local.with_ymd_and_hms(2025, 1, 14, 22, 0, 0).unwrap();
        let projection = project(&[PunchEvent::clock_in(yesterday)], at(8, 0), default_daily_target());

        assert_eq!(projection.total_worked, Duration::zero());
        assert_eq!(projection.remaining, Duration::hours(8));
        assert_eq!(projection.expected_completion, None);
        assert!(!projection.is_clocked_in());
        assert!(projection.sessions.is_empty());
    }

    #[test]
    fn test_future_in_counts_as_open_with_no_time() {
        let now = at(11, 0);
        let projection = project(&[in_at(12, 0)], now, default_daily_target());

        assert_eq!(projection.total_worked, Duration::zero());
        assert!(projection.is_clocked_in());
        assert_eq!(projection.expected_completion, Some(now + Duration::hours(8)));
    }

    #[test]
    fn test_custom_daily_target() {
        let projection = project(&[in_at(9, 0)], at(10, 0), Duration::hours(6));

        assert_eq!(projection.remaining, Duration::hours(5));
        assert_eq!(projection.expected_completion, Some(at(15, 0)));
    }

    #[test]
    fn test_target_beyond_calendar_has_no_projection() {
        let projection = project(&[in_at(9, 0)], at(9, 30), Duration::days(200_000_000));

        assert!(projection.is_clocked_in());
        assert!(projection.remaining > Duration::zero());
        assert_eq!(projection.expected_completion, None);
    }

    #[test]
    fn test_expected_completion_tracks_now() {
        let entries = [in_at(9, 0)];
        let earlier = project(&entries, at(10, 0), default_daily_target());
        let later = project(&entries, at(11, 30), default_daily_target());

        assert_eq!(earlier.expected_completion, later.expected_completion);
        assert!(later.total_worked > earlier.total_worked);
        assert!(later.remaining < earlier.remaining);
    }

    #[test]
    fn test_worked_plus_remaining_covers_target() {
        let entries = [in_at(9, 0), out_at(10, 15), in_at(10, 30)];
        for minutes in [0, 45, 200, 600] {
            let now = at(10, 30) + Duration::minutes(minutes);
            let projection = project(&entries, now, default_daily_target());
            assert!(projection.remaining >= Duration::zero());
            assert_eq!(projection.remaining, (default_daily_target() - projection.total_worked).max(Duration::zero()));
        }
    }

    #[test]
    fn test_half_hour_into_the_day() {
        let projection = project(&[in_at(9, 0)], at(9, 30), default_daily_target());

        assert_eq!(projection.total_worked, Duration::minutes(30));
        assert_eq!(projection.expected_completion, Some(at(17, 0)));
    }

    #[test]
    fn test_completed_day_with_lunch() {
        let entries = [in_at(9, 0), out_at(13, 0), in_at(13, 30), out_at(17, 45)];
        let projection = project(&entries, at(18, 0), default_daily_target());

        assert_eq!(projection.total_worked, Duration::hours(8) + Duration::minutes(15));
        assert_eq!(projection.remaining, Duration::zero());
        assert_eq!(projection.expected_completion, None);
        assert_eq!(projection.last_out_time, Some(at(17, 45)));
    }

    #[test]
    fn test_total_is_independent_of_arrival_order() {
        let ordered = vec![in_at(9, 0), out_at(12, 10), in_at(12, 55), out_at(15, 20)];
        let shuffled = vec![out_at(15, 20), in_at(12, 55), in_at(9, 0), out_at(12, 10)];
        let now = at(16, 0);

        let a = project(&normalize_events(ordered), now, default_daily_target());
        let b = project(&normalize_events(shuffled), now, default_daily_target());

        assert_eq!(a.total_worked, Duration::minutes(190) + Duration::minutes(145));
        assert_eq!(a.total_worked, b.total_worked);
    }

    #[test]
    fn test_scan_state_steps() {
        let mut state = ScanState::Closed;

        assert_eq!(state.step(&out_at(8, 0)), None);
        assert_eq!(state, ScanState::Closed);

        assert_eq!(state.step(&in_at(9, 0)), None);
        assert_eq!(state, ScanState::Open(at(9, 0)));

        assert_eq!(state.step(&out_at(12, 0)), Some((at(9, 0), at(12, 0))));
        assert_eq!(state, ScanState::Closed);
    }
}
