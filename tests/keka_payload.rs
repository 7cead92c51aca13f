#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use clockout::api::keka::{check_status, parse_response, select_latest, KekaError};
    use clockout::api::PayloadFile;
    use clockout::libs::projector::default_daily_target;
    use clockout::libs::punch::{parse_timestamp, PunchStatus};
    use clockout::libs::summary::summarize;
    use reqwest::StatusCode;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const BODY: &str = r#"{
        "data": [
            {
                "attendanceDate": "2025-01-14T00:00:00",
                "timeEntries": [
                    { "actualTimestamp": "2025-01-14T09:00:00", "punchStatus": 0 },
                    { "actualTimestamp": "2025-01-14T18:00:00", "punchStatus": 1 }
                ]
            },
            {
                "attendanceDate": "2025-01-15T00:00:00",
                "shiftDuration": 9,
                "timeEntries": [
                    { "actualTimestamp": "2025-01-15T09:02:11.483", "punchStatus": 0, "premiseName": "HQ" },
                    { "actualTimestamp": "2025-01-15T09:02:40", "punchStatus": 0 },
                    { "actualTimestamp": "2025-01-15T13:00:00", "punchStatus": 1 }
                ]
            }
        ]
    }"#;

    struct PayloadTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for PayloadTestContext {
        fn setup() -> Self {
            PayloadTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test]
    fn test_parse_and_select_latest() {
        let response = parse_response(BODY).unwrap();
        assert_eq!(response.data.len(), 2);

        let record = select_latest(response).unwrap();
        assert_eq!(record.attendance_date, "2025-01-15T00:00:00");
        assert_eq!(record.time_entries.len(), 3);
        assert_eq!(record.time_entries[2].punch_status, 1);
    }

    #[test]
    fn test_empty_data() {
        let response = parse_response(r#"{"data":[]}"#).unwrap();
        assert!(matches!(select_latest(response), Err(KekaError::NoAttendanceData)));

        let response = parse_response("{}").unwrap();
        assert!(matches!(select_latest(response), Err(KekaError::NoAttendanceData)));
    }

    #[test]
    fn test_record_without_entries() {
        let response = parse_response(r#"{"data":[{"attendanceDate":"2025-01-15T00:00:00"}]}"#).unwrap();
        let record = select_latest(response).unwrap();
        assert!(record.time_entries.is_empty());
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(parse_response("<html>login</html>"), Err(KekaError::Parse(_))));
    }

    #[test]
    fn test_check_status() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert!(matches!(check_status(StatusCode::UNAUTHORIZED), Err(KekaError::Unauthorized(401))));
        assert!(matches!(check_status(StatusCode::FORBIDDEN), Err(KekaError::Unauthorized(403))));
        assert!(matches!(check_status(StatusCode::INTERNAL_SERVER_ERROR), Err(KekaError::Status(500))));
    }

    #[test]
    fn test_parse_timestamp_forms() {
        let expected = Local.with_ymd_and_hms(2025, 1, 15, 9, 2, 11).unwrap();

        assert_eq!(parse_timestamp("2025-01-15T09:02:11"), Some(expected));
        assert_eq!(parse_timestamp("2025-01-15 09:02:11"), Some(expected));
        assert_eq!(
            parse_timestamp("2025-01-15T09:02:11.483").map(|t| t.timestamp()),
            Some(expected.timestamp())
        );
        assert_eq!(
            parse_timestamp("2025-01-15T09:02:11+05:30"),
            Some(chrono::FixedOffset::east_opt(5 * 3600 + 1800).unwrap().with_ymd_and_hms(2025, 1, 15, 9, 2, 11).unwrap().with_timezone(&Local))
        );
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn test_punch_status_codes() {
        assert_eq!(PunchStatus::from_code(0), Some(PunchStatus::In));
        assert_eq!(PunchStatus::from_code(1), Some(PunchStatus::Out));
        assert_eq!(PunchStatus::from_code(2), None);
        assert_eq!(PunchStatus::In.to_string(), "IN");
    }

    #[test]
    fn test_payload_to_summary() {
        let record = select_latest(parse_response(BODY).unwrap()).unwrap();
        let now = Local.with_ymd_and_hms(2025, 1, 15, 14, 0, 0).unwrap();

        let summary = summarize(&record, now, default_daily_target());
        assert_eq!(summary.entries.len(), 2);
        assert!(!summary.clocked_in);
        assert_eq!(summary.total_worked, "03:57:48");
    }

    #[test_context(PayloadTestContext)]
    #[test]
    fn test_payload_file(ctx: &mut PayloadTestContext) {
        let path = ctx.temp_dir.path().join("summary.json");
        std::fs::write(&path, BODY).unwrap();

        let record = PayloadFile::new(&path).read_latest().unwrap();
        assert_eq!(record.attendance_date, "2025-01-15T00:00:00");
    }

    #[test_context(PayloadTestContext)]
    #[test]
    fn test_missing_payload_file(ctx: &mut PayloadTestContext) {
        let path = ctx.temp_dir.path().join("missing.json");
        assert!(PayloadFile::new(path).read_latest().is_err());
    }
}
