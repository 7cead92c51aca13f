#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, TimeZone};
    use clockout::api::keka::{KekaConfig, DEFAULT_SUBDOMAIN};
    use clockout::commands::watch::refresh_period;
    use clockout::libs::config::{Config, WorkdayConfig, CONFIG_FILE_NAME};
    use clockout::libs::data_storage::DataStorage;
    use clockout::libs::projector::default_daily_target;
    use clockout::libs::reminder::Reminder;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// A temporary directory standing in for the data directory.
    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl ConfigTestContext {
        fn config_path(&self) -> PathBuf {
            self.temp_dir.path().join(CONFIG_FILE_NAME)
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn reminder(minutes: u32, message: &str, second: u32) -> Reminder {
        Reminder::new(minutes, message, Local.with_ymd_and_hms(2025, 1, 15, 8, 0, second).unwrap()).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.keka.is_none());
        assert!(config.workday.is_none());
        assert!(config.reminders.is_empty());

        assert_eq!(config.daily_target(), Duration::hours(8));
        assert_eq!(config.workday().refresh_interval, 5);
        assert_eq!(config.keka().subdomain, DEFAULT_SUBDOMAIN);
    }

    #[test]
    fn test_out_of_range_daily_target_falls_back() {
        for minutes in [200_000_000_000_000, u64::MAX] {
            let config = Config {
                workday: Some(WorkdayConfig {
                    daily_target_minutes: minutes,
                    refresh_interval: 5,
                }),
                ..Default::default()
            };
            assert_eq!(config.daily_target(), default_daily_target());
        }
    }

    #[test]
    fn test_refresh_period() {
        assert_eq!(refresh_period(5).unwrap(), Duration::minutes(5));
        assert!(refresh_period(200_000_000_000_000).is_err());
        assert!(refresh_period(u64::MAX).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            keka: Some(KekaConfig {
                subdomain: "acme".to_string(),
                base_url: None,
            }),
            workday: Some(WorkdayConfig {
                daily_target_minutes: 450,
                refresh_interval: 10,
            }),
            reminders: vec![reminder(15, "Wrap up", 0)],
        };

        config.save_to(&ctx.config_path()).unwrap();
        let read_config = Config::read_from(&ctx.config_path()).unwrap();

        assert_eq!(read_config, config);
        assert_eq!(read_config.daily_target(), Duration::minutes(450));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_creates_parent_directories(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join("a").join("b").join(CONFIG_FILE_NAME);
        Config::default().save_to(&path).unwrap();
        assert!(path.exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_file(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.config_path(), r#"{"workday":{"daily_target_minutes":360,"refresh_interval":2}}"#).unwrap();

        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(config.daily_target(), Duration::hours(6));
        assert_eq!(config.keka(), KekaConfig::default());
        assert!(config.reminders.is_empty());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_config_file(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.config_path(), "not json").unwrap();
        assert!(Config::read_from(&ctx.config_path()).is_err());
    }

    #[test]
    fn test_add_and_remove_reminders() {
        let mut config = Config::default();
        let first = reminder(10, "Ten minutes left", 1);
        let second = reminder(30, "Half an hour left", 2);
        let first_id = first.id.clone();

        config.add_reminder(first);
        config.add_reminder(second);
        assert_eq!(config.reminders.len(), 2);

        assert!(config.remove_reminder(&first_id));
        assert!(!config.remove_reminder(&first_id));
        assert_eq!(config.reminders.len(), 1);
        assert_eq!(config.reminders[0].minutes_before, 30);
    }

    #[test]
    fn test_keka_urls() {
        let keka = KekaConfig {
            subdomain: "acme".to_string(),
            base_url: None,
        };
        assert_eq!(keka.origin(), "https://acme.keka.com");
        assert_eq!(keka.summary_url(), "https://acme.keka.com/k/attendance/api/mytime/attendance/summary");

        let local = KekaConfig {
            subdomain: "acme".to_string(),
            base_url: Some("http://127.0.0.1:8080/".to_string()),
        };
        assert_eq!(local.summary_url(), "http://127.0.0.1:8080/k/attendance/api/mytime/attendance/summary");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_data_storage_creates_directory(ctx: &mut ConfigTestContext) {
        let base = ctx.temp_dir.path().join("clockout");
        let storage = DataStorage::at(&base);

        let path = storage.get_path(CONFIG_FILE_NAME).unwrap();
        assert!(base.is_dir());
        assert_eq!(path, base.join(CONFIG_FILE_NAME));
    }
}
