#[cfg(test)]
mod tests {
    use empdb::db::db::{ConnectionSettings, DEFAULT_DRIVER, DEFAULT_NAME, DEFAULT_PORT};
    use empdb::libs::config::Config;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_load_reads_file_entries(ctx: &mut ConfigTestContext) {
        let path = ctx.temp_dir.path().join(".env");
        fs::write(&path, "# database\n\nDB_HOST=db1\n  DB_NAME = staff \n").unwrap();

        let config = Config::load(&path);
        assert_eq!(config.get("DB_HOST"), Some("db1".to_string()));
        assert_eq!(config.get("DB_NAME"), Some("staff".to_string()));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_is_not_fatal(ctx: &mut ConfigTestContext) {
        let config = Config::load(ctx.temp_dir.path().join("absent.env"));
        assert!(!config.has("EMPDB_TEST_SURELY_UNSET_KEY"));
        assert_eq!(config.get_or("EMPDB_TEST_SURELY_UNSET_KEY", "fallback"), "fallback");
    }

    #[test]
    fn test_host_without_port_uses_default_port() {
        let config = Config::parse("DB_HOST=db1\n");
        let settings = ConnectionSettings::from_config(&config);

        assert_eq!(settings.host, "db1");
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.name, DEFAULT_NAME);
        assert_eq!(settings.driver, DEFAULT_DRIVER);
    }

    #[test]
    fn test_value_splits_on_first_equals() {
        let config = Config::parse("DB_PASSWORD = se=cret \n");
        assert_eq!(config.get("DB_PASSWORD"), Some("se=cret".to_string()));
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let config = Config::parse("not a pair\n=orphan\nDB_NAME=kept\n");
        assert_eq!(config.get("DB_NAME"), Some("kept".to_string()));
        assert!(!config.has("not a pair"));
    }

    #[test]
    fn test_comment_lines_are_ignored() {
        let config = Config::parse("#EMPDB_TEST_COMMENTED=1\n   # EMPDB_TEST_INDENTED=2\n");
        assert!(!config.has("#EMPDB_TEST_COMMENTED"));
        assert!(!config.has("EMPDB_TEST_COMMENTED"));
        assert!(!config.has("EMPDB_TEST_INDENTED"));
    }

    #[test]
    fn test_file_entries_win_over_environment() {
        std::env::set_var("EMPDB_TEST_PRECEDENCE", "from-env");
        let config = Config::parse("EMPDB_TEST_PRECEDENCE=from-file\n");
        assert_eq!(config.get("EMPDB_TEST_PRECEDENCE"), Some("from-file".to_string()));

        let empty = Config::parse("");
        assert_eq!(empty.get("EMPDB_TEST_PRECEDENCE"), Some("from-env".to_string()));
    }

    #[test]
    fn test_target_never_shows_password() {
        let config = Config::parse("DB_PASSWORD=hunter2\nDB_USERNAME=admin\n");
        let settings = ConnectionSettings::from_config(&config);

        assert!(settings.target().contains("admin@"));
        assert!(!settings.target().contains("hunter2"));
        assert!(!format!("{:?}", settings).contains("hunter2"));
    }
}
