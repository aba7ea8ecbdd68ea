use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_conn: u32,
    pub db_min_conn: u32,
    pub run_schema_sync: bool,
    pub dev_mode: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let run_schema_sync_str = lookup("RUN_SCHEMA_SYNC").unwrap_or_else(|| "true".to_string());

        let run_schema_sync = match run_schema_sync_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_SCHEMA_SYNC must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let db_max_conn: u32 = lookup("DB_MAX_CONNECTION")
            .unwrap_or_else(|| "5".to_string())
            .parse::<u32>()
            .context("Unable to parse DB_MAX_CONNECTION as u32")?;

        let db_min_conn: u32 = lookup("DB_MIN_CONNECTION")
            .unwrap_or_else(|| "1".to_string())
            .parse::<u32>()
            .context("Unable to parse DB_MIN_CONNECTION as u32")?;

        if db_min_conn > db_max_conn {
            return Err(anyhow!(
                "DB_MIN_CONNECTION ({}) must not exceed DB_MAX_CONNECTION ({})",
                db_min_conn,
                db_max_conn
            ));
        }

        let dev_mode = lookup("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let enable_file_log = lookup("ENABLE_FILE_LOG")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Self {
            database_url,
            db_max_conn,
            db_min_conn,
            run_schema_sync,
            dev_mode,
            enable_file_log,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "sqlite::memory:")]))
            .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.db_max_conn, 5);
        assert_eq!(config.db_min_conn, 1);
        assert!(config.run_schema_sync);
        assert!(!config.dev_mode);
        assert!(!config.enable_file_log);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn schema_sync_flag_must_be_a_boolean() {
        let err = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite://orders.db"),
            ("RUN_SCHEMA_SYNC", "yes"),
        ]))
        .unwrap_err();

        assert!(err.to_string().contains("RUN_SCHEMA_SYNC"));
    }

    #[test]
    fn pool_bounds_are_parsed_and_checked() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite://orders.db"),
            ("DB_MAX_CONNECTION", "10"),
            ("DB_MIN_CONNECTION", "2"),
            ("DEV_MODE", "1"),
            ("ENABLE_FILE_LOG", "true"),
            ("RUN_SCHEMA_SYNC", "false"),
        ]))
        .unwrap();

        assert_eq!(config.db_max_conn, 10);
        assert_eq!(config.db_min_conn, 2);
        assert!(config.dev_mode);
        assert!(config.enable_file_log);
        assert!(!config.run_schema_sync);

        let err = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite://orders.db"),
            ("DB_MAX_CONNECTION", "1"),
            ("DB_MIN_CONNECTION", "3"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("DB_MIN_CONNECTION"));

        assert!(
            Config::from_lookup(lookup_from(&[
                ("DATABASE_URL", "sqlite://orders.db"),
                ("DB_MAX_CONNECTION", "many"),
            ]))
            .is_err()
        );
    }
}
