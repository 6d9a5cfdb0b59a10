//! Runtime settings loaded via OrthoConfig.
//!
//! Every field can be set through a `LIBRARY_`-prefixed environment
//! variable, a configuration file or the command line.

use std::net::{AddrParseError, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Settings controlling the listener and the backing store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LIBRARY")]
pub struct AppSettings {
    /// Socket address the HTTP server listens on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string. The in-memory store is used when unset.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Apply embedded migrations before serving traffic.
    #[ortho_config(default = true)]
    pub run_migrations: bool,
}

impl AppSettings {
    /// Parse the configured bind address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`AddrParseError`] when the configured value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR).parse()
    }

    /// Configured pool size, falling back to ten connections.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Database URL with blank values treated as absent.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("library-api")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env([
            ("LIBRARY_BIND_ADDR", None::<String>),
            ("LIBRARY_DATABASE_URL", None::<String>),
            ("LIBRARY_POOL_MAX_SIZE", None::<String>),
            ("LIBRARY_RUN_MIGRATIONS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default parses"),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
        assert_eq!(settings.database_url(), None);
        assert_eq!(settings.pool_max_size(), DEFAULT_POOL_MAX_SIZE);
        assert!(settings.run_migrations);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("LIBRARY_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "LIBRARY_DATABASE_URL",
                Some("postgres://localhost/library".to_owned()),
            ),
            ("LIBRARY_POOL_MAX_SIZE", Some("4".to_owned())),
            ("LIBRARY_RUN_MIGRATIONS", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("override parses"),
            SocketAddr::from(([127, 0, 0, 1], 9000))
        );
        assert_eq!(settings.database_url(), Some("postgres://localhost/library"));
        assert_eq!(settings.pool_max_size(), 4);
        assert!(!settings.run_migrations);
    }

    #[rstest]
    fn blank_database_url_selects_the_memory_store() {
        let settings = AppSettings {
            bind_addr: None,
            database_url: Some("  ".to_owned()),
            pool_max_size: None,
            run_migrations: true,
        };
        assert_eq!(settings.database_url(), None);
    }

    #[rstest]
    fn malformed_bind_addr_is_reported() {
        let settings = AppSettings {
            bind_addr: Some("not-an-addr".to_owned()),
            database_url: None,
            pool_max_size: None,
            run_migrations: true,
        };
        assert!(settings.bind_addr().is_err());
    }
}
