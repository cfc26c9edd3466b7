use chrono_tz::Tz;
use std::path::PathBuf;

/// Server configuration
///
/// # Environment variables
///
/// Every setting can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/bromotors | Working directory (databases, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | TIMEZONE | Asia/Seoul | Business timezone ("today" is computed here) |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | REQUEST_TIMEOUT_MS | 30000 | Per-request timeout (ms) |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | Graceful shutdown window (ms) |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/bromotors HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding databases and logs
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Business timezone; past-date checks and "today" figures use it
    pub timezone: Tz,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Per-request timeout (milliseconds)
    pub request_timeout_ms: u64,
    /// Graceful shutdown window (milliseconds)
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/bromotors".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|tz| tz.parse().ok())
                .unwrap_or(chrono_tz::Asia::Seoul),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// Override work dir and port, keeping the rest from the environment
    ///
    /// Mostly used by tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Whether this is a production deployment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether this is a development deployment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Directory holding the redb databases
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Directory for rolling log files
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Path of the appointment store
    pub fn booking_db_path(&self) -> PathBuf {
        self.database_dir().join("booking.redb")
    }

    /// Path of the session/favorites store
    pub fn session_db_path(&self) -> PathBuf {
        self.database_dir().join("session.redb")
    }

    /// Create the working directory layout if it does not exist yet
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let config = Config::with_overrides("/tmp/garage-test", 0);
        assert_eq!(config.work_dir, "/tmp/garage-test");
        assert_eq!(config.http_port, 0);
    }

    #[test]
    fn test_derived_paths() {
        let config = Config::with_overrides("/tmp/garage-test", 0);
        assert_eq!(
            config.booking_db_path(),
            PathBuf::from("/tmp/garage-test/database/booking.redb")
        );
        assert_eq!(
            config.session_db_path(),
            PathBuf::from("/tmp/garage-test/database/session.redb")
        );
    }
}
