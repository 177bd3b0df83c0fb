//! Worker configuration
//!
//! The only externally configurable value is the target host. It is read
//! once at startup and never changes afterwards.

use std::time::Duration;

/// Environment variable that overrides the target host
pub const TARGET_HOST_ENV: &str = "TARGET_HOST";

/// Target host used when `TARGET_HOST` is unset or empty
pub const DEFAULT_TARGET_HOST: &str = "http://localhost:3000";

/// Wait after a request that got any response back
pub const SUCCESS_INTERVAL: Duration = Duration::from_secs(1);

/// Wait after a request that failed at the transport level
pub const FAILURE_INTERVAL: Duration = Duration::from_secs(10);

/// Worker configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the target host (e.g., "http://localhost:3000")
    pub target_host: String,

    /// How long to wait before the next request after a delivered one
    pub success_interval: Duration,

    /// How long to wait before retrying after a failed request
    pub failure_interval: Duration,
}

impl Config {
    /// Creates a new configuration with the default intervals
    pub fn new(target_host: String) -> Self {
        Self {
            target_host,
            success_interval: SUCCESS_INTERVAL,
            failure_interval: FAILURE_INTERVAL,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - TARGET_HOST (optional, default: http://localhost:3000)
    ///
    /// The value is not validated. A malformed URL makes every request
    /// fail, which the poller handles like any other failure.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
        })
    }

    /// Resolves configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let target_host = lookup(TARGET_HOST_ENV)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_TARGET_HOST.to_string());

        Self::new(target_host)
    }

    /// Overrides both wait intervals
    #[cfg(test)]
    pub fn with_intervals(mut self, success: Duration, failure: Duration) -> Self {
        self.success_interval = success;
        self.failure_interval = failure;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_HOST.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.target_host, "http://localhost:3000");
        assert_eq!(config.success_interval, Duration::from_secs(1));
        assert_eq!(config.failure_interval, Duration::from_secs(10));
    }

    #[test]
    fn test_unset_target_host_uses_default() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.target_host, DEFAULT_TARGET_HOST);
    }

    #[test]
    fn test_empty_target_host_uses_default() {
        let config = Config::from_lookup(lookup_from(&[("TARGET_HOST", "")]));
        assert_eq!(config.target_host, DEFAULT_TARGET_HOST);
    }

    #[test]
    fn test_target_host_override() {
        let config =
            Config::from_lookup(lookup_from(&[("TARGET_HOST", "http://example.test:9999")]));
        assert_eq!(config.target_host, "http://example.test:9999");
        assert_eq!(config.success_interval, SUCCESS_INTERVAL);
        assert_eq!(config.failure_interval, FAILURE_INTERVAL);
    }

    #[test]
    fn test_target_host_is_not_validated() {
        let config =
            Config::from_lookup(lookup_from(&[("TARGET_HOST", "definitely not a url")]));
        assert_eq!(config.target_host, "definitely not a url");
    }

    #[test]
    fn test_other_variables_are_ignored() {
        let config =
            Config::from_lookup(lookup_from(&[("ORCHESTRATOR_URL", "http://other:8080")]));
        assert_eq!(config.target_host, DEFAULT_TARGET_HOST);
    }

    #[test]
    fn test_with_intervals() {
        let config = Config::default()
            .with_intervals(Duration::from_millis(10), Duration::from_millis(100));

        assert_eq!(config.success_interval, Duration::from_millis(10));
        assert_eq!(config.failure_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_from_env_reads_target_host() {
        // Every environment mutation lives in this one test
        unsafe { std::env::set_var(TARGET_HOST_ENV, "http://example.test:9999") };
        assert_eq!(Config::from_env().target_host, "http://example.test:9999");

        unsafe { std::env::set_var(TARGET_HOST_ENV, "") };
        assert_eq!(Config::from_env().target_host, DEFAULT_TARGET_HOST);

        #[cfg(unix)]
        {
            use std::ffi::OsStr;
            use std::os::unix::ffi::OsStrExt;

            let value = OsStr::from_bytes(b"http://h\xffst:3000");
            unsafe { std::env::set_var(TARGET_HOST_ENV, value) };
            assert_eq!(Config::from_env().target_host, "http://h\u{FFFD}st:3000");
        }

        unsafe { std::env::remove_var(TARGET_HOST_ENV) };
        assert_eq!(Config::from_env().target_host, DEFAULT_TARGET_HOST);
    }
}
