//! # Configuration
//!
//! [`MonitorConfig`] holds the few knobs a monitor run has. Every field has a
//! default, so running with no config at all is the normal case.
//!
//! ## Loading Priority
//!
//! [`MonitorConfig::discover`] takes the first config file it finds:
//!
//! 1. Explicit path (e.g. `--config`)
//! 2. `LSL_MONITOR_CONFIG` environment variable
//! 3. `./lsl-monitor.toml` in the current directory
//! 4. `~/.config/lsl-stream-monitor/lsl-monitor.toml`
//!
//! and falls back to built-in defaults. `LSL_MONITOR_WAIT_TIME` overrides
//! `wait_time_secs` regardless of where the rest came from, and
//! [`ConfigOverrides`] (command-line flags) beat both.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::discovery::{DEFAULT_WAIT_TIME_SECS, validate_wait_time};
use crate::error::{MonitorError, MonitorResult};

/// Config file name searched for in the working and user config directories.
pub const CONFIG_FILE_NAME: &str = "lsl-monitor.toml";

/// Environment variable pointing at a config file.
pub const CONFIG_PATH_ENV: &str = "LSL_MONITOR_CONFIG";

/// Environment variable overriding the discovery wait time.
pub const WAIT_TIME_ENV: &str = "LSL_MONITOR_WAIT_TIME";

/// Monitor settings.
///
/// ```
/// use lsl_stream_monitor::MonitorConfig;
///
/// let config = MonitorConfig::default();
/// assert_eq!(config.wait_time_secs, 10.0);
/// assert!(config.color);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// How long a discovery call may block, in seconds.
    #[serde(default = "default_wait_time")]
    pub wait_time_secs: f64,

    /// Colorize console output.
    #[serde(default = "default_true")]
    pub color: bool,

    /// Silence liblsl's own stderr chatter while resolving.
    #[serde(default = "default_true")]
    pub quiet_liblsl: bool,
}

fn default_wait_time() -> f64 {
    DEFAULT_WAIT_TIME_SECS
}

fn default_true() -> bool {
    true
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            wait_time_secs: DEFAULT_WAIT_TIME_SECS,
            color: true,
            quiet_liblsl: true,
        }
    }
}

/// Values given on the command line; they beat both the environment and the
/// config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub wait_time_secs: Option<f64>,
    pub color: Option<bool>,
}

impl MonitorConfig {
    /// Built-in defaults with environment overrides applied.
    pub fn from_env() -> MonitorResult<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file, with environment variable overrides.
    pub fn from_file(path: impl AsRef<Path>) -> MonitorResult<Self> {
        let mut config = Self::read_file(path.as_ref())?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Discover and load config from the standard search path.
    ///
    /// Falls back to [`MonitorConfig::from_env`] if no file is found.
    pub fn discover(explicit_path: Option<&Path>) -> MonitorResult<Self> {
        Self::discover_with(explicit_path, &ConfigOverrides::default())
    }

    /// Like [`MonitorConfig::discover`], with `overrides` applied last.
    ///
    /// A wait-time override replaces the file value and the
    /// `LSL_MONITOR_WAIT_TIME` variable outright, so neither is parsed or
    /// validated. Validation runs once, on the merged result.
    pub fn discover_with(
        explicit_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> MonitorResult<Self> {
        let mut config = match locate_config_file(explicit_path) {
            Some(path) => Self::read_file(&path)?,
            None => Self::default(),
        };

        match overrides.wait_time_secs {
            Some(wait_time_secs) => config.wait_time_secs = wait_time_secs,
            None => config.apply_env_overrides()?,
        }
        if let Some(color) = overrides.color {
            config.color = color;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check values that serde alone cannot.
    pub fn validate(&self) -> MonitorResult<()> {
        validate_wait_time(self.wait_time_secs).map(|_| ())
    }

    fn read_file(path: &Path) -> MonitorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| MonitorError::ConfigError {
            reason: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        let config: Self = toml::from_str(&contents)?;

        tracing::debug!(path = %path.display(), "Loaded monitor config");
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> MonitorResult<()> {
        if let Ok(raw) = std::env::var(WAIT_TIME_ENV) {
            let seconds: f64 = raw.trim().parse().map_err(|_| MonitorError::ConfigError {
                reason: format!("{WAIT_TIME_ENV} is not a number: '{raw}'"),
            })?;
            self.wait_time_secs = validate_wait_time(seconds)?;
        }
        Ok(())
    }
}

// ─── Helpers ────────────────────────────────────────────────────────────

/// First config file on the search path, if any.
fn locate_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
        tracing::warn!(path = %path.display(), "{CONFIG_PATH_ENV} points at a missing file");
    }

    let local_path = PathBuf::from(CONFIG_FILE_NAME);
    if local_path.exists() {
        return Some(local_path);
    }

    dirs_config_path().filter(|path| path.exists())
}

/// Platform-appropriate config directory path.
fn dirs_config_path() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA").ok().map(|dir| {
            PathBuf::from(dir)
                .join("lsl-stream-monitor")
                .join(CONFIG_FILE_NAME)
        })
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME").ok().map(|dir| {
            PathBuf::from(dir)
                .join(".config")
                .join("lsl-stream-monitor")
                .join(CONFIG_FILE_NAME)
        })
    }
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::fs;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct EnvGuard {
        saved: Vec<(&'static str, Option<OsString>)>,
    }

    impl EnvGuard {
        fn capture(keys: &[&'static str]) -> Self {
            let saved = keys.iter().map(|k| (*k, std::env::var_os(k))).collect();
            Self { saved }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.saved {
                match value {
                    Some(value) => set_env(key, value),
                    None => remove_env(key),
                }
            }
        }
    }

    struct CurrentDirGuard {
        original: PathBuf,
    }

    impl CurrentDirGuard {
        fn enter(path: &Path) -> Self {
            let original = std::env::current_dir().unwrap();
            std::env::set_current_dir(path).unwrap();
            Self { original }
        }
    }

    impl Drop for CurrentDirGuard {
        fn drop(&mut self) {
            std::env::set_current_dir(&self.original).unwrap();
        }
    }

    // Tests touching the environment hold ENV_LOCK, so no other thread
    // reads or writes it concurrently.
    fn set_env(key: &str, value: impl AsRef<std::ffi::OsStr>) {
        unsafe { std::env::set_var(key, value) }
    }

    fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) }
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_config(path: &Path, wait_time_secs: f64) {
        fs::write(path, format!("wait_time_secs = {wait_time_secs:?}\n")).unwrap();
    }

    #[test]
    fn test_defaults() {
        let config = MonitorConfig::default();
        assert!((config.wait_time_secs - DEFAULT_WAIT_TIME_SECS).abs() < f64::EPSILON);
        assert!(config.color);
        assert!(config.quiet_liblsl);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: MonitorConfig = toml::from_str("color = false").unwrap();
        assert!(!config.color);
        assert!(config.quiet_liblsl);
        assert!((config.wait_time_secs - DEFAULT_WAIT_TIME_SECS).abs() < f64::EPSILON);

        let config: MonitorConfig = toml::from_str(
            r"
            wait_time_secs = 2.5
            quiet_liblsl = false
        ",
        )
        .unwrap();
        assert!((config.wait_time_secs - 2.5).abs() < f64::EPSILON);
        assert!(!config.quiet_liblsl);
    }

    #[test]
    fn test_from_env_override() {
        let _lock = env_lock();
        let _env = EnvGuard::capture(&[WAIT_TIME_ENV]);

        remove_env(WAIT_TIME_ENV);
        let config = MonitorConfig::from_env().unwrap();
        assert!((config.wait_time_secs - DEFAULT_WAIT_TIME_SECS).abs() < f64::EPSILON);

        set_env(WAIT_TIME_ENV, " 3 ");
        let config = MonitorConfig::from_env().unwrap();
        assert!((config.wait_time_secs - 3.0).abs() < f64::EPSILON);

        set_env(WAIT_TIME_ENV, "soon");
        let err = MonitorConfig::from_env().unwrap_err();
        assert!(matches!(err, MonitorError::ConfigError { .. }));
        assert!(err.to_string().contains(WAIT_TIME_ENV), "unexpected error: {err}");

        set_env(WAIT_TIME_ENV, "-1");
        let err = MonitorConfig::from_env().unwrap_err();
        assert!(matches!(err, MonitorError::InvalidWaitTime { .. }));
    }

    #[test]
    fn test_from_file_env_overrides_precedence() {
        let _lock = env_lock();
        let _env = EnvGuard::capture(&[WAIT_TIME_ENV]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        write_config(&path, 4.0);

        remove_env(WAIT_TIME_ENV);
        let config = MonitorConfig::from_file(&path).unwrap();
        assert!((config.wait_time_secs - 4.0).abs() < f64::EPSILON);

        set_env(WAIT_TIME_ENV, "7.5");
        let config = MonitorConfig::from_file(&path).unwrap();
        assert!((config.wait_time_secs - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_file_missing_and_invalid_errors() {
        let _lock = env_lock();
        let _env = EnvGuard::capture(&[WAIT_TIME_ENV]);
        remove_env(WAIT_TIME_ENV);
        let dir = tempfile::tempdir().unwrap();

        let missing = MonitorConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(missing, MonitorError::ConfigError { .. }));
        assert!(
            missing.to_string().contains("Failed to read config file"),
            "unexpected error: {missing}"
        );

        let invalid_path = dir.path().join("invalid.toml");
        fs::write(&invalid_path, "wait_time_secs = [").unwrap();
        let invalid = MonitorConfig::from_file(&invalid_path).unwrap_err();
        assert!(matches!(invalid, MonitorError::ConfigError { .. }));

        let negative_path = dir.path().join("negative.toml");
        write_config(&negative_path, -3.0);
        let negative = MonitorConfig::from_file(&negative_path).unwrap_err();
        assert!(matches!(negative, MonitorError::InvalidWaitTime { .. }));
    }

    #[test]
    fn test_overrides_beat_file_and_env() {
        let _lock = env_lock();
        let _env = EnvGuard::capture(&[WAIT_TIME_ENV]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "wait_time_secs = -5.0\ncolor = true\n").unwrap();

        set_env(WAIT_TIME_ENV, "soon");
        let overrides = ConfigOverrides {
            wait_time_secs: Some(1.0),
            color: Some(false),
        };
        let config = MonitorConfig::discover_with(Some(&path), &overrides).unwrap();
        assert!((config.wait_time_secs - 1.0).abs() < f64::EPSILON);
        assert!(!config.color);

        // Without the override both bad sources still surface.
        let err = MonitorConfig::discover_with(Some(&path), &ConfigOverrides::default())
            .unwrap_err();
        assert!(matches!(err, MonitorError::ConfigError { .. }));

        remove_env(WAIT_TIME_ENV);
        let err = MonitorConfig::discover(Some(&path)).unwrap_err();
        assert!(matches!(err, MonitorError::InvalidWaitTime { .. }));
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let _lock = env_lock();
        let _env = EnvGuard::capture(&[WAIT_TIME_ENV]);
        remove_env(WAIT_TIME_ENV);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        write_config(&path, 4.0);

        let overrides = ConfigOverrides {
            wait_time_secs: Some(f64::INFINITY),
            color: None,
        };
        let err = MonitorConfig::discover_with(Some(&path), &overrides).unwrap_err();
        assert!(matches!(err, MonitorError::InvalidWaitTime { .. }));
    }

    #[test]
    fn test_discover_search_priority() {
        let _lock = env_lock();
        let mut env_keys = vec![WAIT_TIME_ENV, CONFIG_PATH_ENV];
        #[cfg(target_os = "windows")]
        env_keys.push("APPDATA");
        #[cfg(not(target_os = "windows"))]
        env_keys.push("HOME");
        let _env = EnvGuard::capture(&env_keys);
        remove_env(WAIT_TIME_ENV);

        let root = tempfile::tempdir().unwrap();
        let cwd = root.path().join("cwd");
        fs::create_dir_all(&cwd).unwrap();

        let explicit_path = root.path().join("explicit.toml");
        let env_path = root.path().join("env.toml");
        write_config(&explicit_path, 1.0);
        write_config(&env_path, 2.0);

        let home_root = root.path().join("home-root");
        let home_config = {
            #[cfg(target_os = "windows")]
            {
                set_env("APPDATA", &home_root);
                home_root.join("lsl-stream-monitor").join(CONFIG_FILE_NAME)
            }
            #[cfg(not(target_os = "windows"))]
            {
                set_env("HOME", &home_root);
                home_root
                    .join(".config")
                    .join("lsl-stream-monitor")
                    .join(CONFIG_FILE_NAME)
            }
        };
        fs::create_dir_all(home_config.parent().unwrap()).unwrap();
        write_config(&home_config, 4.0);

        {
            let _cwd = CurrentDirGuard::enter(&cwd);

            set_env(CONFIG_PATH_ENV, &env_path);
            write_config(&cwd.join(CONFIG_FILE_NAME), 3.0);

            let explicit = MonitorConfig::discover(Some(&explicit_path)).unwrap();
            assert!((explicit.wait_time_secs - 1.0).abs() < f64::EPSILON);

            let via_env_pointer = MonitorConfig::discover(None).unwrap();
            assert!((via_env_pointer.wait_time_secs - 2.0).abs() < f64::EPSILON);

            remove_env(CONFIG_PATH_ENV);
            let via_local = MonitorConfig::discover(None).unwrap();
            assert!((via_local.wait_time_secs - 3.0).abs() < f64::EPSILON);

            fs::remove_file(cwd.join(CONFIG_FILE_NAME)).unwrap();
            let via_home = MonitorConfig::discover(None).unwrap();
            assert!((via_home.wait_time_secs - 4.0).abs() < f64::EPSILON);

            fs::remove_file(&home_config).unwrap();
            let defaults = MonitorConfig::discover(None).unwrap();
            assert_eq!(defaults, MonitorConfig::default());
        }
    }
}
