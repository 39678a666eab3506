use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{env, fs, io};
use thiserror::Error;

pub const CONFIG_ENV: &str = "EMBER_CONFIG";
pub const CONFIG_FILE: &str = "ember.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error parsing {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Block on a key press before returning from `exit` or a failed launch.
    pub interactive_pause: bool,
    /// `env_logger` directives. Controller and platform lines log under the
    /// `backend` target, e.g. `backend=warn`.
    pub log_filter: String,
    pub colored_log: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            interactive_pause: cfg!(debug_assertions),
            log_filter: "trace".to_string(),
            colored_log: true,
        }
    }
}

impl Settings {
    pub fn parse(text: &str, path: &Path) -> Result<Settings, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Settings, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// `$EMBER_CONFIG` if set, otherwise `ember.toml` in the working
    /// directory, otherwise defaults.
    pub fn discover() -> Result<Settings, ConfigError> {
        Self::discover_in(env::var_os(CONFIG_ENV).map(PathBuf::from), Path::new("."))
    }

    /// An explicit path wins, then `ember.toml` under `dir`.
    pub fn discover_in(explicit: Option<PathBuf>, dir: &Path) -> Result<Settings, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(&path);
        }
        let local = dir.join(CONFIG_FILE);
        if local.is_file() {
            return Self::load(&local);
        }
        Ok(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let s = Settings::parse("interactive_pause = false", Path::new("x.toml")).unwrap();
        assert!(!s.interactive_pause);
        assert_eq!(s.log_filter, "trace");
        assert!(s.colored_log);
    }

    #[test]
    fn empty_file_is_default() {
        let s = Settings::parse("", Path::new("x.toml")).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = Settings::parse("fullscreen = true", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_filter = \"warn\"\ncolored_log = false").unwrap();
        let s = Settings::load(file.path()).unwrap();
        assert_eq!(s.log_filter, "warn");
        assert!(!s.colored_log);
    }

    #[test]
    fn explicit_path_beats_local_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "log_filter = \"info\"").unwrap();
        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "log_filter = \"error\"").unwrap();

        let s = Settings::discover_in(Some(explicit), dir.path()).unwrap();
        assert_eq!(s.log_filter, "error");
        let s = Settings::discover_in(None, dir.path()).unwrap();
        assert_eq!(s.log_filter, "info");
    }

    #[test]
    fn no_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = Settings::discover_in(None, dir.path()).unwrap();
        assert_eq!(s, Settings::default());
    }

    // the only test touching EMBER_CONFIG
    #[test]
    fn discover_reads_env_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "interactive_pause = false\nlog_filter = \"backend=warn\"").unwrap();
        env::set_var(CONFIG_ENV, file.path());
        let found = Settings::discover();

        let dir = tempfile::tempdir().unwrap();
        env::set_var(CONFIG_ENV, dir.path().join("missing.toml"));
        let missing = Settings::discover();
        env::remove_var(CONFIG_ENV);

        let found = found.unwrap();
        assert!(!found.interactive_pause);
        assert_eq!(found.log_filter, "backend=warn");
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
