//! Environment-definition (`.env`) file loading.
//!
//! Loading is best-effort: a missing file, an unreadable file or a malformed
//! entry never fails startup. Variables already present in the process
//! environment are never overridden by the file.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use super::constants::{DOTENV_DISABLED_VAR, DOTENV_FILENAME};
use super::error::ConfigError;

/// What happened to a single environment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotenvReport {
    /// File that was read
    pub path: PathBuf,
    /// Keys installed into the process environment
    pub applied: usize,
    /// Keys left untouched because the process already had them
    pub preserved: usize,
    /// Malformed entries that were ignored
    pub skipped: usize,
}

impl DotenvReport {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            applied: 0,
            preserved: 0,
            skipped: 0,
        }
    }
}

/// Result of the startup `.env` lookup. Every variant is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotenvOutcome {
    Loaded(DotenvReport),
    NotFound,
    Disabled,
    Unreadable { path: PathBuf },
}

impl DotenvOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, DotenvOutcome::Loaded(_))
    }

    pub fn report(&self) -> Option<&DotenvReport> {
        match self {
            DotenvOutcome::Loaded(report) => Some(report),
            _ => None,
        }
    }
}

/// Check if dotenv loading is disabled via environment variable.
pub fn is_disabled() -> bool {
    matches!(
        env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
        Some("1") | Some("true")
    )
}

/// Load the nearest `.env` file, searching from the current directory upward.
pub fn load() -> DotenvOutcome {
    match env::current_dir() {
        Ok(dir) => load_from_dir(&dir),
        Err(e) => {
            tracing::warn!("Cannot determine current directory, skipping .env: {}", e);
            DotenvOutcome::NotFound
        }
    }
}

/// Load the nearest `.env` file found in `start` or one of its ancestors.
pub fn load_from_dir(start: &Path) -> DotenvOutcome {
    if is_disabled() {
        tracing::debug!("{} is set, skipping .env loading", DOTENV_DISABLED_VAR);
        return DotenvOutcome::Disabled;
    }

    let Some(path) = find_dotenv(start) else {
        tracing::debug!("No {} file found from {}", DOTENV_FILENAME, start.display());
        return DotenvOutcome::NotFound;
    };

    load_file(&path)
}

/// Load one specific environment file, reporting any failure as an outcome.
pub fn load_file(path: &Path) -> DotenvOutcome {
    match load_from_path(path) {
        Ok(report) => {
            tracing::info!(
                "Loaded {} ({} applied, {} preserved, {} skipped)",
                report.path.display(),
                report.applied,
                report.preserved,
                report.skipped
            );
            DotenvOutcome::Loaded(report)
        }
        Err(ConfigError::DotenvRead { source, .. })
            if source.kind() == io::ErrorKind::NotFound =>
        {
            tracing::debug!("No environment file at {}", path.display());
            DotenvOutcome::NotFound
        }
        Err(e) => {
            tracing::warn!("{}", e);
            DotenvOutcome::Unreadable {
                path: path.to_path_buf(),
            }
        }
    }
}

/// Find the first regular `.env` file in `start` or its ancestors.
pub fn find_dotenv(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DOTENV_FILENAME))
        .find(|candidate| candidate.is_file())
}

/// Apply one environment file to the process environment.
///
/// Entries are applied one at a time. Malformed entries and lines that are
/// not valid UTF-8 are skipped. Any other I/O error part-way through stops
/// reading, keeping what was applied.
///
/// An unterminated quote makes the value run to the end of the file, so
/// every entry after it is lost along with it.
///
/// # Errors
/// Returns `ConfigError::DotenvRead` if the file cannot be opened, including
/// when it does not exist.
pub fn load_from_path(path: &Path) -> Result<DotenvReport, ConfigError> {
    let entries =
        dotenvy::from_path_iter(path).map_err(|e| ConfigError::from_dotenv(path, e))?;

    let mut report = DotenvReport::new(path);

    for (ordinal, entry) in entries.enumerate() {
        match entry {
            Ok((key, value)) => {
                // set_var panics on these
                if key.is_empty() || key.contains(['=', '\0']) || value.contains('\0') {
                    tracing::warn!(
                        "Skipping unusable entry #{} in {}",
                        ordinal + 1,
                        path.display()
                    );
                    report.skipped += 1;
                } else if env::var_os(&key).is_some() {
                    tracing::debug!("{} already set, keeping process value", key);
                    report.preserved += 1;
                } else {
                    env::set_var(&key, value);
                    report.applied += 1;
                }
            }
            Err(dotenvy::Error::LineParse(_, _)) => {
                tracing::warn!(
                    "Skipping malformed entry #{} in {}",
                    ordinal + 1,
                    path.display()
                );
                report.skipped += 1;
            }
            Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
                tracing::warn!(
                    "Skipping unreadable entry #{} in {}",
                    ordinal + 1,
                    path.display()
                );
                report.skipped += 1;
            }
            Err(e) => {
                tracing::warn!("{}", ConfigError::from_dotenv(path, e));
                break;
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn write_env(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join(DOTENV_FILENAME);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_find_dotenv_in_start_dir() {
        let dir = TempDir::new().unwrap();
        let path = write_env(&dir, "A=1\n");

        assert_eq!(find_dotenv(dir.path()), Some(path));
    }

    #[test]
    fn test_find_dotenv_in_ancestor() {
        let dir = TempDir::new().unwrap();
        let path = write_env(&dir, "A=1\n");
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_dotenv(&nested), Some(path));
    }

    #[test]
    fn test_find_dotenv_ignores_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("inner");
        fs::create_dir_all(nested.join(DOTENV_FILENAME)).unwrap();

        assert_ne!(find_dotenv(&nested), Some(nested.join(DOTENV_FILENAME)));
    }

    #[test]
    #[serial]
    fn test_load_from_path_applies_new_keys() {
        let dir = TempDir::new().unwrap();
        let path = write_env(
            &dir,
            "# comment\n\nCALC_DOTENV_NEW_A=alpha\nexport CALC_DOTENV_NEW_B=\"beta gamma\"\n",
        );

        temp_env::with_vars_unset(["CALC_DOTENV_NEW_A", "CALC_DOTENV_NEW_B"], || {
            let report = load_from_path(&path).unwrap();

            assert_eq!(report.applied, 2);
            assert_eq!(report.preserved, 0);
            assert_eq!(report.skipped, 0);
            assert_eq!(env::var("CALC_DOTENV_NEW_A").unwrap(), "alpha");
            assert_eq!(env::var("CALC_DOTENV_NEW_B").unwrap(), "beta gamma");
        });
    }

    #[test]
    #[serial]
    fn test_load_from_path_keeps_existing_values() {
        let dir = TempDir::new().unwrap();
        let path = write_env(&dir, "CALC_DOTENV_KEEP=from-file\n");

        temp_env::with_var("CALC_DOTENV_KEEP", Some("from-process"), || {
            let report = load_from_path(&path).unwrap();

            assert_eq!(report.applied, 0);
            assert_eq!(report.preserved, 1);
            assert_eq!(env::var("CALC_DOTENV_KEEP").unwrap(), "from-process");
        });
    }

    #[test]
    #[serial]
    fn test_load_from_path_skips_malformed_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_env(
            &dir,
            "CALC_DOTENV_GOOD_A=1\nTHIS LINE IS BROKEN\nCALC_DOTENV_GOOD_B=2\n",
        );

        temp_env::with_vars_unset(["CALC_DOTENV_GOOD_A", "CALC_DOTENV_GOOD_B"], || {
            let report = load_from_path(&path).unwrap();

            assert_eq!(report.applied, 2);
            assert_eq!(report.skipped, 1);
            assert_eq!(env::var("CALC_DOTENV_GOOD_B").unwrap(), "2");
        });
    }

    #[test]
    fn test_load_from_missing_path_is_read_error() {
        let dir = TempDir::new().unwrap();
        let result = load_from_path(&dir.path().join("missing.env"));

        assert!(matches!(result, Err(ConfigError::DotenvRead { .. })));
    }

    #[test]
    #[serial]
    fn test_load_from_path_skips_non_utf8_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DOTENV_FILENAME);
        fs::write(&path, b"# caf\xe9 comment\nCALC_DOTENV_AFTER_LATIN1=abc123\n").unwrap();

        temp_env::with_var_unset("CALC_DOTENV_AFTER_LATIN1", || {
            let report = load_from_path(&path).unwrap();

            assert_eq!(report.skipped, 1);
            assert_eq!(report.applied, 1);
            assert_eq!(env::var("CALC_DOTENV_AFTER_LATIN1").unwrap(), "abc123");
        });
    }

    #[test]
    fn test_load_from_path_stops_on_read_failure() {
        let dir = TempDir::new().unwrap();
        let unreadable = dir.path().join("env-dir");
        fs::create_dir_all(&unreadable).unwrap();

        // Opening a directory succeeds on Linux, reading it does not
        let report = load_from_path(&unreadable).unwrap();

        assert_eq!(report.applied, 0);
        assert_eq!(report.preserved, 0);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_load_file_that_cannot_be_opened_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let plain = dir.path().join("plain");
        fs::write(&plain, "not a directory").unwrap();
        let path = plain.join(DOTENV_FILENAME);

        assert_eq!(
            load_file(&path),
            DotenvOutcome::Unreadable { path: path.clone() }
        );
    }

    #[test]
    fn test_load_file_missing_is_not_found() {
        let dir = TempDir::new().unwrap();

        assert_eq!(
            load_file(&dir.path().join("missing.env")),
            DotenvOutcome::NotFound
        );
    }

    #[test]
    #[serial]
    fn test_load_from_dir_without_file() {
        let dir = TempDir::new().unwrap();

        temp_env::with_var_unset(DOTENV_DISABLED_VAR, || {
            // Only meaningful when no ancestor of the temp dir has a .env
            if find_dotenv(dir.path()).is_none() {
                assert_eq!(load_from_dir(dir.path()), DotenvOutcome::NotFound);
            }
        });
    }

    #[test]
    #[serial]
    fn test_load_from_dir_respects_disabled_flag() {
        let dir = TempDir::new().unwrap();
        write_env(&dir, "CALC_DOTENV_DISABLED_KEY=1\n");

        temp_env::with_vars(
            [
                (DOTENV_DISABLED_VAR, Some("1")),
                ("CALC_DOTENV_DISABLED_KEY", None),
            ],
            || {
                assert_eq!(load_from_dir(dir.path()), DotenvOutcome::Disabled);
                assert!(env::var("CALC_DOTENV_DISABLED_KEY").is_err());
            },
        );
    }

    #[test]
    #[serial]
    fn test_disabled_flag_values() {
        temp_env::with_var(DOTENV_DISABLED_VAR, Some("true"), || assert!(is_disabled()));
        temp_env::with_var(DOTENV_DISABLED_VAR, Some("0"), || assert!(!is_disabled()));
        temp_env::with_var_unset(DOTENV_DISABLED_VAR, || assert!(!is_disabled()));
    }
}
