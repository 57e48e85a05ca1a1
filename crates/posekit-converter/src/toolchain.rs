//! Converter executable discovery.
//!
//! Locates `tensorflowjs_converter` (or a configured replacement) either
//! from an explicit path or by walking the directories on `PATH`.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ConversionError;

/// Suffixes tried for bare command names on Windows.
#[cfg(windows)]
const EXECUTABLE_SUFFIXES: &[&str] = &["", ".exe", ".cmd", ".bat"];
#[cfg(not(windows))]
const EXECUTABLE_SUFFIXES: &[&str] = &[""];

/// How the converter executable was located.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryMethod {
    /// The configured command was a path to an existing file.
    ExplicitPath,
    /// Found by searching the `PATH` environment variable.
    SystemPath,
}

/// A located converter executable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterInstallation {
    /// Full path to the executable.
    pub executable: PathBuf,
    /// How it was found.
    pub discovery_method: DiscoveryMethod,
}

/// Converter discovery engine.
pub struct ConverterToolchain;

impl ConverterToolchain {
    /// Resolve `command` against the process `PATH`.
    pub fn resolve(command: &str) -> Result<ConverterInstallation, ConversionError> {
        let path_var = std::env::var_os("PATH");
        Self::resolve_with_path(command, path_var.as_deref())
    }

    /// Resolve `command` against an explicit `PATH` value.
    pub fn resolve_with_path(
        command: &str,
        path_var: Option<&OsStr>,
    ) -> Result<ConverterInstallation, ConversionError> {
        if Self::is_explicit_path(command) {
            let path = Path::new(command);
            if path.is_file() {
                debug!(path = %path.display(), "Using explicitly configured converter");
                return Ok(ConverterInstallation {
                    executable: path.to_path_buf(),
                    discovery_method: DiscoveryMethod::ExplicitPath,
                });
            }
            return Err(ConversionError::ConverterNotFound {
                command: command.to_string(),
            });
        }

        if let Some(path_var) = path_var {
            for dir in std::env::split_paths(path_var) {
                if let Some(found) = Self::find_in_dir(&dir, command) {
                    info!(path = %found.display(), "Found converter in system PATH");
                    return Ok(ConverterInstallation {
                        executable: found,
                        discovery_method: DiscoveryMethod::SystemPath,
                    });
                }
            }
        }

        Err(ConversionError::ConverterNotFound {
            command: command.to_string(),
        })
    }

    /// Whether `command` should be treated as a filesystem path.
    fn is_explicit_path(command: &str) -> bool {
        command.contains('/') || command.contains(std::path::MAIN_SEPARATOR)
    }

    fn find_in_dir(dir: &Path, command: &str) -> Option<PathBuf> {
        EXECUTABLE_SUFFIXES
            .iter()
            .map(|suffix| dir.join(format!("{command}{suffix}")))
            .find(|candidate| Self::is_executable(candidate))
    }

    /// Regular file that the current user may execute. Non-executable
    /// entries are skipped so a later `PATH` directory can still match.
    #[cfg(unix)]
    fn is_executable(path: &Path) -> bool {
        use std::os::unix::fs::PermissionsExt;

        path.metadata()
            .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    #[cfg(not(unix))]
    fn is_executable(path: &Path) -> bool {
        path.is_file()
    }
}
