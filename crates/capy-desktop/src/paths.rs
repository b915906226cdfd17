//! Path helpers for XDG application directories.

use std::ffi::OsString;
use std::path::PathBuf;

/// Used when `XDG_DATA_DIRS` is unset or empty.
pub const DEFAULT_DATA_DIRS: &str = "/usr/local/share/:/usr/share/";

/// System-wide flatpak exports.
pub const FLATPAK_SYSTEM_APPLICATIONS: &str = "/var/lib/flatpak/exports/share/applications";

/// Per-user flatpak exports, relative to `$HOME`.
const FLATPAK_USER_APPLICATIONS: &str = ".local/share/flatpak/exports/share/applications";

/// Ordered list of directories to search, first match wins.
pub type SearchPath = Vec<PathBuf>;

/// Snapshot of the XDG base-directory environment.
///
/// Empty values are treated the same as unset ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XdgEnv {
    /// `$HOME`
    pub home: Option<PathBuf>,
    /// `$XDG_DATA_HOME`
    pub data_home: Option<PathBuf>,
    /// `$XDG_DATA_DIRS`, colon separated.
    pub data_dirs: Option<OsString>,
}

impl XdgEnv {
    /// Read `HOME`, `XDG_DATA_HOME` and `XDG_DATA_DIRS` from the process environment.
    pub fn from_env() -> Self {
        Self {
            home: non_empty_var("HOME").map(PathBuf::from),
            data_home: non_empty_var("XDG_DATA_HOME").map(PathBuf::from),
            data_dirs: non_empty_var("XDG_DATA_DIRS"),
        }
    }

    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn with_data_home(mut self, data_home: impl Into<PathBuf>) -> Self {
        self.data_home = Some(data_home.into());
        self
    }

    pub fn with_data_dirs(mut self, data_dirs: impl Into<OsString>) -> Self {
        self.data_dirs = Some(data_dirs.into());
        self
    }
}

fn non_empty_var(key: &str) -> Option<OsString> {
    std::env::var_os(key).filter(|value| !value.is_empty())
}

/// Get all application .desktop file directories, in search order.
///
/// Does not touch the filesystem; directories that do not exist are kept
/// and skipped later by the locator.
pub fn application_dirs(env: &XdgEnv) -> SearchPath {
    let mut dirs = Vec::new();

    // User applications
    if let Some(data_home) = &env.data_home {
        dirs.push(data_home.join("applications"));
    } else if let Some(home) = &env.home {
        dirs.push(home.join(".local/share/applications"));
    }

    // System applications, duplicates of the user dir are kept
    let data_dirs = env
        .data_dirs
        .clone()
        .unwrap_or_else(|| OsString::from(DEFAULT_DATA_DIRS));
    for data_dir in std::env::split_paths(&data_dirs) {
        if !data_dir.as_os_str().is_empty() {
            dirs.push(data_dir.join("applications"));
        }
    }

    // Flatpak exports go last and only once
    let flatpak_dirs = env
        .home
        .iter()
        .map(|home| home.join(FLATPAK_USER_APPLICATIONS))
        .chain(std::iter::once(PathBuf::from(FLATPAK_SYSTEM_APPLICATIONS)));
    for dir in flatpak_dirs {
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }

    dirs
}
