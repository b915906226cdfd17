//! Window class -> app metadata.

use crate::desktop_entry::{DESKTOP_ENTRY_GROUP, DesktopEntry, parse_desktop_file};
use crate::error::ResolveError;
use crate::locate::find_desktop_file;
use crate::paths::{XdgEnv, application_dirs};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name used when nothing better is known.
pub const DEFAULT_NAME: &str = "Untitle";

/// App metadata shown by the shell for a window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Desktop {
    /// Display name.
    pub name: String,
    /// Icon name or absolute path.
    pub icon: String,
    /// Launch command template, field codes included.
    pub exec: String,
    /// `SingleMainWindow=true` in the entry.
    pub single_window: bool,
}

impl Default for Desktop {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            icon: String::new(),
            exec: String::new(),
            single_window: false,
        }
    }
}

impl Desktop {
    /// Build from a parsed entry. Returns None if there is no `[Desktop Entry]` group.
    ///
    /// Missing keys fall back to their own defaults.
    pub fn from_entry(entry: &DesktopEntry) -> Option<Self> {
        let group = entry.group(DESKTOP_ENTRY_GROUP)?;
        let defaults = Self::default();
        let field = |key: &str| group.get(key).cloned();

        Some(Self {
            name: field("name").unwrap_or(defaults.name),
            icon: field("icon").unwrap_or(defaults.icon),
            exec: field("exec").unwrap_or(defaults.exec),
            single_window: group
                .get("singlemainwindow")
                .is_some_and(|v| v == "true"),
        })
    }
}

/// Resolve a window class using the current process environment.
///
/// Never fails: anything that goes wrong yields `Desktop::default()`.
pub fn resolve(class: &str) -> Desktop {
    resolve_with(&XdgEnv::from_env(), class)
}

/// Like [`resolve`], with an explicit environment.
pub fn resolve_with(env: &XdgEnv, class: &str) -> Desktop {
    resolve_in(&application_dirs(env), class)
}

/// Like [`resolve`], searching only `dirs`.
pub fn resolve_in<P: AsRef<Path>>(dirs: &[P], class: &str) -> Desktop {
    try_resolve_in(dirs, class).unwrap_or_else(|e| {
        debug!("Using default metadata for {:?}: {}", class, e);
        Desktop::default()
    })
}

/// Resolve a window class, reporting why it failed.
pub fn try_resolve(env: &XdgEnv, class: &str) -> Result<Desktop, ResolveError> {
    try_resolve_in(&application_dirs(env), class)
}

/// Like [`try_resolve`], searching only `dirs`.
pub fn try_resolve_in<P: AsRef<Path>>(dirs: &[P], class: &str) -> Result<Desktop, ResolveError> {
    let path = find_desktop_file(dirs, class)
        .ok_or_else(|| ResolveError::NotFound(class.to_string()))?;

    try_resolve_file(&path)
}

/// Build metadata from an already located .desktop file.
///
/// Never fails, like [`resolve`].
pub fn resolve_file(path: &Path) -> Desktop {
    try_resolve_file(path).unwrap_or_else(|e| {
        debug!("Using default metadata for {}: {}", path.display(), e);
        Desktop::default()
    })
}

/// Like [`resolve_file`], reporting why it failed.
pub fn try_resolve_file(path: &Path) -> Result<Desktop, ResolveError> {
    let entry = parse_desktop_file(path)?;

    Desktop::from_entry(&entry).ok_or_else(|| ResolveError::MissingGroup(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ENV_LOCK;
    use crate::error::ParseError;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    fn app_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    fn entry(content: &str) -> DesktopEntry {
        content.parse().unwrap()
    }

    #[test]
    fn test_default_record() {
        let d = Desktop::default();
        assert_eq!(d.name, "Untitle");
        assert!(d.icon.is_empty());
        assert!(d.exec.is_empty());
        assert!(!d.single_window);
    }

    #[test]
    fn test_from_entry_per_field_defaults() {
        let d = Desktop::from_entry(&entry("[Desktop Entry]\nName=Foo\n")).unwrap();
        assert_eq!(
            d,
            Desktop {
                name: "Foo".to_string(),
                icon: String::new(),
                exec: String::new(),
                single_window: false,
            }
        );

        let d = Desktop::from_entry(&entry("[Desktop Entry]\nIcon=foo\n")).unwrap();
        assert_eq!(d.name, DEFAULT_NAME);
        assert_eq!(d.icon, "foo");
    }

    #[test]
    fn test_single_window_is_strict() {
        let value = |v: &str| {
            Desktop::from_entry(&entry(&format!("[Desktop Entry]\nSingleMainWindow={v}\n")))
                .unwrap()
                .single_window
        };

        assert!(value("true"));
        assert!(!value("TRUE"));
        assert!(!value("True"));
        assert!(!value("yes"));
        assert!(!value("1"));
        assert!(!value(""));
    }

    #[test]
    fn test_from_entry_without_main_group() {
        assert_eq!(Desktop::from_entry(&entry("[Other]\nName=Foo\n")), None);
    }

    #[test]
    fn test_resolve_full_entry() {
        let root = tempfile::tempdir().unwrap();
        let apps = root.path().join("applications");
        fs::create_dir(&apps).unwrap();
        fs::write(
            apps.join("org.kde.krita.desktop"),
            "[Desktop Entry]\nName=Krita\nIcon=krita\nExec=krita %F\nSingleMainWindow=true\n",
        )
        .unwrap();
        let env = XdgEnv::default().with_data_home(root.path());

        assert_eq!(
            resolve_with(&env, "krita"),
            Desktop {
                name: "Krita".to_string(),
                icon: "krita".to_string(),
                exec: "krita %F".to_string(),
                single_window: true,
            }
        );
    }

    #[test]
    fn test_not_found() {
        let dir = app_dir(&[("firefox.desktop", "[Desktop Entry]\nName=Firefox\n")]);

        assert!(matches!(
            try_resolve_in(&[dir.path()], "alacritty"),
            Err(ResolveError::NotFound(class)) if class == "alacritty"
        ));
        assert_eq!(resolve_in(&[dir.path()], "alacritty"), Desktop::default());
    }

    #[test]
    fn test_parse_failure_gives_defaults() {
        let dir = app_dir(&[("broken.desktop", "Name=Broken\n")]);

        assert!(matches!(
            try_resolve_in(&[dir.path()], "broken"),
            Err(ResolveError::Parse(ParseError::KeyOutsideGroup { .. }))
        ));
        assert_eq!(resolve_in(&[dir.path()], "broken"), Desktop::default());
    }

    #[test]
    fn test_missing_group_gives_defaults() {
        let dir = app_dir(&[("odd.desktop", "[Something Else]\nName=Odd\n")]);

        match try_resolve_in(&[dir.path()], "odd") {
            Err(ResolveError::MissingGroup(path)) => {
                assert_eq!(path, dir.path().join("odd.desktop"))
            }
            other => panic!("expected missing group, got {other:?}"),
        }
        assert_eq!(resolve_in(&[dir.path()], "odd"), Desktop::default());
    }

    #[test]
    fn test_group_name_case_does_not_matter() {
        let dir = app_dir(&[("foot.desktop", "[DESKTOP ENTRY]\nNAME=Foot\n")]);
        assert_eq!(resolve_in(&[dir.path()], "foot").name, "Foot");
    }

    #[test]
    fn test_serializes_for_consumers() {
        let json = serde_json::to_string(&Desktop::default()).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Untitle","icon":"","exec":"","single_window":false}"#
        );
        let back: Desktop = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Desktop::default());
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let err = parse_desktop_file(std::path::Path::new("/nonexistent/x.desktop")).unwrap_err();
        assert!(matches!(ResolveError::from(err), ResolveError::Parse(ParseError::Io { .. })));
    }

    #[test]
    fn test_resolve_file() {
        let dir = app_dir(&[
            ("foot.desktop", "[Desktop Entry]\nName=Foot\nExec=foot\n"),
            ("odd.desktop", "[Other]\n"),
        ]);

        let foot = resolve_file(&dir.path().join("foot.desktop"));
        assert_eq!(foot.name, "Foot");
        assert_eq!(foot.exec, "foot");

        assert!(matches!(
            try_resolve_file(&dir.path().join("odd.desktop")),
            Err(ResolveError::MissingGroup(_))
        ));
        assert_eq!(resolve_file(&dir.path().join("odd.desktop")), Desktop::default());
        assert_eq!(resolve_file(&dir.path().join("gone.desktop")), Desktop::default());
        assert_eq!(resolve_file(Path::new("")), Desktop::default());
    }

    #[test]
    fn test_resolve_reads_process_env() {
        let _guard = ENV_LOCK.lock().unwrap();

        let root = tempfile::tempdir().unwrap();
        let apps = root.path().join("applications");
        fs::create_dir(&apps).unwrap();
        fs::write(
            apps.join("org.example.CapyViewer.desktop"),
            "[Desktop Entry]\nName=Capy Viewer\nIcon=capy-viewer\n",
        )
        .unwrap();

        unsafe {
            env::set_var("XDG_DATA_HOME", root.path());
            env::set_var("XDG_DATA_DIRS", root.path().join("none"));
        }

        let desktop = resolve("CapyViewer");
        let missing = resolve("capy-desktop-test-no-such-app");

        unsafe {
            env::remove_var("XDG_DATA_HOME");
            env::remove_var("XDG_DATA_DIRS");
        }

        assert_eq!(desktop.name, "Capy Viewer");
        assert_eq!(desktop.icon, "capy-viewer");
        assert_eq!(missing, Desktop::default());
    }
}
