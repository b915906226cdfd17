//! Matching window classes to .desktop files.
//!
//! Directories are tried in order and the first hit wins. Within a
//! directory the checks run from most to least specific:
//! - exact `<class>.desktop`
//! - one pass over the sorted listing, each file checked for
//!   - a reverse-DNS id containing the class ("krita" -> "org.kde.krita.desktop")
//!   - the lowercased first word ("VirtualBox Manager" -> "virtualbox.desktop")
//! - chrome/chromium web apps ("chrome-messenger.com__-Default" -> "Messenger.desktop")

use crate::paths::{XdgEnv, application_dirs};
use log::{debug, trace};
use std::path::{Path, PathBuf};

const DESKTOP_SUFFIX: &str = ".desktop";
const WEB_APP_PREFIXES: [&str; 2] = ["chrome-", "chromium-"];

/// Find the .desktop file for a class using the directories from `env`.
pub fn locate(env: &XdgEnv, class: &str) -> Option<PathBuf> {
    find_desktop_file(&application_dirs(env), class)
}

/// Find the .desktop file for a class in the given directories.
pub fn find_desktop_file<P: AsRef<Path>>(dirs: &[P], class: &str) -> Option<PathBuf> {
    if class.is_empty() {
        return None;
    }

    for dir in dirs {
        let dir = dir.as_ref();
        if let Some(path) = find_in_dir(dir, class) {
            debug!("Matched class {:?} to {}", class, path.display());
            return Some(path);
        }
    }

    debug!("No desktop file for class {:?}", class);
    None
}

fn find_in_dir(dir: &Path, class: &str) -> Option<PathBuf> {
    let exact = dir.join(format!("{class}{DESKTOP_SUFFIX}"));
    if exact.is_file() {
        return Some(exact);
    }

    let files = list_file_names(dir);
    if files.is_empty() {
        return None;
    }

    let found = match_listing(&files, class).or_else(|| match_web_app(&files, class))?;

    Some(dir.join(found))
}

/// File names in `dir`, sorted so ties resolve the same way on every filesystem.
fn list_file_names(dir: &Path) -> Vec<String> {
    if !dir.is_dir() {
        trace!("Skipping missing directory {}", dir.display());
        return Vec::new();
    }

    walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| !e.file_type().is_dir())
        .filter_map(|e| e.file_name().to_str().map(String::from))
        .collect()
}

/// Reverse-DNS containment and lowercased first word, checked together per
/// file so the first listed file passing either wins.
fn match_listing<'a>(files: &'a [String], class: &str) -> Option<&'a str> {
    let word = class.split(' ').next().unwrap_or(class).to_lowercase();
    let wanted = format!("{word}{DESKTOP_SUFFIX}");

    files.iter().map(String::as_str).find(|name| {
        (name.matches('.').count() > 1 && name.contains(class)) || *name == wanted
    })
}

fn match_web_app<'a>(files: &'a [String], class: &str) -> Option<&'a str> {
    let base = web_app_base_name(class)?.to_lowercase();

    files.iter().map(String::as_str).find(|name| {
        let lower = name.to_lowercase();
        lower.contains(&base) && lower.ends_with(DESKTOP_SUFFIX)
    })
}

/// Extract the site name from a browser web-app class.
///
/// "chrome-messenger.com__-Default" -> "messenger"
pub fn web_app_base_name(class: &str) -> Option<&str> {
    if !WEB_APP_PREFIXES.iter().any(|p| class.starts_with(p)) {
        return None;
    }

    let (_, rest) = class.split_once('-')?;
    let domain = rest.split("__").next().unwrap_or(rest);
    let domain = domain.strip_suffix('-').unwrap_or(domain);
    let base = domain.split('.').next().unwrap_or(domain);

    // An empty name would match every file
    (!base.is_empty()).then_some(base)
}
