//! Desktop entry parsing.

use crate::error::ParseError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Name of the main group, lowercased.
pub const DESKTOP_ENTRY_GROUP: &str = "desktop entry";

/// Key/value pairs of one group, keys lowercased.
pub type Group = HashMap<String, String>;

/// Parsed .desktop file: group name -> key -> raw value.
///
/// Group names and keys are stored lowercased; values are kept as written
/// (trimmed), without type coercion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DesktopEntry {
    groups: HashMap<String, Group>,
}

impl DesktopEntry {
    /// Get a group by name, case-insensitively.
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.get(&name.to_lowercase())
    }

    /// Get a single value, case-insensitively on both group and key.
    pub fn get(&self, group: &str, key: &str) -> Option<&str> {
        self.group(group)?
            .get(&key.to_lowercase())
            .map(String::as_str)
    }

    /// Iterate over group names (lowercased, unordered).
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl FromStr for DesktopEntry {
    type Err = ParseError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let mut groups: HashMap<String, Group> = HashMap::new();
        let mut current: Option<String> = None;

        for (index, raw) in content.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let name = line[1..line.len() - 1].trim().to_lowercase();
                if name.is_empty() {
                    return Err(ParseError::EmptyGroupName { line: line_no });
                }
                // Repeated headers merge into the same group
                groups.entry(name.clone()).or_default();
                current = Some(name);
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(ParseError::InvalidLine {
                    line: line_no,
                    content: line.to_string(),
                });
            };

            let key = key.trim().to_lowercase();
            if key.is_empty() {
                return Err(ParseError::EmptyKey { line: line_no });
            }

            let Some(group) = current.as_ref().and_then(|name| groups.get_mut(name)) else {
                return Err(ParseError::KeyOutsideGroup {
                    line: line_no,
                    content: line.to_string(),
                });
            };
            group.insert(key, value.trim().to_string());
        }

        if groups.is_empty() {
            return Err(ParseError::NoGroups);
        }

        Ok(Self { groups })
    }
}

/// Parse a .desktop file into a DesktopEntry.
pub fn parse_desktop_file(path: &Path) -> Result<DesktopEntry, ParseError> {
    if path.as_os_str().is_empty() {
        return Err(ParseError::EmptyPath);
    }

    let content = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    content.parse()
}
