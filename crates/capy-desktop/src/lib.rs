//! capy-desktop: App metadata resolver for Linux desktops.
//!
//! Turns a window class (X11 `WM_CLASS` or Wayland app-id) into the name,
//! icon, launch command and single-window flag from its .desktop file:
//! - XDG application directory enumeration (user, system, flatpak)
//! - Fuzzy matching of class names to .desktop file names
//! - .desktop file parsing
//!
//! Nothing is cached; every call walks the directories again.

mod desktop_entry;
mod error;
mod locate;
mod paths;
mod resolve;

pub use desktop_entry::{DESKTOP_ENTRY_GROUP, DesktopEntry, Group, parse_desktop_file};
pub use error::{ParseError, ResolveError};
pub use locate::{find_desktop_file, locate, web_app_base_name};
pub use paths::{SearchPath, XdgEnv, application_dirs};
pub use resolve::{
    DEFAULT_NAME, Desktop, resolve, resolve_file, resolve_in, resolve_with, try_resolve,
    try_resolve_file, try_resolve_in,
};

// Use a mutex to ensure tests that modify env vars don't race
#[cfg(test)]
static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
