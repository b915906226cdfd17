//! Output formatting for resolved app metadata.

use capy_desktop::Desktop;
use serde::Serialize;
use std::path::PathBuf;

/// One resolved class, as printed by the CLI.
#[derive(Debug, Serialize)]
pub struct Report {
    pub class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(flatten)]
    pub desktop: Desktop,
}

pub fn to_text(report: &Report, show_path: bool) -> String {
    let d = &report.desktop;
    let mut out = format!(
        "{}\n  name: {}\n  icon: {}\n  exec: {}\n  single_window: {}",
        report.class,
        d.name,
        or_dash(&d.icon),
        or_dash(&d.exec),
        d.single_window
    );

    if show_path {
        let path = report
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(no match)".to_string());
        out.push_str(&format!("\n  path: {path}"));
    }

    out
}

pub fn to_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string(report)
}

#[inline]
fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
