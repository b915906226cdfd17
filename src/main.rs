//! capy-appinfo - Resolve window classes to app metadata
//!
//! Prints what a taskbar would show for a window: name, icon, launch
//! command and whether the app keeps a single main window.

mod formatting;

use capy_desktop::{XdgEnv, locate, resolve_file};
use clap::Parser;
use formatting::Report;
use log::info;
use std::error::Error;

#[derive(Debug, Parser)]
#[command(name = "capy-appinfo", version, about)]
struct Cli {
    /// Print one JSON object per class.
    #[arg(long)]
    json: bool,

    /// Also print which .desktop file matched.
    #[arg(long)]
    path: bool,

    /// Window classes (X11 WM_CLASS or Wayland app-id).
    #[arg(required = true)]
    classes: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    // Environment is read once for the whole run
    let env = XdgEnv::from_env();
    info!("Searching {:?}", capy_desktop::application_dirs(&env));

    for class in &cli.classes {
        // One walk: the printed path is the file the metadata came from
        let path = locate(&env, class);
        let desktop = path.as_deref().map(resolve_file).unwrap_or_default();

        let report = Report {
            class: class.clone(),
            path: path.filter(|_| cli.path || cli.json),
            desktop,
        };

        if cli.json {
            println!("{}", formatting::to_json(&report)?);
        } else {
            println!("{}", formatting::to_text(&report, cli.path));
        }
    }

    Ok(())
}
