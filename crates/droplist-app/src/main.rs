//! droplist headless demo.
//!
//! Loads a scenario (a dropdown definition plus scripted input), replays the
//! input against a dropdown drawn on a headless backend and logs every
//! frame. Usage:
//!
//! ```text
//! droplist-demo [scenario.toml] [--json]
//! ```
//!
//! Without a path, `DROPLIST_SCENARIO` is tried, then the built-in
//! scenario. `--json` prints the final dropdown state to stdout.

mod scenario;
mod session;
mod trace_backend;

use std::path::PathBuf;

use anyhow::Result;

use scenario::Scenario;
use session::Session;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut json = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            path = Some(PathBuf::from(arg));
        }
    }
    let path = path.or_else(|| std::env::var_os("DROPLIST_SCENARIO").map(PathBuf::from));

    let scenario = match &path {
        Some(path) => {
            log::info!("Loading scenario {}", path.display());
            Scenario::load(path)?
        },
        None => {
            log::info!("Running built-in scenario");
            Scenario::builtin()?
        },
    };

    let mut session = Session::new(&scenario)?;
    session.run(&scenario.events)?;

    let snapshot = session.snapshot();
    log::info!(
        "Final: '{}' selected, showing {:?}",
        snapshot.selected,
        snapshot.visible
    );
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}
