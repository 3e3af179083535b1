use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;
use hermony_core::{dispatch, evaluate, expand, ConsoleSink};

#[derive(Subcommand)]
pub enum HealthAction {
    /// Evaluate schedule health
    Check {
        /// Events JSON file (defaults to the demo calendar)
        #[arg(long)]
        events: Option<PathBuf>,
        /// Preferences TOML file (defaults to built-in defaults)
        #[arg(long)]
        prefs: Option<PathBuf>,
        /// Emit findings as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: HealthAction) -> super::CliResult {
    match action {
        HealthAction::Check {
            events,
            prefs,
            json,
        } => {
            let preferences = super::load_preferences(prefs.as_deref())?;
            let mut all = super::load_events(events.as_deref())?;

            // Regenerate no-zone instances from the rules so violations are
            // checked against the current rule set, not stale instances.
            all.retain(|e| !e.is_no_zone());
            all.extend(expand(&preferences.no_zone_times, Utc::now()));

            let findings = evaluate(&all, &preferences);
            if json {
                println!("{}", serde_json::to_string_pretty(&findings)?);
            } else if findings.is_empty() {
                println!("✓ Your schedule looks healthy");
            } else {
                dispatch(&mut ConsoleSink, &findings);
            }
        }
    }
    Ok(())
}
