use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;
use hermony_core::expand;

#[derive(Subcommand)]
pub enum NozoneAction {
    /// List no-zone rules
    List {
        /// Preferences TOML file (defaults to built-in defaults)
        #[arg(long)]
        prefs: Option<PathBuf>,
    },
    /// Expand rules into concrete calendar events
    Expand {
        /// Preferences TOML file (defaults to built-in defaults)
        #[arg(long)]
        prefs: Option<PathBuf>,
        /// Emit events as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: NozoneAction) -> super::CliResult {
    match action {
        NozoneAction::List { prefs } => {
            let preferences = super::load_preferences(prefs.as_deref())?;
            if preferences.no_zone_times.is_empty() {
                println!("no rules configured");
            }
            for rule in &preferences.no_zone_times {
                println!("[{}] {}", rule.id, rule);
            }
        }
        NozoneAction::Expand { prefs, json } => {
            let preferences = super::load_preferences(prefs.as_deref())?;
            let events = expand(&preferences.no_zone_times, Utc::now());
            if json {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else {
                for event in &events {
                    println!(
                        "{}  {} - {}",
                        event.id,
                        event.start.format("%Y-%m-%d %H:%M"),
                        event.end.format("%H:%M")
                    );
                }
            }
        }
    }
    Ok(())
}
