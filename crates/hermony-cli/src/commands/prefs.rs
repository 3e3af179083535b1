use std::path::PathBuf;

use clap::Subcommand;
use hermony_core::Preferences;

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Write default preferences to a TOML file
    Init {
        /// Output file path
        path: PathBuf,
    },
    /// Show preferences
    Show {
        /// Preferences TOML file (defaults to built-in defaults)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Emit preferences as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: PrefsAction) -> super::CliResult {
    match action {
        PrefsAction::Init { path } => {
            let toml = toml::to_string_pretty(&Preferences::default())?;
            std::fs::write(&path, toml)?;
            println!("preferences written to {}", path.display());
        }
        PrefsAction::Show { path, json } => {
            let preferences = super::load_preferences(path.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&preferences)?);
            } else {
                print!("{}", toml::to_string_pretty(&preferences)?);
            }
        }
    }
    Ok(())
}
