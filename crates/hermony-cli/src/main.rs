use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;

#[derive(Parser)]
#[command(name = "hermony-cli", version, about = "Hermony CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Schedule health checks
    Health {
        #[command(subcommand)]
        action: commands::health::HealthAction,
    },
    /// Daily work/life summary
    Summary {
        #[command(subcommand)]
        action: commands::summary::SummaryAction,
    },
    /// Preference management
    Prefs {
        #[command(subcommand)]
        action: commands::prefs::PrefsAction,
    },
    /// No-zone rule management
    Nozone {
        #[command(subcommand)]
        action: commands::nozone::NozoneAction,
    },
    /// Calendar event utilities
    Events {
        #[command(subcommand)]
        action: commands::events::EventsAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Health { action } => commands::health::run(action),
        Commands::Summary { action } => commands::summary::run(action),
        Commands::Prefs { action } => commands::prefs::run(action),
        Commands::Nozone { action } => commands::nozone::run(action),
        Commands::Events { action } => commands::events::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "hermony-cli", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
