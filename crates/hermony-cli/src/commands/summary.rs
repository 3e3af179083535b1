use std::path::PathBuf;

use clap::Subcommand;
use hermony_core::summarize;

#[derive(Subcommand)]
pub enum SummaryAction {
    /// Show today's work/life summary
    Show {
        /// Events JSON file (defaults to the demo calendar)
        #[arg(long)]
        events: Option<PathBuf>,
        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: SummaryAction) -> super::CliResult {
    match action {
        SummaryAction::Show { events, json } => {
            let events = super::load_events(events.as_deref())?;
            let summary = summarize(&events);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("Work hours:      {}", summary.work_hours);
                println!("Personal hours:  {}", summary.personal_hours);
                println!("Meetings:        {}", summary.meeting_count);
                println!("Work/life ratio: {}", summary.work_life_ratio);
            }
        }
    }
    Ok(())
}
