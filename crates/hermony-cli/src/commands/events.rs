use clap::Subcommand;
use hermony_core::{CalendarSource, MockCalendar};

#[derive(Subcommand)]
pub enum EventsAction {
    /// Print the demo calendar, usable as input for other commands
    Sample {
        /// Emit events as JSON (default is a readable listing)
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: EventsAction) -> super::CliResult {
    match action {
        EventsAction::Sample { json } => {
            let events = MockCalendar::today().fetch_events();
            if json {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else {
                for event in &events {
                    println!(
                        "{} - {}  [{}] {}",
                        event.start.format("%H:%M"),
                        event.end.format("%H:%M"),
                        event.kind.as_str(),
                        event.title
                    );
                }
            }
        }
    }
    Ok(())
}
