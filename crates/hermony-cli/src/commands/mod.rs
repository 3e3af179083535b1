pub mod events;
pub mod health;
pub mod nozone;
pub mod prefs;
pub mod summary;

use std::path::Path;

use hermony_core::{CalendarEvent, CalendarSource, MockCalendar, Preferences};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Load preferences from a TOML file, or built-in defaults when no path is
/// given.
pub fn load_preferences(path: Option<&Path>) -> Result<Preferences, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let preferences: Preferences = toml::from_str(&text)?;
            preferences.validate()?;
            Ok(preferences)
        }
        None => Ok(Preferences::default()),
    }
}

/// Load events from a JSON file, or the demo calendar when no path is given.
pub fn load_events(path: Option<&Path>) -> Result<Vec<CalendarEvent>, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(MockCalendar::today().fetch_events()),
    }
}
