use console::style;
use std::fmt::Display;

/// White bold — section headers
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Cyan bold — dish names, accents
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Dim — reasons, notes, secondary text
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow — warnings attached to a recommendation
pub fn warning<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// Red bold — dishes to steer clear of, alerts
pub fn danger<D: Display>(text: D) -> String {
    style(text).red().bold().to_string()
}

/// Green — confirmed values, added items
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}
