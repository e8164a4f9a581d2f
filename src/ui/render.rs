use super::style;
use crate::analysis::MenuAnalysis;
use crate::preferences::{PreferenceList, PreferenceState};
use strum::IntoEnumIterator;

/// Print a full analysis: recommended dishes first, then what to avoid, then
/// the rest of the menu.
pub fn render_analysis(analysis: &MenuAnalysis) {
    println!("\n{}", style::header("Recommended Dishes"));
    for dish in &analysis.recommendations {
        println!("  {}", style::accent(&dish.name));
        println!("    {}", style::dim(&dish.reason));
        if let Some(warning) = &dish.warning {
            println!("    {}", style::warning(format!("! {warning}")));
        }
    }

    if !analysis.not_recommended.is_empty() {
        println!("\n{}", style::header("Not Recommended"));
        for dish in &analysis.not_recommended {
            println!("  {}", style::danger(&dish.name));
            println!("    {}", style::dim(&dish.reason));
        }
    }

    if !analysis.other_options.is_empty() {
        println!("\n{}", style::header("Other Menu Items"));
        for option in &analysis.other_options {
            match &option.notes {
                Some(notes) => println!("  {} {}", option.name, style::dim(format!("({notes})"))),
                None => println!("  {}", option.name),
            }
        }
    }
    println!();
}

/// Print the three preference lists with their ids, so remove/edit commands
/// have something to point at.
pub fn render_preferences(state: &PreferenceState) {
    for list in PreferenceList::iter() {
        println!("\n{} {}", style::header(list.title()), style::dim(format!("({list})")));
        let items = state.list(list);
        if items.is_empty() {
            println!("  {}", style::dim("(empty)"));
        }
        for item in items {
            println!("  {}  {}", style::dim(&item.id), item.text);
        }
    }
    println!();
}
