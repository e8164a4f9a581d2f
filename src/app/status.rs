use crate::config::Config;
use crate::preferences::{PreferenceList, PreferenceStore};
use crate::ui::style;
use strum::IntoEnumIterator;

/// Print resolved configuration and the size of each preference list.
pub fn render_status(config: &Config) {
    println!("{}", style::header("MenuMind status"));
    println!("  workspace: {}", style::value(config.workspace_dir.display()));
    println!("  analysis endpoint: {}", style::value(config.api_base_url()));

    let state = PreferenceStore::new(&config.workspace_dir).load();
    for list in PreferenceList::iter() {
        println!(
            "  {}: {} item(s)",
            list.title(),
            style::accent(state.list(list).len()),
        );
    }
}
