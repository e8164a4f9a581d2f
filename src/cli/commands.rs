use crate::preferences::PreferenceList;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `MenuMind` - scan a restaurant menu, get recommendations that fit you.
#[derive(Parser, Debug)]
#[command(name = "menumind")]
#[command(version = "0.1.0")]
#[command(about = "Scan a restaurant menu and get dish recommendations matched to your food preferences.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a menu image and show recommendations
    Scan {
        /// Path to the menu photo (omit to be told how to supply one)
        image: Option<PathBuf>,

        /// Pick from the photo library instead of the camera
        #[arg(long)]
        library: bool,

        /// Override the analysis service base URL
        #[arg(long)]
        api_url: Option<String>,
    },

    /// Manage your food preference lists
    Prefs {
        #[command(subcommand)]
        prefs_command: PrefsCommands,
    },

    /// Show resolved configuration and preference counts
    Status,
}

#[derive(Subcommand, Debug)]
pub enum PrefsCommands {
    /// Add a food term to a list
    Add {
        /// Target list
        #[arg(value_enum)]
        list: PreferenceList,

        /// The food term
        text: String,
    },

    /// Remove an item by id
    Remove {
        #[arg(value_enum)]
        list: PreferenceList,

        /// Item id (shown by `prefs list`)
        id: String,
    },

    /// Replace the text of an existing item, keeping its id
    Edit {
        #[arg(value_enum)]
        list: PreferenceList,

        /// Item id (shown by `prefs list`)
        id: String,

        /// The new text
        text: String,
    },

    /// Show all three lists
    List,
}
