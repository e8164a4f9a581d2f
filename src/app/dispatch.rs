use crate::analysis::AnalysisClient;
use crate::cli::{Cli, Commands, PrefsCommands};
use crate::config::Config;
use crate::error::{ImageError, MenuMindError};
use crate::preferences::{PreferenceEditor, PreferenceStore};
use crate::scanner::{FilePicker, ScanController, ScanState};
use crate::ui;
use anyhow::Result;
use dialoguer::Select;
use std::path::PathBuf;
use tracing::info;

use crate::app::status::render_status;

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Scan {
            image,
            library,
            api_url,
        } => run_scan(&config, image, library, api_url).await,
        Commands::Prefs { prefs_command } => run_prefs(&config, prefs_command),
        Commands::Status => {
            render_status(&config);
            Ok(())
        }
    }
}

// ─── Scan session ────────────────────────────────────────────────────────────

async fn run_scan(
    config: &Config,
    image: Option<PathBuf>,
    library: bool,
    api_url: Option<String>,
) -> Result<()> {
    let base_url = api_url.unwrap_or_else(|| config.api_base_url());
    info!(%base_url, "starting scan session");

    let mut controller = ScanController::new(
        Box::new(FilePicker::new(image)),
        PreferenceStore::new(&config.workspace_dir),
        AnalysisClient::new(&base_url),
    );

    controller.begin_scan();
    let acquired = if library {
        controller.pick_image().await
    } else {
        controller.capture_image().await
    };
    if let Err(error) = acquired {
        show_alert(&error);
        return Ok(());
    }

    if controller.state() == ScanState::CameraChoice {
        // No image supplied: the CLI equivalent of backing out of the camera.
        println!("No menu image. Pass a path: menumind scan <image>");
        return Ok(());
    }

    render_current(&controller);

    // The mobile result screen offers regenerate and new-scan; offer the same
    // follow-ups when someone is actually at the terminal.
    while controller.state() == ScanState::Result && console::user_attended() {
        let choice = Select::new()
            .with_prompt("Next")
            .items(&["Regenerate options", "Scan another menu", "Quit"])
            .default(2)
            .interact()?;
        match choice {
            0 => {
                if let Err(error) = controller.regenerate().await {
                    show_alert(&error);
                }
                render_current(&controller);
            }
            1 => {
                controller.new_scan();
                println!("Run `menumind scan <image>` with the next menu photo.");
            }
            _ => break,
        }
    }

    Ok(())
}

fn render_current(controller: &ScanController) {
    if let Some(analysis) = controller.analysis() {
        ui::render_analysis(analysis);
    }
}

/// Map a scan failure to its user-visible alert. Nothing propagates past
/// here; the session simply ends with the message on screen.
fn show_alert(error: &MenuMindError) {
    match error {
        MenuMindError::Image(ImageError::PermissionDenied) => {
            ui::alert("You need to enable camera permissions to take a photo!");
        }
        MenuMindError::Image(image_error) => {
            ui::alert(&image_error.to_string());
        }
        MenuMindError::Analysis(analysis_error) => {
            ui::alert(&format!("Failed to analyze menu: {analysis_error}"));
        }
        other => ui::alert(&other.to_string()),
    }
}

// ─── Preference editing ──────────────────────────────────────────────────────

fn run_prefs(config: &Config, command: PrefsCommands) -> Result<()> {
    let store = PreferenceStore::new(&config.workspace_dir);
    let mut editor = PreferenceEditor::load(store);

    match command {
        PrefsCommands::Add { list, text } => match editor.add(list, &text) {
            Ok(item) => println!(
                "Added {} to {} (id {})",
                ui::style::value(&item.text),
                list.title(),
                ui::style::dim(&item.id),
            ),
            Err(validation) => ui::alert(&validation.to_string()),
        },
        PrefsCommands::Remove { list, id } => {
            editor.remove(list, &id);
            println!("Removed {id} from {} (if it was there)", list.title());
        }
        PrefsCommands::Edit { list, id, text } => {
            if editor.edit(list, &id, &text) {
                println!("Updated {id} in {}", list.title());
            } else {
                ui::alert(&format!("No item with id {id} in {}", list.title()));
            }
        }
        PrefsCommands::List => ui::render_preferences(editor.state()),
    }

    Ok(())
}
