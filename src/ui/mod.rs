pub mod render;
pub mod style;

pub use render::{render_analysis, render_preferences};

/// User-visible alert, the CLI stand-in for the mobile alert dialog. This is
/// the only way analysis-path failures reach the user.
pub fn alert(message: &str) {
    eprintln!("{}", style::danger(format!("⚠ {message}")));
}
