use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `MenuMind`.
///
/// Each subsystem defines its own error variant. The dispatch layer matches on
/// these to decide what to show the user; internal code continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum MenuMindError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Image acquisition ────────────────────────────────────────────────
    #[error("image: {0}")]
    Image(#[from] ImageError),

    // ── Menu analysis ────────────────────────────────────────────────────
    #[error("analysis: {0}")]
    Analysis(#[from] AnalysisError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Image acquisition errors ────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("camera permission denied")]
    PermissionDenied,

    #[error("not an image (detected {0})")]
    NotAnImage(String),

    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Analysis errors ─────────────────────────────────────────────────────────

/// Failures on the analysis path. All of them are recovered at the controller
/// boundary: the user sees an alert and the captured image is retained.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no image to analyze")]
    NoImage,

    #[error("Server error: {status} - {body}")]
    Server { status: u16, body: String },

    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("No recommendations received")]
    NoRecommendations,

    #[error("failed to encode preferences payload: {0}")]
    EncodePreferences(#[from] serde_json::Error),

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}
