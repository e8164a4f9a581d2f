use super::{PreferenceItem, PreferenceState};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name of the single persisted preference record, the Rust rendition of
/// the mobile app's `@menumind_preferences` storage key.
const STORE_FILE: &str = "preferences.json";

/// Raw on-disk shape. An older schema stored the middle list under
/// `limitedFoods`; loading normalizes it to `dislikedFoods`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPreferences {
    #[serde(default)]
    restricted_foods: Vec<PreferenceItem>,
    #[serde(default)]
    disliked_foods: Option<Vec<PreferenceItem>>,
    #[serde(default)]
    limited_foods: Option<Vec<PreferenceItem>>,
    #[serde(default)]
    favorite_foods: Vec<PreferenceItem>,
}

/// Durable, process-independent store for the preference record.
///
/// Both operations fail soft: read or write trouble is logged and the caller
/// gets the default record (on load) or nothing (on save). A storage error
/// never interrupts the flow that triggered it.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    #[must_use]
    pub fn new(workspace_dir: &Path) -> Self {
        Self {
            path: workspace_dir.join(STORE_FILE),
        }
    }

    /// Point the store at an explicit file, for tests and tooling.
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted record. Absent record: returns the default without
    /// writing anything. Present record: parses, applies the legacy-key
    /// migration, persists the upgraded shape when the migration changed it,
    /// and returns the normalized state.
    #[must_use]
    pub fn load(&self) -> PreferenceState {
        match self.try_load() {
            Ok(state) => state,
            Err(error) => {
                warn!(path = %self.path.display(), %error, "failed to load preferences, using defaults");
                PreferenceState::default()
            }
        }
    }

    /// Serialize and overwrite the full record. Last write wins.
    pub fn save(&self, state: &PreferenceState) {
        if let Err(error) = self.try_save(state) {
            warn!(path = %self.path.display(), %error, "failed to save preferences");
        }
    }

    fn try_load(&self) -> Result<PreferenceState> {
        if !self.path.exists() {
            return Ok(PreferenceState::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let raw: StoredPreferences = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;

        let migrated = raw.disliked_foods.is_none();
        let state = PreferenceState {
            restricted_foods: raw.restricted_foods,
            disliked_foods: raw
                .disliked_foods
                .or(raw.limited_foods)
                .unwrap_or_default(),
            favorite_foods: raw.favorite_foods,
        };

        if migrated {
            debug!(path = %self.path.display(), "upgrading legacy preference schema");
            self.try_save(&state)?;
        }

        Ok(state)
    }

    fn try_save(&self, state: &PreferenceState) -> Result<()> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;

        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}
