use crate::preferences::{PreferenceItem, PreferenceState};
use serde::{Deserialize, Serialize};

// ─── Response shapes (owned by the remote service) ──────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedDish {
    pub name: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotRecommendedDish {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherOption {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A validated analysis result. Transient: held for the current scan session
/// only and discarded on regenerate or new scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuAnalysis {
    pub recommendations: Vec<RecommendedDish>,
    pub not_recommended: Vec<NotRecommendedDish>,
    pub other_options: Vec<OtherOption>,
}

// ─── Request payload ─────────────────────────────────────────────────────────

/// The preference payload as the service expects it. The wire contract names
/// the first list `neverFoods` even though it is stored locally as
/// `restrictedFoods`; the rename happens here, at the boundary, and nowhere
/// else.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePreferences {
    pub never_foods: Vec<PreferenceItem>,
    pub disliked_foods: Vec<PreferenceItem>,
    pub favorite_foods: Vec<PreferenceItem>,
}

impl From<&PreferenceState> for WirePreferences {
    fn from(state: &PreferenceState) -> Self {
        Self {
            never_foods: state.restricted_foods.clone(),
            disliked_foods: state.disliked_foods.clone(),
            favorite_foods: state.favorite_foods.clone(),
        }
    }
}
