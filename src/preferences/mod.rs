pub mod editor;
pub mod store;

pub use editor::{PreferenceEditor, ValidationError};
pub use store::PreferenceStore;

use serde::{Deserialize, Serialize};

/// A single user-entered food term. The id is opaque and stable: it survives
/// edits and only disappears when the item is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceItem {
    pub id: String,
    pub text: String,
}

impl PreferenceItem {
    #[must_use]
    pub fn matches_text(&self, text: &str) -> bool {
        self.text.trim().eq_ignore_ascii_case(text.trim())
    }
}

/// The full persisted preference record: three independent lists.
///
/// Serialized with the wire-compatible camelCase key names; within each list
/// no two items carry case-insensitive-equal trimmed text (enforced by the
/// editor on `add`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceState {
    #[serde(default)]
    pub restricted_foods: Vec<PreferenceItem>,
    #[serde(default)]
    pub disliked_foods: Vec<PreferenceItem>,
    #[serde(default)]
    pub favorite_foods: Vec<PreferenceItem>,
}

impl PreferenceState {
    #[must_use]
    pub fn list(&self, which: PreferenceList) -> &Vec<PreferenceItem> {
        match which {
            PreferenceList::Restricted => &self.restricted_foods,
            PreferenceList::Disliked => &self.disliked_foods,
            PreferenceList::Favorite => &self.favorite_foods,
        }
    }

    pub(crate) fn list_mut(&mut self, which: PreferenceList) -> &mut Vec<PreferenceItem> {
        match which {
            PreferenceList::Restricted => &mut self.restricted_foods,
            PreferenceList::Disliked => &mut self.disliked_foods,
            PreferenceList::Favorite => &mut self.favorite_foods,
        }
    }

    /// True if the id is taken anywhere in the record, not just one list.
    #[must_use]
    pub fn contains_id(&self, id: &str) -> bool {
        self.restricted_foods
            .iter()
            .chain(&self.disliked_foods)
            .chain(&self.favorite_foods)
            .any(|item| item.id == id)
    }
}

/// The three named preference lists.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum PreferenceList {
    /// Foods never to eat (allergies, restrictions).
    Restricted,
    /// Foods to avoid when possible.
    Disliked,
    /// Favorite foods and dishes.
    Favorite,
}

impl PreferenceList {
    /// Human label matching the original section titles.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Restricted => "Dietary Restrictions",
            Self::Disliked => "Foods to Avoid",
            Self::Favorite => "Foods You Love",
        }
    }
}
