use super::{PreferenceItem, PreferenceList, PreferenceState, PreferenceStore};
use chrono::Utc;
use thiserror::Error;

/// Validation failures for `add`. These stop the mutation; nothing is
/// persisted and the in-memory state is untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter some text")]
    Empty,

    #[error("This item already exists in the list")]
    Duplicate,
}

/// In-memory CRUD over the three preference lists. Every successful mutation
/// is a single transition from one full `PreferenceState` to the next, with a
/// full-record write-back through the store as its side effect.
#[derive(Debug)]
pub struct PreferenceEditor {
    store: PreferenceStore,
    state: PreferenceState,
}

impl PreferenceEditor {
    /// Load the current record once, at screen activation.
    #[must_use]
    pub fn load(store: PreferenceStore) -> Self {
        let state = store.load();
        Self { store, state }
    }

    #[must_use]
    pub fn state(&self) -> &PreferenceState {
        &self.state
    }

    /// Append a new item with a fresh id and the trimmed text.
    ///
    /// Rejects empty-after-trim input and case-insensitive duplicates within
    /// the target list.
    pub fn add(&mut self, list: PreferenceList, text: &str) -> Result<PreferenceItem, ValidationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        if self.state.list(list).iter().any(|item| item.matches_text(trimmed)) {
            return Err(ValidationError::Duplicate);
        }

        let item = PreferenceItem {
            id: self.next_id(),
            text: trimmed.to_string(),
        };
        self.state.list_mut(list).push(item.clone());
        self.store.save(&self.state);

        Ok(item)
    }

    /// Delete the item with the matching id. An absent id is a no-op, not an
    /// error; the record is persisted either way.
    pub fn remove(&mut self, list: PreferenceList, id: &str) {
        self.state.list_mut(list).retain(|item| item.id != id);
        self.store.save(&self.state);
    }

    /// Replace the text of an existing item, preserving its id. Returns false
    /// when the id is not in the target list.
    ///
    /// Note: unlike `add`, no duplicate check is performed here; edits can
    /// produce duplicate text. Kept as observed in the original behavior.
    pub fn edit(&mut self, list: PreferenceList, id: &str, new_text: &str) -> bool {
        let Some(item) = self.state.list_mut(list).iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.text = new_text.trim().to_string();
        self.store.save(&self.state);
        true
    }

    /// Millisecond creation timestamp, bumped past any id already in the
    /// record so rapid consecutive adds never collide.
    fn next_id(&self) -> String {
        let mut candidate = Utc::now().timestamp_millis();
        while self.state.contains_id(&candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn editor(dir: &tempfile::TempDir) -> PreferenceEditor {
        PreferenceEditor::load(PreferenceStore::new(dir.path()))
    }

    #[test]
    fn add_trims_and_persists() {
        let dir = tempdir().unwrap();
        let mut editor = editor(&dir);

        let item = editor.add(PreferenceList::Favorite, "  pad thai  ").unwrap();
        assert_eq!(item.text, "pad thai");

        let reloaded = PreferenceStore::new(dir.path()).load();
        assert_eq!(reloaded.favorite_foods.len(), 1);
        assert_eq!(reloaded.favorite_foods[0].text, "pad thai");
    }

    #[test]
    fn add_rejects_empty_and_whitespace_without_persisting() {
        let dir = tempdir().unwrap();
        let mut editor = editor(&dir);

        assert_eq!(editor.add(PreferenceList::Disliked, ""), Err(ValidationError::Empty));
        assert_eq!(editor.add(PreferenceList::Disliked, "   "), Err(ValidationError::Empty));
        assert!(editor.state().disliked_foods.is_empty());
        assert!(!dir.path().join("preferences.json").exists());
    }

    #[test]
    fn add_rejects_case_insensitive_duplicates() {
        let dir = tempdir().unwrap();
        let mut editor = editor(&dir);

        editor.add(PreferenceList::Restricted, "Peanuts").unwrap();
        assert_eq!(
            editor.add(PreferenceList::Restricted, "  peanuts "),
            Err(ValidationError::Duplicate)
        );
        assert_eq!(editor.state().restricted_foods.len(), 1);
    }

    #[test]
    fn same_text_allowed_across_lists() {
        let dir = tempdir().unwrap();
        let mut editor = editor(&dir);

        editor.add(PreferenceList::Disliked, "mushrooms").unwrap();
        assert!(editor.add(PreferenceList::Favorite, "mushrooms").is_ok());
    }

    #[test]
    fn duplicate_never_appears_under_any_add_sequence() {
        let dir = tempdir().unwrap();
        let mut editor = editor(&dir);

        for text in ["kale", "Kale", " kale ", "KALE", "chard", "kale"] {
            let _ = editor.add(PreferenceList::Disliked, text);
        }

        let list = &editor.state().disliked_foods;
        for (i, a) in list.iter().enumerate() {
            for b in &list[i + 1..] {
                assert!(!a.matches_text(&b.text), "{:?} duplicates {:?}", a, b);
            }
        }
    }

    #[test]
    fn remove_deletes_by_id_and_ignores_unknown_ids() {
        let dir = tempdir().unwrap();
        let mut editor = editor(&dir);
        let id = editor.add(PreferenceList::Favorite, "ramen").unwrap().id.clone();

        editor.remove(PreferenceList::Favorite, "no-such-id");
        assert_eq!(editor.state().favorite_foods.len(), 1);

        editor.remove(PreferenceList::Favorite, &id);
        assert!(editor.state().favorite_foods.is_empty());
        assert!(PreferenceStore::new(dir.path()).load().favorite_foods.is_empty());
    }

    #[test]
    fn edit_changes_text_only_preserves_id_and_persists() {
        let dir = tempdir().unwrap();
        let mut editor = editor(&dir);
        let id = editor.add(PreferenceList::Favorite, "OldName").unwrap().id.clone();

        assert!(editor.edit(PreferenceList::Favorite, &id, "  NewName  "));

        let reloaded = PreferenceStore::new(dir.path()).load();
        assert_eq!(reloaded.favorite_foods.len(), 1);
        assert_eq!(reloaded.favorite_foods[0].id, id);
        assert_eq!(reloaded.favorite_foods[0].text, "NewName");
    }

    #[test]
    fn edit_unknown_id_returns_false() {
        let dir = tempdir().unwrap();
        let mut editor = editor(&dir);
        assert!(!editor.edit(PreferenceList::Restricted, "missing", "anything"));
    }

    #[test]
    fn edit_does_not_check_duplicates() {
        let dir = tempdir().unwrap();
        let mut editor = editor(&dir);
        editor.add(PreferenceList::Favorite, "sushi").unwrap();
        let id = editor.add(PreferenceList::Favorite, "tacos").unwrap().id.clone();

        assert!(editor.edit(PreferenceList::Favorite, &id, "sushi"));
        assert_eq!(editor.state().favorite_foods[1].text, "sushi");
    }

    #[test]
    fn rapid_adds_get_unique_ids() {
        let dir = tempdir().unwrap();
        let mut editor = editor(&dir);
        for text in ["a", "b", "c", "d"] {
            editor.add(PreferenceList::Favorite, text).unwrap();
        }
        let mut ids: Vec<_> = editor.state().favorite_foods.iter().map(|i| i.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }
}
