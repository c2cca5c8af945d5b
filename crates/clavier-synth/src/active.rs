//! The set of currently held keys.

use crate::error::Result;
use crate::note::{Note, NoteTable};
use std::collections::BTreeSet;

/// Notes currently held on the keyboard.
///
/// Owned by whoever dispatches key events. The synthesis pipeline only ever
/// sees a shared reference, so each chord is computed from a stable snapshot.
/// Iteration runs from the lowest to the highest note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveNoteSet {
    notes: BTreeSet<Note>,
}

impl ActiveNoteSet {
    /// Create an empty set (silence).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse identifiers into a set, failing on the first unknown one.
    pub fn from_ids<I, S>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let notes = ids
            .into_iter()
            .map(|id| id.as_ref().parse())
            .collect::<Result<BTreeSet<Note>>>()?;
        Ok(Self { notes })
    }

    /// Mark a note as held. Returns `false` if it already was.
    pub fn press(&mut self, note: Note) -> bool {
        self.notes.insert(note)
    }

    /// Mark a note as released. Returns `false` if it was not held.
    pub fn release(&mut self, note: Note) -> bool {
        self.notes.remove(&note)
    }

    /// Press the note if it is up, release it if it is held.
    ///
    /// Returns `true` when the note is held afterwards.
    pub fn toggle(&mut self, note: Note) -> bool {
        if self.notes.remove(&note) {
            false
        } else {
            self.notes.insert(note);
            true
        }
    }

    /// Whether the note is held.
    pub fn contains(&self, note: Note) -> bool {
        self.notes.contains(&note)
    }

    /// Release every note.
    pub fn clear(&mut self) {
        self.notes.clear();
    }

    /// Number of held notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether no note is held.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Held notes from lowest to highest.
    pub fn iter(&self) -> impl Iterator<Item = Note> + '_ {
        self.notes.iter().copied()
    }

    /// Fundamental frequencies of the held notes, lowest first.
    pub fn frequencies(&self, table: &NoteTable) -> Vec<f64> {
        self.notes.iter().map(|&n| table.frequency(n)).collect()
    }
}

impl FromIterator<Note> for ActiveNoteSet {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        Self {
            notes: iter.into_iter().collect(),
        }
    }
}

impl Extend<Note> for ActiveNoteSet {
    fn extend<I: IntoIterator<Item = Note>>(&mut self, iter: I) {
        self.notes.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SynthError;

    fn note(id: &str) -> Note {
        id.parse().unwrap()
    }

    #[test]
    fn press_is_idempotent() {
        let mut set = ActiveNoteSet::new();
        assert!(set.press(note("C4")));
        assert!(!set.press(note("C4")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn toggle_presses_then_releases() {
        let mut set = ActiveNoteSet::new();
        assert!(set.toggle(note("E4")));
        assert!(set.contains(note("E4")));
        assert!(!set.toggle(note("E4")));
        assert!(set.is_empty());
    }

    #[test]
    fn release_reports_missing() {
        let mut set = ActiveNoteSet::new();
        assert!(!set.release(note("G4")));
    }

    #[test]
    fn from_ids_deduplicates_and_sorts() {
        let set = ActiveNoteSet::from_ids(["G4", "C4", "E4", "C4"]).unwrap();
        let spelled: Vec<String> = set.iter().map(|n| n.to_string()).collect();
        assert_eq!(spelled, ["C4", "E4", "G4"]);
    }

    #[test]
    fn from_ids_rejects_unknown() {
        let err = ActiveNoteSet::from_ids(["C4", "H4"]).unwrap_err();
        assert_eq!(err, SynthError::UnknownNote("H4".to_string()));
    }

    #[test]
    fn frequencies_follow_table() {
        let set = ActiveNoteSet::from_ids(["A4", "C4"]).unwrap();
        assert_eq!(set.frequencies(NoteTable::standard()), vec![261.63, 440.0]);
    }

    #[test]
    fn snapshot_is_independent() {
        let mut live = ActiveNoteSet::from_ids(["A4"]).unwrap();
        let snapshot = live.clone();
        live.clear();
        assert_eq!(snapshot.len(), 1);
        assert!(live.is_empty());
    }
}
