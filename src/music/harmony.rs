// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Unordered collections of sounding notes.

use std::collections::HashMap;

use super::pitch::Note;

/// A multiset of notes. Two harmonies are equal when they hold the same
/// notes the same number of times, regardless of order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Harmony {
    note_counts: HashMap<Note, usize>,
}

impl Harmony {
    pub fn new(notes: impl IntoIterator<Item = Note>) -> Self {
        let mut note_counts = HashMap::new();
        for note in notes {
            *note_counts.entry(note).or_insert(0) += 1;
        }
        Self { note_counts }
    }

    /// All notes, repeated by count, lowest first
    pub fn notes(&self) -> Vec<Note> {
        let mut notes: Vec<Note> = self
            .note_counts
            .iter()
            .flat_map(|(&note, &count)| std::iter::repeat(note).take(count))
            .collect();
        notes.sort();
        notes
    }

    pub fn count(&self, note: Note) -> usize {
        self.note_counts.get(&note).copied().unwrap_or(0)
    }

    /// Total number of notes, counting repeats
    pub fn len(&self) -> usize {
        self.note_counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.note_counts.is_empty()
    }
}

impl FromIterator<Note> for Harmony {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        Self::new(iter)
    }
}
