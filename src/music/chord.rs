// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Triads and their classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::interval::Interval;
use super::pitch::PitchClass;

/// Triad qualities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordType {
    Major,
    Minor,
    Diminished,
}

impl ChordType {
    pub fn name(self) -> &'static str {
        match self {
            ChordType::Major => "Major",
            ChordType::Minor => "Minor",
            ChordType::Diminished => "Diminished",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            ChordType::Major => "Maj",
            ChordType::Minor => "Min",
            ChordType::Diminished => "Dim",
        }
    }

    /// Quality implied by the intervals from the root to the third and fifth
    pub fn classify(third: Interval, fifth: Interval) -> Option<Self> {
        match (third, fifth) {
            (Interval::MAJOR_THIRD, Interval::PERFECT_FIFTH) => Some(ChordType::Major),
            (Interval::MINOR_THIRD, Interval::PERFECT_FIFTH) => Some(ChordType::Minor),
            (Interval::MINOR_THIRD, Interval::TRITONE) => Some(ChordType::Diminished),
            _ => None,
        }
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which chord tone sits in the bass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Inversion {
    RootPosition,
    FirstInversion,
    SecondInversion,
}

impl Inversion {
    /// Number of chord tones moved above the others
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Role of a chord within a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmonicFunction {
    Tonic,
    SubDominant,
    Dominant,
}

impl HarmonicFunction {
    /// All functions, in lookup order
    pub const ALL: [HarmonicFunction; 3] = [
        HarmonicFunction::Tonic,
        HarmonicFunction::SubDominant,
        HarmonicFunction::Dominant,
    ];
}

/// A triad identified by its root and quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chord {
    root: PitchClass,
    chord_type: ChordType,
}

impl Chord {
    pub fn new(root: PitchClass, chord_type: ChordType) -> Self {
        Self { root, chord_type }
    }

    /// Classify three pitch classes as a triad. Returns `None` when the
    /// intervals above the root form no recognised triad.
    pub fn from_triad(root: PitchClass, third: PitchClass, fifth: PitchClass) -> Option<Self> {
        let third_interval = Interval::between(root, third);
        let fifth_interval = Interval::between(root, fifth);
        ChordType::classify(third_interval, fifth_interval).map(|t| Self::new(root, t))
    }

    pub fn root(self) -> PitchClass {
        self.root
    }

    pub fn chord_type(self) -> ChordType {
        self.chord_type
    }

    pub fn short_name(self) -> String {
        format!("{} {}", self.root, self.chord_type.short_name())
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.chord_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_from_triad() {
        let chord = Chord::from_triad(PitchClass::C, PitchClass::E, PitchClass::G).unwrap();
        assert_eq!(chord.chord_type(), ChordType::Major);
        assert_eq!(chord.root(), PitchClass::C);
    }

    #[test]
    fn test_minor_from_triad() {
        let chord = Chord::from_triad(PitchClass::C, PitchClass::D_SHARP, PitchClass::G).unwrap();
        assert_eq!(chord.chord_type(), ChordType::Minor);
    }

    #[test]
    fn test_diminished_from_triad() {
        let chord =
            Chord::from_triad(PitchClass::C, PitchClass::D_SHARP, PitchClass::F_SHARP).unwrap();
        assert_eq!(chord.chord_type(), ChordType::Diminished);
    }

    #[test]
    fn test_unrecognised_triad() {
        assert_eq!(Chord::from_triad(PitchClass::C, PitchClass::D, PitchClass::G), None);
        // Augmented triads are not classified
        assert_eq!(
            Chord::from_triad(PitchClass::C, PitchClass::E, PitchClass::G_SHARP),
            None
        );
    }

    #[test]
    fn test_triad_above_octave_wrap() {
        // A C E: the third and fifth wrap past C
        let chord = Chord::from_triad(PitchClass::A, PitchClass::C, PitchClass::E).unwrap();
        assert_eq!(chord, Chord::new(PitchClass::A, ChordType::Minor));
    }

    #[test]
    fn test_chord_equality_uses_spelling() {
        assert_ne!(
            Chord::new(PitchClass::C_SHARP, ChordType::Major),
            Chord::new(PitchClass::D_FLAT, ChordType::Major)
        );
    }

    #[test]
    fn test_chord_names() {
        let chord = Chord::new(PitchClass::B_FLAT, ChordType::Minor);
        assert_eq!(chord.to_string(), "B♭ Minor");
        assert_eq!(chord.short_name(), "B♭ Min");
    }
}
