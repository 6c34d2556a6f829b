// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Keys, their diatonic triads and harmonic functions.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::chord::{Chord, ChordType, HarmonicFunction};
use super::circle::CircleOfFifths;
use super::pitch::{Accidental, Note, PitchClass};
use super::scale::{Scale, ScaleDegree, ScaleType, DEGREES};
use crate::error::TheoryError;

/// The seven diatonic modes, in rotation order of the major scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Major,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Minor,
    Locrian,
}

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Major,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Minor,
        Mode::Locrian,
    ];

    /// Degree of the major scale this mode starts on
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Major => "Major",
            Mode::Dorian => "Dorian",
            Mode::Phrygian => "Phrygian",
            Mode::Lydian => "Lydian",
            Mode::Mixolydian => "Mixolydian",
            Mode::Minor => "Minor",
            Mode::Locrian => "Locrian",
        }
    }

    pub fn scale_type(self) -> ScaleType {
        match self {
            Mode::Major => ScaleType::major(),
            Mode::Dorian => ScaleType::dorian(),
            Mode::Phrygian => ScaleType::phrygian(),
            Mode::Lydian => ScaleType::lydian(),
            Mode::Mixolydian => ScaleType::mixolydian(),
            Mode::Minor => ScaleType::minor(),
            Mode::Locrian => ScaleType::locrian(),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = TheoryError;

    /// Parse a mode name (e.g., "major", "Aeolian", "natural-minor")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "major" | "ionian" => Ok(Mode::Major),
            "dorian" => Ok(Mode::Dorian),
            "phrygian" => Ok(Mode::Phrygian),
            "lydian" => Ok(Mode::Lydian),
            "mixolydian" => Ok(Mode::Mixolydian),
            "minor" | "naturalminor" | "aeolian" => Ok(Mode::Minor),
            "locrian" => Ok(Mode::Locrian),
            _ => Err(TheoryError::UnknownMode(s.to_string())),
        }
    }
}

/// A musical key: a tonic and a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    root: PitchClass,
    mode: Mode,
}

impl Key {
    pub fn new(root: PitchClass, mode: Mode) -> Self {
        Self { root, mode }
    }

    /// Parse a key from strings (e.g., "F#", "dorian")
    pub fn parse(root: &str, mode: &str) -> crate::error::Result<Self> {
        Ok(Self::new(root.parse()?, mode.parse()?))
    }

    pub fn root(self) -> PitchClass {
        self.root
    }

    pub fn mode(self) -> Mode {
        self.mode
    }

    /// Spelling preference from the root's place in the mode's circle of
    /// fifths
    pub fn preferred_accidental(self) -> Accidental {
        let circle = CircleOfFifths::new(self.mode);
        let position = circle.position_for_steps_from_c(self.root.steps_from_c());
        let accidental = circle.preferred_accidental_for_position(position);
        debug!(key = %self, position, ?accidental, "resolved key spelling");
        accidental
    }

    pub fn scale(self) -> Scale {
        Scale::new(self.root, self.mode.scale_type())
            .with_preferred_accidental(self.preferred_accidental())
    }

    pub fn note_names(self) -> [PitchClass; DEGREES] {
        self.scale().note_names()
    }

    /// The seven diatonic triads, starting on the tonic
    pub fn chords(self) -> Vec<Chord> {
        let names = self.note_names();
        (0..DEGREES)
            .map(|degree| {
                let root = names[degree];
                let third = names[(degree + 2) % DEGREES];
                let fifth = names[(degree + 4) % DEGREES];
                Chord::from_triad(root, third, fifth).unwrap_or_else(|| {
                    unreachable!("diatonic triad {} {} {} has no quality", root, third, fifth)
                })
            })
            .collect()
    }

    /// Triad on a single degree
    pub fn chord_at(self, degree: ScaleDegree) -> Chord {
        self.chords()[degree.index()]
    }

    /// The V and iii triads, primary dominant first
    pub fn dominant_chords(self) -> Vec<Chord> {
        let chords = self.chords();
        vec![chords[4], chords[2]]
    }

    /// The IV and ii triads, primary subdominant first
    pub fn sub_dominant_chords(self) -> Vec<Chord> {
        let chords = self.chords();
        vec![chords[3], chords[1]]
    }

    pub fn chords_for_function(self, function: HarmonicFunction) -> Vec<Chord> {
        match function {
            HarmonicFunction::Tonic => vec![self.chords()[0]],
            HarmonicFunction::SubDominant => self.sub_dominant_chords(),
            HarmonicFunction::Dominant => self.dominant_chords(),
        }
    }

    pub fn chords_of_type(self, chord_type: ChordType) -> Vec<Chord> {
        self.chords()
            .into_iter()
            .filter(|c| c.chord_type() == chord_type)
            .collect()
    }

    /// Function of `chord` in this key. If the chord belongs to several
    /// functions the last one in [`HarmonicFunction::ALL`] order wins.
    pub fn harmonic_function(self, chord: Chord) -> Option<HarmonicFunction> {
        HarmonicFunction::ALL
            .into_iter()
            .filter(|&function| self.chords_for_function(function).contains(&chord))
            .last()
    }

    /// Roman numeral for the triad on `degree` (e.g., "IV", "ii", "vii°")
    pub fn chord_numeral(self, degree: ScaleDegree) -> String {
        const NUMERALS: [&str; DEGREES] = ["I", "II", "III", "IV", "V", "VI", "VII"];
        let numeral = NUMERALS[degree.index()];
        match self.chord_at(degree).chord_type() {
            ChordType::Major => numeral.to_string(),
            ChordType::Minor => numeral.to_lowercase(),
            ChordType::Diminished => format!("{}°", numeral.to_lowercase()),
        }
    }

    /// Notes whose spelled pitch class belongs to this key
    pub fn filter_notes(self, notes: &HashSet<Note>) -> HashSet<Note> {
        let names = self.note_names();
        notes
            .iter()
            .filter(|note| names.contains(&note.pitch_class()))
            .copied()
            .collect()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.mode)
    }
}
