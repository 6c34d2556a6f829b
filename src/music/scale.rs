// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale types, scale positions and concrete scales.
//!
//! A [`ScaleType`] is a seven-note step pattern. A [`Scale`] places that
//! pattern on a root with a spelling preference, and an [`AbsoluteScale`]
//! is the scale evaluated at one octave.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::chord::Inversion;
use super::directed::DirectedInterval;
use super::interval::Interval;
use super::pitch::{Accidental, Note, PitchClass, SEMITONES_PER_OCTAVE};
use crate::error::{Result, TheoryError};

/// Number of degrees in a diatonic scale
pub const DEGREES: usize = 7;

/// Semitone offsets of the major scale; every diatonic mode is a rotation of it
const DIATONIC_STEPS: [i32; DEGREES] = [0, 2, 4, 5, 7, 9, 11];

/// Step pattern rooted at `mode_index` of the major scale, re-based to 0.
pub fn diatonic_steps(mode_index: usize) -> [i32; DEGREES] {
    let root_step = DIATONIC_STEPS[mode_index % DEGREES];
    std::array::from_fn(|step| {
        let from_root = DIATONIC_STEPS[(step + mode_index) % DEGREES] - root_step;
        if from_root < 0 {
            from_root + SEMITONES_PER_OCTAVE
        } else {
            from_root
        }
    })
}

/// A labelled seven-note step pattern (semitones from the root)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaleType {
    label: String,
    steps: [i32; DEGREES],
}

impl ScaleType {
    /// Diatonic mode starting on the given degree of the major scale
    /// (0 = Major ... 6 = Locrian)
    pub fn diatonic(mode_index: usize, label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            steps: diatonic_steps(mode_index),
        }
    }

    /// A user-defined pattern. Steps must start at 0, rise strictly and stay
    /// within one octave.
    pub fn custom(label: impl Into<String>, steps: [i32; DEGREES]) -> Result<Self> {
        let label = label.into();
        let invalid = |reason: &str| TheoryError::InvalidScaleSteps {
            name: label.clone(),
            reason: reason.to_string(),
        };

        if steps[0] != 0 {
            return Err(invalid("first step must be 0"));
        }
        if steps.windows(2).any(|w| w[0] >= w[1]) {
            return Err(invalid("steps must be strictly ascending"));
        }
        if steps[DEGREES - 1] >= SEMITONES_PER_OCTAVE {
            return Err(invalid("steps must be below 12"));
        }

        Ok(Self { label, steps })
    }

    pub fn major() -> Self {
        Self::diatonic(0, "Major")
    }

    pub fn dorian() -> Self {
        Self::diatonic(1, "Dorian")
    }

    pub fn phrygian() -> Self {
        Self::diatonic(2, "Phrygian")
    }

    pub fn lydian() -> Self {
        Self::diatonic(3, "Lydian")
    }

    pub fn mixolydian() -> Self {
        Self::diatonic(4, "Mixolydian")
    }

    pub fn minor() -> Self {
        Self::diatonic(5, "Minor")
    }

    pub fn locrian() -> Self {
        Self::diatonic(6, "Locrian")
    }

    pub fn ionian() -> Self {
        Self::major()
    }

    pub fn aeolian() -> Self {
        Self::minor()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Semitone offsets from the root, starting with 0
    pub fn steps(&self) -> &[i32; DEGREES] {
        &self.steps
    }

    /// Intervals from the root to degrees 2 through 7
    pub fn intervals_from_root(&self) -> Vec<Interval> {
        self.steps[1..]
            .iter()
            .map(|&s| Interval::new(s as u32))
            .collect()
    }

    /// Every degree as an upward step from the root (unison for the root)
    pub fn melodic_intervals(&self) -> Vec<DirectedInterval> {
        self.steps
            .iter()
            .map(|&s| DirectedInterval::from_steps(s))
            .collect()
    }

    /// Interval from the root to `position`, or `None` if it is too wide
    /// to count in a `u32`
    pub fn interval_for_scale_position(&self, position: ScalePosition) -> Option<Interval> {
        let steps = self.steps[position.degree().index()] as u32;
        position
            .octave()
            .checked_mul(SEMITONES_PER_OCTAVE as u32)
            .and_then(|octaves| octaves.checked_add(steps))
            .map(Interval::new)
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Zero-based degree within one octave of a scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScaleDegree {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
}

impl ScaleDegree {
    pub const ALL: [ScaleDegree; DEGREES] = [
        ScaleDegree::First,
        ScaleDegree::Second,
        ScaleDegree::Third,
        ScaleDegree::Fourth,
        ScaleDegree::Fifth,
        ScaleDegree::Sixth,
        ScaleDegree::Seventh,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next degree, wrapping from the seventh back to the first
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % DEGREES]
    }
}

impl fmt::Display for ScaleDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScaleDegree::First => "Root",
            ScaleDegree::Second => "2nd",
            ScaleDegree::Third => "3rd",
            ScaleDegree::Fourth => "4th",
            ScaleDegree::Fifth => "5th",
            ScaleDegree::Sixth => "6th",
            ScaleDegree::Seventh => "7th",
        };
        f.write_str(name)
    }
}

/// A degree in a given octave of a scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScalePosition {
    degree: ScaleDegree,
    octave: u32,
}

impl ScalePosition {
    pub fn new(degree: ScaleDegree, octave: u32) -> Self {
        Self { degree, octave }
    }

    pub fn degree(self) -> ScaleDegree {
        self.degree
    }

    pub fn octave(self) -> u32 {
        self.octave
    }

    /// Degrees counted from the first degree of octave 0
    pub fn absolute_position(self) -> u64 {
        self.degree.index() as u64 + u64::from(self.octave) * DEGREES as u64
    }

    /// Next position; the octave advances when wrapping to the first degree.
    /// `None` past the seventh degree of the last octave.
    pub fn successor(self) -> Option<Self> {
        let degree = self.degree.next();
        let octave = if degree == ScaleDegree::First {
            self.octave.checked_add(1)?
        } else {
            self.octave
        };
        Some(Self::new(degree, octave))
    }

    /// Positions from `start` to `end`, both included
    pub fn range_inclusive(start: Self, end: Self) -> impl Iterator<Item = Self> {
        std::iter::successors(Some(start), |p| p.successor()).take_while(move |p| *p <= end)
    }

    /// Positions from `start` up to but excluding `end`
    pub fn range(start: Self, end: Self) -> impl Iterator<Item = Self> {
        std::iter::successors(Some(start), |p| p.successor()).take_while(move |p| *p < end)
    }
}

impl PartialOrd for ScalePosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScalePosition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.absolute_position().cmp(&other.absolute_position())
    }
}

impl fmt::Display for ScalePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.degree, self.octave) {
            (degree, 0) => write!(f, "{}", degree),
            (ScaleDegree::First, 1) => write!(f, "8th"),
            (degree, octave) => write!(f, "{} (+{} Octave)", degree, octave),
        }
    }
}

/// A scale type placed on a root, with a spelling preference for
/// accidentals
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scale {
    root: PitchClass,
    scale_type: ScaleType,
    preferred_accidental: Accidental,
}

impl Scale {
    /// Create a scale that spells accidentals as sharps
    pub fn new(root: PitchClass, scale_type: ScaleType) -> Self {
        Self {
            root,
            scale_type,
            preferred_accidental: Accidental::Sharp,
        }
    }

    pub fn with_preferred_accidental(mut self, accidental: Accidental) -> Self {
        self.preferred_accidental = accidental;
        self
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn scale_type(&self) -> &ScaleType {
        &self.scale_type
    }

    pub fn preferred_accidental(&self) -> Accidental {
        self.preferred_accidental
    }

    /// The scale's notes starting from the root in `octave`.
    ///
    /// Notes are respelled from their index, so a root below C in its own
    /// octave fails at octave 0: `C♭` at octave 0 has index -1 and returns
    /// [`TheoryError::InvalidOctave`] even though `Note::new(C♭, 0)` succeeds.
    pub fn absolute_scale(&self, octave: i32) -> Result<AbsoluteScale> {
        let root_index = Note::new(self.root, octave)?.equal_temperament_index();
        let mut notes = Vec::with_capacity(DEGREES);
        for &step in &self.scale_type.steps {
            let index = root_index
                .checked_add(step)
                .ok_or(TheoryError::InvalidOctave(octave))?;
            notes.push(Note::from_equal_temperament_index(
                index,
                self.preferred_accidental,
            )?);
        }
        Ok(AbsoluteScale::new(notes))
    }

    /// Spelled pitch classes of the scale, root first
    pub fn note_names(&self) -> [PitchClass; DEGREES] {
        let root = self.root.steps_from_c();
        self.scale_type
            .steps
            .map(|step| PitchClass::from_steps(root + step, self.preferred_accidental))
    }

    pub fn contains(&self, pitch_class: PitchClass) -> bool {
        self.note_names().contains(&pitch_class)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.scale_type)
    }
}

/// The seven notes of a scale in one octave
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsoluteScale {
    notes: Vec<Note>,
}

impl AbsoluteScale {
    fn new(notes: Vec<Note>) -> Self {
        debug_assert_eq!(notes.len(), DEGREES);
        Self { notes }
    }

    pub fn root(&self) -> Note {
        self.notes[0]
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Note at a degree, raised by the position's octave
    pub fn note_at_scale_position(&self, position: ScalePosition) -> Result<Note> {
        self.notes[position.degree().index()].transpose_octaves(position.octave())
    }

    /// Root, third and fifth stacked on `degree`, crossing into the next
    /// octave where needed
    pub fn triad_at_scale_degree(&self, degree: ScaleDegree) -> Result<[Note; 3]> {
        let above_root = |degrees: usize| {
            let index = degree.index() + degrees;
            ScalePosition::new(ScaleDegree::ALL[index % DEGREES], (index / DEGREES) as u32)
        };
        Ok([
            self.note_at_scale_position(above_root(0))?,
            self.note_at_scale_position(above_root(2))?,
            self.note_at_scale_position(above_root(4))?,
        ])
    }

    /// Triad on `degree` with its lowest notes moved up an octave
    pub fn inverted_triad_at_scale_degree(
        &self,
        degree: ScaleDegree,
        inversion: Inversion,
    ) -> Result<[Note; 3]> {
        let mut triad = self.triad_at_scale_degree(degree)?;
        for note in triad.iter_mut().take(inversion.index()) {
            *note = note.transpose_octaves(1)?;
        }
        triad.sort();
        Ok(triad)
    }
}
