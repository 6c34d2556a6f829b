// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes and notes.
//!
//! A [`PitchClass`] is a spelling (letter plus accidental), so `C♯` and `D♭`
//! are different pitch classes. A [`Note`] is a pitch class placed in an
//! octave, and is identified by its equal-temperament index alone, so `C♯3`
//! and `D♭3` are the same note.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};

/// MIDI note number type (0-127)
pub type MidiNote = u8;

/// Number of semitones in an octave
pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// Natural note letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in order from C
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Semitone offset of the natural note above C
    pub fn steps_from_c(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Position of this letter counting from C (C = 0, B = 6)
    pub fn index(self) -> usize {
        self as usize
    }

    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        };
        f.write_str(name)
    }
}

/// Single accidentals. Double sharps and flats are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    Flat,
    Natural,
    Sharp,
}

impl Accidental {
    /// Semitone adjustment applied to the letter
    pub fn value(self) -> i32 {
        match self {
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::Flat => "♭",
            Accidental::Natural => "♮",
            Accidental::Sharp => "♯",
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The single-accidental spellings available at one chromatic position.
#[derive(Debug, Clone, Copy)]
enum Spelling {
    Natural(Letter),
    Altered { sharp: Letter, flat: Letter },
}

/// Spellings indexed by semitones above C. Every position has either a
/// natural spelling or exactly one sharp and one flat spelling.
const SPELLINGS: [Spelling; 12] = [
    Spelling::Natural(Letter::C),
    Spelling::Altered { sharp: Letter::C, flat: Letter::D },
    Spelling::Natural(Letter::D),
    Spelling::Altered { sharp: Letter::D, flat: Letter::E },
    Spelling::Natural(Letter::E),
    Spelling::Natural(Letter::F),
    Spelling::Altered { sharp: Letter::F, flat: Letter::G },
    Spelling::Natural(Letter::G),
    Spelling::Altered { sharp: Letter::G, flat: Letter::A },
    Spelling::Natural(Letter::A),
    Spelling::Altered { sharp: Letter::A, flat: Letter::B },
    Spelling::Natural(Letter::B),
];

/// A spelled pitch class: letter plus accidental.
///
/// Equality is structural, so enharmonic spellings are distinct values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PitchClass {
    letter: Letter,
    accidental: Accidental,
}

impl PitchClass {
    pub const C: PitchClass = PitchClass::new(Letter::C, Accidental::Natural);
    pub const C_SHARP: PitchClass = PitchClass::new(Letter::C, Accidental::Sharp);
    pub const D_FLAT: PitchClass = PitchClass::new(Letter::D, Accidental::Flat);
    pub const D: PitchClass = PitchClass::new(Letter::D, Accidental::Natural);
    pub const D_SHARP: PitchClass = PitchClass::new(Letter::D, Accidental::Sharp);
    pub const E_FLAT: PitchClass = PitchClass::new(Letter::E, Accidental::Flat);
    pub const E: PitchClass = PitchClass::new(Letter::E, Accidental::Natural);
    pub const F: PitchClass = PitchClass::new(Letter::F, Accidental::Natural);
    pub const F_SHARP: PitchClass = PitchClass::new(Letter::F, Accidental::Sharp);
    pub const G_FLAT: PitchClass = PitchClass::new(Letter::G, Accidental::Flat);
    pub const G: PitchClass = PitchClass::new(Letter::G, Accidental::Natural);
    pub const G_SHARP: PitchClass = PitchClass::new(Letter::G, Accidental::Sharp);
    pub const A_FLAT: PitchClass = PitchClass::new(Letter::A, Accidental::Flat);
    pub const A: PitchClass = PitchClass::new(Letter::A, Accidental::Natural);
    pub const A_SHARP: PitchClass = PitchClass::new(Letter::A, Accidental::Sharp);
    pub const B_FLAT: PitchClass = PitchClass::new(Letter::B, Accidental::Flat);
    pub const B: PitchClass = PitchClass::new(Letter::B, Accidental::Natural);

    pub const fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    pub const fn natural(letter: Letter) -> Self {
        Self::new(letter, Accidental::Natural)
    }

    /// Resolve a chromatic position (0-11) to its canonical spelling.
    ///
    /// A natural spelling always wins over `preferred`. Positions outside
    /// 0..11 must be reduced by the caller first.
    pub fn resolve(steps_from_c: i32, preferred: Accidental) -> Result<Self> {
        if !(0..SEMITONES_PER_OCTAVE).contains(&steps_from_c) {
            return Err(TheoryError::StepsOutOfRange(steps_from_c));
        }
        Ok(Self::spell(steps_from_c as usize, preferred))
    }

    /// Spell any semitone count, reducing it modulo 12 first.
    pub(crate) fn from_steps(steps: i32, preferred: Accidental) -> Self {
        Self::spell(steps.rem_euclid(SEMITONES_PER_OCTAVE) as usize, preferred)
    }

    fn spell(position: usize, preferred: Accidental) -> Self {
        match SPELLINGS[position] {
            Spelling::Natural(letter) => Self::natural(letter),
            // A natural preference has no spelling here; sharps stand in for it.
            Spelling::Altered { flat, .. } if preferred == Accidental::Flat => {
                Self::new(flat, Accidental::Flat)
            }
            Spelling::Altered { sharp, .. } => Self::new(sharp, Accidental::Sharp),
        }
    }

    pub fn letter(self) -> Letter {
        self.letter
    }

    pub fn accidental(self) -> Accidental {
        self.accidental
    }

    /// Letter offset plus accidental. May fall outside 0..11 (`C♭` is -1).
    pub fn steps_from_c(self) -> i32 {
        self.letter.steps_from_c() + self.accidental.value()
    }

    /// Chromatic position reduced to 0..11
    pub fn position(self) -> i32 {
        self.steps_from_c().rem_euclid(SEMITONES_PER_OCTAVE)
    }

    /// Whether two spellings sound the same
    pub fn is_enharmonic_with(self, other: PitchClass) -> bool {
        self.position() == other.position()
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.accidental {
            Accidental::Natural => write!(f, "{}", self.letter),
            accidental => write!(f, "{}{}", self.letter, accidental),
        }
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    /// Parse a pitch class (e.g., "C", "c#", "Db", "F♯", "Bb")
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| TheoryError::UnknownPitchClass(s.to_string()))?;

        let accidental = match chars.as_str() {
            "" | "♮" | "n" => Accidental::Natural,
            "#" | "♯" | "s" => Accidental::Sharp,
            "b" | "♭" => Accidental::Flat,
            _ => return Err(TheoryError::UnknownPitchClass(s.to_string())),
        };

        Ok(Self::new(letter, accidental))
    }
}

/// A pitch class in a specific octave.
///
/// Equality, ordering and hashing use the equal-temperament index only.
/// Every note's index fits in an `i32`; constructors reject octaves that
/// would break this.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawNote")]
pub struct Note {
    pitch_class: PitchClass,
    octave: u32,
}

#[derive(Deserialize)]
struct RawNote {
    pitch_class: PitchClass,
    octave: u32,
}

impl TryFrom<RawNote> for Note {
    type Error = TheoryError;

    fn try_from(raw: RawNote) -> Result<Self> {
        Note::checked(raw.pitch_class, raw.octave)
            .ok_or_else(|| TheoryError::InvalidOctave(saturate(u64::from(raw.octave))))
    }
}

fn saturate(octave: u64) -> i32 {
    i32::try_from(octave).unwrap_or(i32::MAX)
}

impl Note {
    /// Frequency of C in octave 0, in Hz
    pub const ZERO_C_FREQUENCY: f64 = 16.352;

    /// Create a note, rejecting negative octaves and octaves too high for
    /// the index to fit in an `i32`
    pub fn new(pitch_class: PitchClass, octave: i32) -> Result<Self> {
        let invalid = || TheoryError::InvalidOctave(octave);
        let octave = u32::try_from(octave).map_err(|_| invalid())?;
        Self::checked(pitch_class, octave).ok_or_else(invalid)
    }

    fn checked(pitch_class: PitchClass, octave: u32) -> Option<Self> {
        i32::try_from(octave)
            .ok()
            .and_then(|octave| octave.checked_mul(SEMITONES_PER_OCTAVE))
            .and_then(|index| index.checked_add(pitch_class.steps_from_c()))
            .map(|_| Self::at(pitch_class, octave))
    }

    fn at(pitch_class: PitchClass, octave: u32) -> Self {
        Self {
            pitch_class,
            octave,
        }
    }

    /// Build a note from a semitone count above C0, spelling it with
    /// `preferred` when no natural spelling exists.
    pub fn from_equal_temperament_index(index: i32, preferred: Accidental) -> Result<Self> {
        let octave = index.div_euclid(SEMITONES_PER_OCTAVE);
        let octave = u32::try_from(octave).map_err(|_| TheoryError::InvalidOctave(octave))?;
        Ok(Self::at(PitchClass::from_steps(index, preferred), octave))
    }

    pub fn pitch_class(self) -> PitchClass {
        self.pitch_class
    }

    pub fn octave(self) -> u32 {
        self.octave
    }

    /// Semitones above C0; the sounding identity of the note. `C♭0` is -1.
    pub fn equal_temperament_index(self) -> i32 {
        self.pitch_class.steps_from_c() + self.octave as i32 * SEMITONES_PER_OCTAVE
    }

    /// Equal-temperament frequency in Hz
    pub fn frequency(self) -> f64 {
        Self::ZERO_C_FREQUENCY * 2f64.powf(self.equal_temperament_index() as f64 / 12.0)
    }

    /// MIDI note number (C0 = 12), if it fits in 0-127
    pub fn midi_number(self) -> Option<MidiNote> {
        let midi = self.equal_temperament_index() + SEMITONES_PER_OCTAVE;
        MidiNote::try_from(midi).ok().filter(|&m| m <= 127)
    }

    /// The same pitch class `octaves` octaves higher
    pub fn transpose_octaves(self, octaves: u32) -> Result<Self> {
        self.octave
            .checked_add(octaves)
            .and_then(|octave| Self::checked(self.pitch_class, octave))
            .ok_or_else(|| {
                TheoryError::InvalidOctave(saturate(u64::from(self.octave) + u64::from(octaves)))
            })
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.equal_temperament_index() == other.equal_temperament_index()
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.equal_temperament_index().hash(state);
    }
}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Note {
    fn cmp(&self, other: &Self) -> Ordering {
        self.equal_temperament_index()
            .cmp(&other.equal_temperament_index())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}
