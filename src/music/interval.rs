// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Undirected intervals measured in semitones.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::directed::Direction;
use super::pitch::{PitchClass, SEMITONES_PER_OCTAVE};

const NAMES: [&str; 26] = [
    "Perfect Unison",
    "Minor Second",
    "Major Second",
    "Minor Third",
    "Major Third",
    "Perfect Fourth",
    "Tritone",
    "Perfect Fifth",
    "Minor Sixth",
    "Major Sixth",
    "Minor Seventh",
    "Major Seventh",
    "Perfect Octave",
    "Minor Ninth",
    "Major Ninth",
    "Minor Tenth",
    "Major Tenth",
    "Perfect Eleventh",
    "Diminished Twelfth",
    "Perfect Twelfth",
    "Minor Thirteenth",
    "Major Thirteenth",
    "Minor Fourteenth",
    "Major Fourteenth",
    "Perfect Fifteenth",
    "Augmented Fifteenth",
];

const SHORT_NAMES: [&str; 26] = [
    "P0", "m2", "M2", "m3", "M3", "P4", "TT", "P5", "m6", "M6", "m7", "M7", "P8", "m9", "M9",
    "m10", "M10", "P11", "d12", "P12", "m13", "M13", "m14", "M14", "P15", "A15",
];

/// Distance between two pitches in semitones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Interval {
    size: u32,
}

impl Interval {
    pub const PERFECT_UNISON: Interval = Interval::new(0);
    pub const MINOR_SECOND: Interval = Interval::new(1);
    pub const MAJOR_SECOND: Interval = Interval::new(2);
    pub const MINOR_THIRD: Interval = Interval::new(3);
    pub const MAJOR_THIRD: Interval = Interval::new(4);
    pub const PERFECT_FOURTH: Interval = Interval::new(5);
    pub const TRITONE: Interval = Interval::new(6);
    pub const PERFECT_FIFTH: Interval = Interval::new(7);
    pub const MINOR_SIXTH: Interval = Interval::new(8);
    pub const MAJOR_SIXTH: Interval = Interval::new(9);
    pub const MINOR_SEVENTH: Interval = Interval::new(10);
    pub const MAJOR_SEVENTH: Interval = Interval::new(11);
    pub const PERFECT_OCTAVE: Interval = Interval::new(12);
    pub const MINOR_NINTH: Interval = Interval::new(13);
    pub const MAJOR_NINTH: Interval = Interval::new(14);
    pub const MINOR_TENTH: Interval = Interval::new(15);
    pub const MAJOR_TENTH: Interval = Interval::new(16);
    pub const PERFECT_ELEVENTH: Interval = Interval::new(17);
    pub const DIMINISHED_TWELFTH: Interval = Interval::new(18);
    pub const PERFECT_TWELFTH: Interval = Interval::new(19);
    pub const MINOR_THIRTEENTH: Interval = Interval::new(20);
    pub const MAJOR_THIRTEENTH: Interval = Interval::new(21);
    pub const MINOR_FOURTEENTH: Interval = Interval::new(22);
    pub const MAJOR_FOURTEENTH: Interval = Interval::new(23);
    pub const PERFECT_FIFTEENTH: Interval = Interval::new(24);
    pub const AUGMENTED_FIFTEENTH: Interval = Interval::new(25);

    pub const DIMINISHED_FIFTH: Interval = Interval::TRITONE;
    pub const AUGMENTED_FOURTH: Interval = Interval::TRITONE;

    pub const fn new(size: u32) -> Self {
        Self { size }
    }

    /// Semitone count
    pub fn size(self) -> u32 {
        self.size
    }

    /// Ascending distance from `lower` to the closest occurrence of `higher`
    /// above it. Always within 0..11, so `between(D, C)` is a minor seventh.
    pub fn between(lower: PitchClass, higher_closest: PitchClass) -> Self {
        let steps = (higher_closest.steps_from_c() - lower.steps_from_c())
            .rem_euclid(SEMITONES_PER_OCTAVE);
        Self::new(steps as u32)
    }

    pub fn successor(self) -> Self {
        Self::new(self.size + 1)
    }

    /// Abbreviated name ("m3", "P5"). Sizes past 25 have no abbreviation and
    /// read the same as their long name.
    pub fn short_name(self) -> String {
        match SHORT_NAMES.get(self.size as usize) {
            Some(name) => name.to_string(),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match NAMES.get(self.size as usize) {
            Some(name) => f.write_str(name),
            None => write!(f, "{} semitones", self.size),
        }
    }
}

/// How an interval is sounded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phrasing {
    /// One pitch after the other, in any of the given directions
    Melodic(HashSet<Direction>),
    /// Both pitches together
    Harmonic,
}

impl fmt::Display for Phrasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phrasing::Melodic(directions) => {
                let names: Vec<String> = Direction::ALL
                    .iter()
                    .filter(|d| directions.contains(*d))
                    .map(|d| d.to_string())
                    .collect();
                write!(f, "Melodic {}", names.join(" and "))
            }
            Phrasing::Harmonic => f.write_str("Harmonic"),
        }
    }
}
