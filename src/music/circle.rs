// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Circle of fifths ordering and key-signature spelling.

use serde::{Deserialize, Serialize};

use super::key::Mode;
use super::pitch::{Accidental, Letter, PitchClass, SEMITONES_PER_OCTAVE};

/// Number of positions around the circle
pub const POSITIONS: usize = 12;

/// Semitones in a perfect fifth
const FIFTH: i32 = 7;

/// Last clockwise position spelled with sharps; later positions use flats
const LAST_SHARP_POSITION: usize = 5;

/// The circle of fifths for one mode, starting from the mode's natural tonic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CircleOfFifths {
    mode: Mode,
}

impl CircleOfFifths {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn mode(self) -> Mode {
        self.mode
    }

    /// Tonic with no sharps or flats in this mode (C for Major, D for
    /// Dorian ... B for Locrian)
    pub fn top_root(self) -> PitchClass {
        PitchClass::natural(Letter::ALL[self.mode.index()])
    }

    /// Sharps for the first six positions clockwise, flats for the rest
    pub fn preferred_accidental_for_position(self, position: usize) -> Accidental {
        if position % POSITIONS <= LAST_SHARP_POSITION {
            Accidental::Sharp
        } else {
            Accidental::Flat
        }
    }

    /// Tonic `position` fifths clockwise from the top
    pub fn root_at_position(self, position: usize) -> PitchClass {
        let position = position % POSITIONS;
        let steps = self.top_root().steps_from_c() + position as i32 * FIFTH;
        PitchClass::from_steps(steps, self.preferred_accidental_for_position(position))
    }

    pub fn roots(self) -> [PitchClass; POSITIONS] {
        std::array::from_fn(|position| self.root_at_position(position))
    }

    /// Position of the tonic sounding `steps_from_c` semitones above C.
    ///
    /// # Panics
    /// Never in practice: the twelve positions cover every pitch class.
    pub fn position_for_steps_from_c(self, steps_from_c: i32) -> usize {
        let target = steps_from_c.rem_euclid(SEMITONES_PER_OCTAVE);
        self.roots()
            .iter()
            .position(|root| root.position() == target)
            .unwrap_or_else(|| {
                unreachable!("circle of fifths has no root {} semitones above C", target)
            })
    }
}
