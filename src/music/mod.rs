// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory core.
//!
//! Pitch spelling, intervals, scales, the circle of fifths, keys and
//! triads. Everything here is an immutable value type.

pub mod chord;
pub mod circle;
pub mod directed;
pub mod harmony;
pub mod interval;
pub mod key;
pub mod pitch;
pub mod registry;
pub mod scale;

pub use chord::{Chord, ChordType, HarmonicFunction, Inversion};
pub use circle::CircleOfFifths;
pub use directed::{DirectedInterval, Direction};
pub use harmony::Harmony;
pub use interval::{Interval, Phrasing};
pub use key::{Key, Mode};
pub use pitch::{Accidental, Letter, MidiNote, Note, PitchClass};
pub use registry::{CustomScaleDefinition, ScaleRegistry};
pub use scale::{AbsoluteScale, Scale, ScaleDegree, ScalePosition, ScaleType};
