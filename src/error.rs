// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for diatonic

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("Octave {0} is out of range")]
    InvalidOctave(i32),
    #[error("Steps from C must be in [0, 11], got {0}")]
    StepsOutOfRange(i32),
    #[error("Unknown pitch class: {0:?}")]
    UnknownPitchClass(String),
    #[error("Unknown mode: {0:?}")]
    UnknownMode(String),
    #[error("Unknown scale: {0:?}")]
    UnknownScale(String),
    #[error("Invalid steps for scale {name:?}: {reason}")]
    InvalidScaleSteps { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, TheoryError>;
