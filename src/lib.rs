// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Equal-temperament music theory: spelled pitches, intervals, diatonic
//! scales and modes, the circle of fifths, keys and triads.

pub mod config;
pub mod error;
pub mod music;

pub use error::{Result, TheoryError};
pub use music::*;
