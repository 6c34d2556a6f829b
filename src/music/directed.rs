// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Melodic (directed) intervals.
//!
//! A [`DirectedInterval`] is a signed semitone count. Consecutive step
//! counts form a successor chain, so ranges of directed intervals can be
//! enumerated across zero.

use std::collections::HashSet;
use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use super::interval::Interval;

/// Melodic direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Ascending,
    Descending,
    /// No motion (unison)
    Flat,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Ascending, Direction::Descending, Direction::Flat];

    /// Sign applied to an interval size
    pub fn sign(self) -> i32 {
        match self {
            Direction::Ascending => 1,
            Direction::Descending => -1,
            Direction::Flat => 0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => write!(f, "Ascending"),
            Direction::Descending => write!(f, "Descending"),
            Direction::Flat => write!(f, "Flat"),
        }
    }
}

/// Signed interval: positive steps ascend, negative steps descend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DirectedInterval {
    steps: i32,
}

impl DirectedInterval {
    pub const UNISON: DirectedInterval = DirectedInterval::from_steps(0);

    pub const fn from_steps(steps: i32) -> Self {
        Self { steps }
    }

    /// Combine a size and a direction. A flat direction always yields unison.
    pub fn new(interval: Interval, direction: Direction) -> Self {
        Self::from_steps(interval.size() as i32 * direction.sign())
    }

    pub fn steps(self) -> i32 {
        self.steps
    }

    pub fn interval(self) -> Interval {
        Interval::new(self.steps.unsigned_abs())
    }

    pub fn direction(self) -> Direction {
        match self.steps {
            s if s > 0 => Direction::Ascending,
            s if s < 0 => Direction::Descending,
            _ => Direction::Flat,
        }
    }

    pub fn successor(self) -> Self {
        Self::from_steps(self.steps + 1)
    }

    /// Every combination of the given intervals and directions.
    ///
    /// Unison carries no direction, so it appears once (as flat) when either
    /// the intervals include unison or the directions include flat.
    pub fn all(intervals: &HashSet<Interval>, directions: &HashSet<Direction>) -> HashSet<Self> {
        let mut all: HashSet<Self> = directions
            .iter()
            .filter(|&&d| d != Direction::Flat)
            .flat_map(|&direction| {
                intervals
                    .iter()
                    .filter(|&&i| i != Interval::PERFECT_UNISON)
                    .map(move |&interval| Self::new(interval, direction))
            })
            .collect();

        if intervals.contains(&Interval::PERFECT_UNISON) || directions.contains(&Direction::Flat) {
            all.insert(Self::UNISON);
        }

        all
    }

    /// All directed intervals from `start` to `end`, both included
    pub fn range_inclusive(start: Self, end: Self) -> impl Iterator<Item = Self> {
        (start.steps..=end.steps).map(Self::from_steps)
    }

    /// All directed intervals from `start` up to but excluding `end`
    pub fn range(start: Self, end: Self) -> impl Iterator<Item = Self> {
        (start.steps..end.steps).map(Self::from_steps)
    }
}

impl Add for DirectedInterval {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_steps(self.steps + rhs.steps)
    }
}

impl Sub for DirectedInterval {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_steps(self.steps - rhs.steps)
    }
}

impl fmt::Display for DirectedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.interval(), self.direction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set<T: std::hash::Hash + Eq, const N: usize>(items: [T; N]) -> HashSet<T> {
        items.into_iter().collect()
    }

    #[test]
    fn test_from_steps() {
        let up = DirectedInterval::from_steps(2);
        assert_eq!(up.interval(), Interval::MAJOR_SECOND);
        assert_eq!(up.direction(), Direction::Ascending);

        let down = DirectedInterval::from_steps(-2);
        assert_eq!(down.interval(), Interval::MAJOR_SECOND);
        assert_eq!(down.direction(), Direction::Descending);

        let flat = DirectedInterval::from_steps(0);
        assert_eq!(flat.interval(), Interval::PERFECT_UNISON);
        assert_eq!(flat.direction(), Direction::Flat);
    }

    #[test]
    fn test_all_upwards() {
        let all = DirectedInterval::all(
            &set([Interval::MAJOR_SECOND, Interval::PERFECT_FOURTH]),
            &set([Direction::Ascending]),
        );
        assert_eq!(all.len(), 2);
        assert!(all.contains(&DirectedInterval::new(Interval::MAJOR_SECOND, Direction::Ascending)));
        assert!(all.contains(&DirectedInterval::new(Interval::PERFECT_FOURTH, Direction::Ascending)));
    }

    #[test]
    fn test_all_with_flat_direction() {
        let all = DirectedInterval::all(
            &set([Interval::MAJOR_SECOND, Interval::PERFECT_FOURTH]),
            &set([Direction::Ascending, Direction::Flat]),
        );
        assert_eq!(all.len(), 3);
        assert!(all.contains(&DirectedInterval::UNISON));
    }

    #[test]
    fn test_all_with_unison_interval() {
        let all = DirectedInterval::all(
            &set([
                Interval::MAJOR_SECOND,
                Interval::PERFECT_FOURTH,
                Interval::PERFECT_UNISON,
            ]),
            &set([Direction::Ascending]),
        );
        assert_eq!(all.len(), 3);
        assert_eq!(all.iter().filter(|i| i.direction() == Direction::Flat).count(), 1);
    }

    #[test]
    fn test_all_unison_not_duplicated() {
        let all = DirectedInterval::all(
            &set([Interval::PERFECT_UNISON, Interval::MINOR_THIRD]),
            &set([Direction::Ascending, Direction::Descending, Direction::Flat]),
        );
        assert_eq!(all.len(), 3);
        assert!(all.contains(&DirectedInterval::from_steps(-3)));
        assert!(all.contains(&DirectedInterval::from_steps(3)));
    }

    #[test]
    fn test_range_inclusive_from_unison() {
        let range: Vec<_> = DirectedInterval::range_inclusive(
            DirectedInterval::UNISON,
            DirectedInterval::new(Interval::MAJOR_SECOND, Direction::Ascending),
        )
        .collect();
        assert_eq!(
            range,
            vec![
                DirectedInterval::UNISON,
                DirectedInterval::new(Interval::MINOR_SECOND, Direction::Ascending),
                DirectedInterval::new(Interval::MAJOR_SECOND, Direction::Ascending),
            ]
        );
    }

    #[test]
    fn test_half_open_range() {
        let range: Vec<_> = DirectedInterval::range(
            DirectedInterval::UNISON,
            DirectedInterval::new(Interval::MINOR_SECOND, Direction::Ascending),
        )
        .collect();
        assert_eq!(range, vec![DirectedInterval::UNISON]);
    }

    #[test]
    fn test_range_across_zero() {
        let range: Vec<_> = DirectedInterval::range_inclusive(
            DirectedInterval::new(Interval::MINOR_SECOND, Direction::Descending),
            DirectedInterval::new(Interval::MINOR_SECOND, Direction::Ascending),
        )
        .collect();
        assert_eq!(
            range,
            vec![
                DirectedInterval::new(Interval::MINOR_SECOND, Direction::Descending),
                DirectedInterval::UNISON,
                DirectedInterval::new(Interval::MINOR_SECOND, Direction::Ascending),
            ]
        );
    }

    #[test]
    fn test_arithmetic() {
        let fifth = DirectedInterval::new(Interval::PERFECT_FIFTH, Direction::Ascending);
        let fourth = DirectedInterval::new(Interval::PERFECT_FOURTH, Direction::Ascending);
        assert_eq!((fifth + fourth).interval(), Interval::PERFECT_OCTAVE);
        assert_eq!(fourth - fifth, DirectedInterval::from_steps(-2));
        assert_eq!(fifth.successor(), DirectedInterval::from_steps(8));
    }

    #[test]
    fn test_display() {
        let down = DirectedInterval::new(Interval::MINOR_THIRD, Direction::Descending);
        assert_eq!(down.to_string(), "Minor Third Descending");
        assert_eq!(DirectedInterval::UNISON.to_string(), "Perfect Unison Flat");
    }
}
