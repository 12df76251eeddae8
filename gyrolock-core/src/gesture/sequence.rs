//! Gesture points and bounded gesture sequences

use heapless::Vec;

use super::axis::AxisSymbol;
use crate::config::MAX_POINTS;

/// Tri-axis symbol triple captured at one detected transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GesturePoint {
    pub x: AxisSymbol,
    pub y: AxisSymbol,
    pub z: AxisSymbol,
}

impl GesturePoint {
    pub const fn new(x: AxisSymbol, y: AxisSymbol, z: AxisSymbol) -> Self {
        Self { x, y, z }
    }
}

/// Reasons a point cannot be appended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PushError {
    /// Sequence already holds `MAX_POINTS` points
    Full,
    /// Point equals the last recorded point
    Repeated,
}

/// Ordered, bounded sequence of gesture points
///
/// Used both for the enrolled key and for password attempts. Two
/// consecutive points are never identical.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GestureSequence {
    points: Vec<GesturePoint, MAX_POINTS>,
}

impl GestureSequence {
    /// Create an empty sequence
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Build a sequence from a slice of points
    ///
    /// Fails if the slice is too long or repeats a point back to back.
    pub fn from_points(points: &[GesturePoint]) -> Result<Self, PushError> {
        let mut sequence = Self::new();
        for point in points {
            sequence.push(*point)?;
        }
        Ok(sequence)
    }

    /// Append a point
    pub fn push(&mut self, point: GesturePoint) -> Result<(), PushError> {
        if self.last() == Some(point) {
            return Err(PushError::Repeated);
        }
        self.points.push(point).map_err(|_| PushError::Full)
    }

    /// Number of recorded points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.points.len() >= MAX_POINTS
    }

    /// Most recently recorded point
    pub fn last(&self) -> Option<GesturePoint> {
        self.points.last().copied()
    }

    pub fn points(&self) -> &[GesturePoint] {
        &self.points
    }

    /// Exact comparison against an enrolled key
    ///
    /// Lengths must be equal and every point must match at the same
    /// index. An empty sequence never matches anything.
    pub fn matches(&self, key: &GestureSequence) -> bool {
        if self.is_empty() || key.is_empty() {
            return false;
        }
        self.points == key.points
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for GestureSequence {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Gesture[");
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", point);
        }
        defmt::write!(f, "]");
    }
}
