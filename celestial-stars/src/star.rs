//! Star records and query positions.

use std::fmt;

/// A point in the catalog's Cartesian frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Monotonic with the true distance, so it orders neighbors identically
    /// without a square root.
    #[inline]
    pub fn squared_distance(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }
}

impl From<(f64, f64, f64)> for Position {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

/// A single catalog entry.
///
/// Immutable once constructed. Ids and names are not required to be unique;
/// an empty name means the star has no proper name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Star {
    id: i64,
    name: String,
    x: f64,
    y: f64,
    z: f64,
}

impl Star {
    pub fn new(id: i64, name: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            id,
            name: name.into(),
            x,
            y,
            z,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Proper name, verbatim from the source. May be empty.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y, self.z)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_name() {
            write!(
                f,
                "{} ({}) at ({}, {}, {})",
                self.id, self.name, self.x, self.y, self.z
            )
        } else {
            write!(f, "{} at ({}, {}, {})", self.id, self.x, self.y, self.z)
        }
    }
}
