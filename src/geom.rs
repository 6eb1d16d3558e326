use serde::Serialize;
use std::fmt;

use crate::error::CurveError;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(&self, other: &Coord) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A directed pair of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: Coord,
    pub end: Coord,
}

impl Segment {
    pub const fn new(start: Coord, end: Coord) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Distance from `p` to the closest point of the segment.
    ///
    /// A zero-length segment degrades to point distance.
    pub fn distance_to(&self, p: &Coord) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len2 = dx * dx + dy * dy;
        if len2 == 0.0 {
            return self.start.distance(p);
        }

        let t = (((p.x - self.start.x) * dx + (p.y - self.start.y) * dy) / len2).clamp(0.0, 1.0);
        let closest = Coord::new(self.start.x + t * dx, self.start.y + t * dy);
        closest.distance(p)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    Line,
    Ring,
}

/// An ordered sequence of coordinates forming an open line or a closed ring.
///
/// Rings store their closing coordinate explicitly, so `coords[0] == coords[len - 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    coords: Vec<Coord>,
    kind: CurveKind,
}

impl Curve {
    /// Builds an open line. Empty is allowed; a single coordinate is not.
    pub fn line_string(coords: Vec<Coord>) -> Result<Self, CurveError> {
        if coords.len() == 1 {
            return Err(CurveError::InvalidLineString { len: 1 });
        }
        Ok(Self {
            coords,
            kind: CurveKind::Line,
        })
    }

    /// Builds a closed ring. Empty is allowed; otherwise at least 4 coordinates with
    /// the first equal to the last.
    pub fn linear_ring(coords: Vec<Coord>) -> Result<Self, CurveError> {
        if let (Some(&first), Some(&last)) = (coords.first(), coords.last()) {
            if first != last {
                return Err(CurveError::UnclosedRing { first, last });
            }
            if coords.len() < 4 {
                return Err(CurveError::RingTooShort { len: coords.len() });
            }
        }
        Ok(Self {
            coords,
            kind: CurveKind::Ring,
        })
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn into_coords(self) -> Vec<Coord> {
        self.coords
    }

    #[inline]
    pub fn coord(&self, i: usize) -> Coord {
        self.coords[i]
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    pub fn is_ring(&self) -> bool {
        self.kind == CurveKind::Ring
    }

    /// True when the first and last coordinates coincide. Empty curves are not closed.
    pub fn is_closed(&self) -> bool {
        match (self.coords.first(), self.coords.last()) {
            (Some(first), Some(last)) => self.coords.len() > 1 && first == last,
            _ => false,
        }
    }
}
