use serde::Deserialize;

use crate::error::CurveError;
use crate::geom::{Coord, Curve, CurveKind};
use crate::simplify::default_minimum_size;

// [x0, y0, x1, y1, ...]; a trailing odd value is ignored.
type FlatVerts = Vec<f64>;

#[derive(Debug, Clone, Deserialize)]
pub struct SimplifyDesc {
    pub tolerance: f64,
    #[serde(default)]
    pub curves: Vec<CurveDesc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurveDesc {
    #[serde(default)]
    pub name: String,
    pub verts: FlatVerts,
    #[serde(default)]
    pub is_ring: bool,
    /// Falls back to the usual minimum for the curve kind.
    #[serde(default)]
    pub minimum_size: Option<usize>,
}

pub fn parse_simplify_json(json_text: &str) -> Result<SimplifyDesc, serde_json::Error> {
    serde_json::from_str(json_text)
}

impl CurveDesc {
    pub fn kind(&self) -> CurveKind {
        if self.is_ring { CurveKind::Ring } else { CurveKind::Line }
    }

    pub fn minimum_size(&self) -> usize {
        self.minimum_size
            .unwrap_or_else(|| default_minimum_size(self.kind()))
    }

    /// Builds the curve. Ring vertices may be given open; the first vertex is repeated
    /// at the end when it is not already there.
    pub fn to_curve(&self) -> Result<Curve, CurveError> {
        let mut pts: Vec<Coord> = self
            .verts
            .chunks_exact(2)
            .map(|xy| Coord::new(xy[0], xy[1]))
            .collect();

        if !self.is_ring {
            return Curve::line_string(pts);
        }

        if let (Some(&first), Some(&last)) = (pts.first(), pts.last()) {
            if first != last {
                pts.push(first);
            }
        }
        Curve::linear_ring(pts)
    }
}
