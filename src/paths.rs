// Conversions between clipper2 integer paths and curves.
//
// clipper2 paths are implicitly closed and never repeat their first point, while
// a ring `Curve` stores the closing coordinate explicitly.

use clipper2::{One, Path, Paths, Point};

use crate::error::CurveError;
use crate::geom::{Coord, Curve};

pub type IntPoint = Point<One>;
pub type IntPath = Path<One>;
pub type IntPaths = Paths<One>;

fn coords_from_path(path: &IntPath) -> Vec<Coord> {
    path.iter()
        .map(|pt| Coord::new(pt.x_scaled() as f64, pt.y_scaled() as f64))
        .collect()
}

/// Builds a curve from `path`; `closed` makes it a ring by repeating the first point.
pub fn curve_from_int_path(path: &IntPath, closed: bool) -> Result<Curve, CurveError> {
    let mut pts = coords_from_path(path);
    if !closed {
        return Curve::line_string(pts);
    }

    if let Some(&first) = pts.first() {
        if pts.last() != Some(&first) {
            pts.push(first);
        }
    }
    Curve::linear_ring(pts)
}

/// Every path of `paths` as a ring, skipping paths with fewer than 3 points.
pub fn curves_from_int_paths(paths: &IntPaths) -> Result<Vec<Curve>, CurveError> {
    paths
        .iter()
        .filter(|path| path.len() >= 3)
        .map(|path| curve_from_int_path(path, true))
        .collect()
}

/// Rounds coordinates to the integer grid. A ring's closing coordinate is dropped.
pub fn int_path_from_curve(curve: &Curve) -> IntPath {
    let pts = curve.coords();
    let pts = if curve.is_closed() {
        &pts[..pts.len() - 1]
    } else {
        pts
    };

    IntPath::new(
        pts.iter()
            .map(|c| IntPoint::from_scaled(c.x.round() as i64, c.y.round() as i64))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{coords, square_ring};

    fn ipath(xys: &[[i64; 2]]) -> IntPath {
        IntPath::new(
            xys.iter()
                .map(|&[x, y]| IntPoint::from_scaled(x, y))
                .collect(),
        )
    }

    #[test]
    fn closed_path_becomes_explicit_ring() {
        let path = ipath(&[[0, 0], [10, 0], [10, 10], [0, 10]]);
        let ring = curve_from_int_path(&path, true).unwrap();
        assert!(ring.is_ring());
        assert_eq!(ring.coords(), square_ring().coords());
    }

    #[test]
    fn open_path_stays_open() {
        let path = ipath(&[[0, 0], [5, 5], [10, 0]]);
        let line = curve_from_int_path(&path, false).unwrap();
        assert!(!line.is_ring());
        assert_eq!(line.coords(), coords(&[(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)]).as_slice());
    }

    #[test]
    fn ring_drops_closing_point_on_the_way_back() {
        let path = int_path_from_curve(&square_ring());
        let xys: Vec<(i64, i64)> = path.iter().map(|pt| (pt.x_scaled(), pt.y_scaled())).collect();
        assert_eq!(xys, vec![(0, 0), (10, 0), (10, 10), (0, 10)]);
    }

    #[test]
    fn short_paths_are_skipped() {
        let paths = IntPaths::new(vec![
            ipath(&[[0, 0], [10, 0], [10, 10], [0, 10]]),
            ipath(&[[0, 0], [1, 1]]),
            ipath(&[[20, 20], [30, 20], [25, 30]]),
        ]);
        let curves = curves_from_int_paths(&paths).unwrap();
        let lens: Vec<usize> = curves.iter().map(|c| c.len()).collect();
        assert_eq!(lens, vec![5, 4]);
    }
}
