use crate::geom::{Coord, Curve, Segment};

pub fn c(x: f64, y: f64) -> Coord {
    Coord::new(x, y)
}

pub fn coords(xys: &[(f64, f64)]) -> Vec<Coord> {
    xys.iter().map(|&(x, y)| Coord::new(x, y)).collect()
}

pub fn seg(a: (f64, f64), b: (f64, f64)) -> Segment {
    Segment::new(a.into(), b.into())
}

pub fn open_line(xys: &[(f64, f64)]) -> Curve {
    Curve::line_string(coords(xys)).unwrap_or_else(|e| panic!("bad test line: {e}"))
}

pub fn closed_ring(xys: &[(f64, f64)]) -> Curve {
    Curve::linear_ring(coords(xys)).unwrap_or_else(|e| panic!("bad test ring: {e}"))
}

/// 10x10 square, counter-clockwise from the origin, explicitly closed.
pub fn square_ring() -> Curve {
    closed_ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)])
}
