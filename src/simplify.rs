//! Reference Douglas-Peucker driver over a `TaggedCurve`.
//!
//! It only measures distance tolerance; it performs no topology checks against
//! neighbouring curves. It is here to drive a tagged curve through its whole
//! lifecycle the way a real simplifier would.

use log::debug;

use crate::error::CurveError;
use crate::geom::{Curve, CurveKind, Segment};
use crate::tagged_curve::TaggedCurve;

/// Smallest vertex count a simplified curve of this kind may keep.
pub fn default_minimum_size(kind: CurveKind) -> usize {
    match kind {
        CurveKind::Line => 2,
        CurveKind::Ring => 4,
    }
}

/// Simplifies `curve` to within `tolerance`.
///
/// Returns `None` when a ring collapses below a valid ring.
pub fn simplify_curve(
    curve: &Curve,
    tolerance: f64,
    minimum_size: usize,
) -> Result<Option<Curve>, CurveError> {
    let mut tc = TaggedCurve::from_curve(curve, minimum_size)?;
    simplify_tagged(&mut tc, tolerance)?;

    if tc.is_ring() && tc.result_size() < default_minimum_size(CurveKind::Ring) {
        debug!("ring of {} coords collapsed to {}", tc.size(), tc.result_size());
        return Ok(None);
    }
    tc.into_curve().map(Some)
}

/// Fills the result of `tc`, which must still be empty.
pub fn simplify_tagged(tc: &mut TaggedCurve<'_>, tolerance: f64) -> Result<(), CurveError> {
    if tc.result_segment_count() != 0 {
        return Err(CurveError::ResultNotEmpty {
            segments: tc.result_segment_count(),
        });
    }

    let last = tc.size() - 1;
    simplify_sections(tc, 0, last, tolerance)?;

    if tc.is_ring() {
        simplify_ring_endpoint(tc, tolerance)?;
    }

    debug!(
        "simplified {} coords to {} (tolerance {tolerance})",
        tc.size(),
        tc.result_size()
    );
    Ok(())
}

/// Douglas-Peucker over `[first, last]`, appending result segments in curve order.
///
/// Sections wait on an explicit stack as `(i, j, depth)`; the left half of a split is
/// pushed last so it is finished before the right half starts.
fn simplify_sections(
    tc: &mut TaggedCurve<'_>,
    first: usize,
    last: usize,
    tolerance: f64,
) -> Result<(), CurveError> {
    let mut stack: Vec<(usize, usize, usize)> = vec![(first, last, 1)];

    while let Some((i, j, depth)) = stack.pop() {
        if i + 1 == j {
            let seg = tc.original_segment_at(i).segment();
            tc.append_result(seg)?;
            continue;
        }

        // Until the result is known to be big enough, refuse to flatten sections
        // that could leave it below the minimum.
        let mut is_valid = true;
        if tc.result_size() < tc.minimum_size() {
            let worst_case_size = depth + 1;
            if worst_case_size < tc.minimum_size() {
                is_valid = false;
            }
        }

        let pts = tc.parent_coordinates();
        let flat = Segment::new(pts[i], pts[j]);
        let (furthest, dist) = find_furthest(tc, &flat, i, j);
        if dist > tolerance {
            is_valid = false;
        }

        if is_valid {
            tc.append_result(flat)?;
            continue;
        }

        stack.push((furthest, j, depth + 1));
        stack.push((i, furthest, depth + 1));
    }
    Ok(())
}

fn find_furthest(tc: &TaggedCurve<'_>, seg: &Segment, i: usize, j: usize) -> (usize, f64) {
    let pts = tc.parent_coordinates();
    let mut max_index = i;
    let mut max_dist = -1.0;
    for (k, p) in pts.iter().enumerate().take(j).skip(i + 1) {
        let dist = seg.distance_to(p);
        if dist > max_dist {
            max_dist = dist;
            max_index = k;
        }
    }
    (max_index, max_dist)
}

/// Drops the ring's start/end vertex when it lies within tolerance of the segment
/// that would bridge it.
fn simplify_ring_endpoint(tc: &mut TaggedCurve<'_>, tolerance: f64) -> Result<(), CurveError> {
    // Closing removes one vertex; keep at least a valid ring afterwards.
    let floor = tc.minimum_size().max(default_minimum_size(CurveKind::Ring));
    if tc.result_size() <= floor {
        return Ok(());
    }

    let first = *tc.result_segment_at(0)?;
    let last = *tc.result_segment_at(-1)?;
    let bridge = Segment::new(last.start, first.end);
    if bridge.distance_to(&first.start) <= tolerance {
        tc.close_ring()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{closed_ring, coords, open_line, square_ring};
    use crate::geom::Coord;

    #[test]
    fn collinear_vertices_are_removed() {
        let line = open_line(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let out = simplify_curve(&line, 0.1, 2).unwrap().unwrap();
        assert_eq!(out.coords(), coords(&[(0.0, 0.0), (3.0, 0.0)]).as_slice());
    }

    #[test]
    fn spikes_above_tolerance_survive() {
        let line = open_line(&[(0.0, 0.0), (1.0, 2.5), (2.0, 5.0), (3.0, 0.0), (4.0, 0.0), (5.0, 0.0)]);
        let out = simplify_curve(&line, 0.5, 2).unwrap().unwrap();
        assert_eq!(
            out.coords(),
            coords(&[(0.0, 0.0), (2.0, 5.0), (3.0, 0.0), (5.0, 0.0)]).as_slice()
        );
    }

    #[test]
    fn minimum_size_blocks_early_flattening() {
        let line = open_line(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)]);
        let out = simplify_curve(&line, 1.0, 3).unwrap().unwrap();
        assert!(out.len() >= 3, "got {:?}", out.coords());
        assert_eq!(out.coords().first(), Some(&line.coord(0)));
        assert_eq!(out.coords().last(), Some(&line.coord(4)));
    }

    #[test]
    fn square_keeps_its_corners() {
        let ring = square_ring();
        let out = simplify_curve(&ring, 0.5, 4).unwrap().unwrap();
        assert!(out.is_ring());
        assert_eq!(out.len(), 5);
        assert!(out.is_closed());
    }

    #[test]
    fn redundant_ring_endpoint_is_merged() {
        // The start/end vertex sits in the middle of the bottom edge.
        let ring = closed_ring(&[
            (5.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
            (5.0, 0.0),
        ]);
        let out = simplify_curve(&ring, 0.5, 4).unwrap().unwrap();

        assert!(out.is_closed());
        assert_eq!(out.len(), 5);
        assert!(!out.coords().contains(&ring.coord(0)));
    }

    #[test]
    fn tiny_ring_collapses_without_minimum() {
        let ring = closed_ring(&[(0.0, 0.0), (0.1, 0.0), (0.1, 0.1), (0.0, 0.0)]);
        assert_eq!(simplify_curve(&ring, 1.0, 0).unwrap(), None);
        // With the usual minimum it keeps its shape.
        assert_eq!(simplify_curve(&ring, 1.0, 4).unwrap(), Some(ring.clone()));
    }

    #[test]
    fn second_run_on_same_curve_is_rejected() {
        let ring = square_ring();
        let mut tc = TaggedCurve::from_curve(&ring, 4).unwrap();
        simplify_tagged(&mut tc, 0.5).unwrap();
        assert_eq!(tc.result_size(), 5);

        assert_eq!(
            simplify_tagged(&mut tc, 0.5),
            Err(CurveError::ResultNotEmpty { segments: 4 })
        );
        assert_eq!(tc.result_size(), 5);
    }

    #[test]
    fn long_zigzag_keeps_every_vertex() {
        // Each split peels off one vertex, so sections nest as deep as the input is long.
        let n = 20_000;
        let pts: Vec<Coord> = (0..n)
            .map(|k| {
                let y = (k * k) as f64;
                Coord::new(k as f64, if k % 2 == 0 { y } else { -y })
            })
            .collect();
        let line = Curve::line_string(pts).unwrap();

        let out = simplify_curve(&line, 0.5, 2).unwrap().unwrap();
        assert_eq!(out.len(), n);
        assert_eq!(out.coords(), line.coords());
    }
}
