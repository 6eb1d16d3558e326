use log::{debug, trace};
use std::ptr;

use crate::error::CurveError;
use crate::geom::{Coord, Curve, Segment};

/// A segment of an original curve, tagged with where it came from.
///
/// `start` and `end` may be rewritten by a simplifier (e.g. to substitute a
/// representative point), but the parent curve and index are fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct TaggedSegment<'a> {
    pub start: Coord,
    pub end: Coord,
    parent: &'a Curve,
    index: usize,
}

impl<'a> TaggedSegment<'a> {
    fn new(start: Coord, end: Coord, parent: &'a Curve, index: usize) -> Self {
        Self {
            start,
            end,
            parent,
            index,
        }
    }

    pub fn parent(&self) -> &'a Curve {
        self.parent
    }

    /// Position of this segment in the parent curve.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn segment(&self) -> Segment {
        Segment::new(self.start, self.end)
    }

    pub fn belongs_to(&self, curve: &Curve) -> bool {
        ptr::eq(self.parent, curve)
    }

    /// Same parent curve (by address) and same index, regardless of current endpoints.
    pub fn same_identity(&self, other: &TaggedSegment<'_>) -> bool {
        self.index == other.index && ptr::eq(self.parent, other.parent)
    }
}

/// A curve being simplified.
///
/// Holds the original curve split into indexed segments, plus the simplified
/// result built up by a driver. The driver must append result segments in the
/// order they occur along the original curve; every derived query assumes it.
///
/// Lifecycle:
///  * Empty: no result segments yet.
///  * Accumulating: one or more `append_result` calls.
///  * RingClosed: `close_ring` merged the ring endpoint (rings only). No more appends.
///  * Finalized: the caller extracted the result with `as_line` / `as_ring`.
#[derive(Debug)]
pub struct TaggedCurve<'a> {
    parent: &'a Curve,
    segments: Box<[TaggedSegment<'a>]>,
    result: Vec<Segment>,
    minimum_size: usize,
    is_ring: bool,
    ring_closed: bool,
}

impl<'a> TaggedCurve<'a> {
    pub fn new(parent: &'a Curve, minimum_size: usize, is_ring: bool) -> Result<Self, CurveError> {
        let pts = parent.coords();
        if pts.len() < 2 {
            return Err(CurveError::DegenerateCurve { len: pts.len() });
        }

        let segments: Box<[TaggedSegment<'a>]> = pts
            .windows(2)
            .enumerate()
            .map(|(i, w)| TaggedSegment::new(w[0], w[1], parent, i))
            .collect();

        trace!(
            "tagged curve: {} coords, {} segments, minimum_size={minimum_size}, ring={is_ring}",
            pts.len(),
            segments.len()
        );

        Ok(Self {
            parent,
            segments,
            result: Vec::new(),
            minimum_size,
            is_ring,
            ring_closed: false,
        })
    }

    /// Like `new`, taking the ring flag from the curve's kind.
    pub fn from_curve(parent: &'a Curve, minimum_size: usize) -> Result<Self, CurveError> {
        Self::new(parent, minimum_size, parent.is_ring())
    }

    // Original side

    /// Number of original coordinates.
    pub fn size(&self) -> usize {
        self.parent.len()
    }

    /// # Panics
    /// If `i >= self.size()`.
    pub fn coordinate_at(&self, i: usize) -> Coord {
        self.parent.coord(i)
    }

    pub fn parent_coordinates(&self) -> &'a [Coord] {
        self.parent.coords()
    }

    /// # Panics
    /// If `i >= self.size() - 1`.
    pub fn original_segment_at(&self, i: usize) -> &TaggedSegment<'a> {
        &self.segments[i]
    }

    /// Mutable access for endpoint substitution. Identity cannot change.
    ///
    /// # Panics
    /// If `i >= self.size() - 1`.
    pub fn original_segment_at_mut(&mut self, i: usize) -> &mut TaggedSegment<'a> {
        &mut self.segments[i]
    }

    pub fn original_segments(&self) -> &[TaggedSegment<'a>] {
        &self.segments
    }

    pub fn minimum_size(&self) -> usize {
        self.minimum_size
    }

    pub fn is_ring(&self) -> bool {
        self.is_ring
    }

    pub fn parent_curve(&self) -> &'a Curve {
        self.parent
    }

    // Result side

    /// Appends a result segment. Segments must arrive in curve order.
    ///
    /// Under `debug_assertions` (or the `verify-append` feature) a segment that does
    /// not start where the current result ends is rejected. Release builds without the
    /// feature append it unchecked.
    pub fn append_result(&mut self, seg: Segment) -> Result<(), CurveError> {
        if self.ring_closed {
            return Err(CurveError::AppendAfterRingClosed);
        }

        if cfg!(any(debug_assertions, feature = "verify-append")) {
            if let Some(tail) = self.result.last() {
                if tail.end != seg.start {
                    return Err(CurveError::DisconnectedAppend {
                        tail_end: tail.end,
                        start: seg.start,
                    });
                }
            }
        }

        self.result.push(seg);
        Ok(())
    }

    /// Vertex count of the simplified curve: 0 when nothing was appended, else segments + 1.
    pub fn result_size(&self) -> usize {
        match self.result.len() {
            0 => 0,
            n => n + 1,
        }
    }

    pub fn result_segment_count(&self) -> usize {
        self.result.len()
    }

    pub fn result_segments(&self) -> &[Segment] {
        &self.result
    }

    /// Result segment by position. Negative indexes count from the end, `-1` is the last.
    pub fn result_segment_at(&self, i: isize) -> Result<&Segment, CurveError> {
        let index = self.result_index(i)?;
        Ok(&self.result[index])
    }

    pub fn result_segment_at_mut(&mut self, i: isize) -> Result<&mut Segment, CurveError> {
        let index = self.result_index(i)?;
        Ok(&mut self.result[index])
    }

    fn result_index(&self, i: isize) -> Result<usize, CurveError> {
        let len = self.result.len();
        let index = if i < 0 { len as isize + i } else { i };
        if index < 0 || index as usize >= len {
            return Err(CurveError::ResultIndexOutOfRange { index: i, len });
        }
        Ok(index as usize)
    }

    /// A vertex lying on the curve as it currently stands.
    ///
    /// Once anything has been simplified this is the first result vertex; before that it
    /// is original coordinate 1. Coordinate 0 is avoided since it is often shared with
    /// adjacent curves, which would hide a flattened line jumping across this one.
    pub fn representative_vertex(&self) -> Coord {
        match self.result.first() {
            Some(seg) => seg.start,
            None => self.parent.coord(1),
        }
    }

    // Extraction

    /// Coordinates implied by the result: every segment start, then the last segment end.
    /// Empty when nothing was appended (the curve fully collapsed).
    pub fn result_coordinates(&self) -> Vec<Coord> {
        let Some(last) = self.result.last() else {
            return Vec::new();
        };

        let mut pts: Vec<Coord> = Vec::with_capacity(self.result.len() + 1);
        pts.extend(self.result.iter().map(|seg| seg.start));
        pts.push(last.end);
        pts
    }

    pub fn as_line(&self) -> Result<Curve, CurveError> {
        Curve::line_string(self.result_coordinates())
    }

    /// Closure is not checked here; the ring constructor rejects an unclosed result.
    pub fn as_ring(&self) -> Result<Curve, CurveError> {
        Curve::linear_ring(self.result_coordinates())
    }

    pub fn into_curve(self) -> Result<Curve, CurveError> {
        if self.is_ring { self.as_ring() } else { self.as_line() }
    }

    /// Merges the ring's closing vertex away.
    ///
    /// The first result segment is made to start where the last one starts, and the
    /// last one is removed and returned. The result then starts and ends at the start
    /// of the removed segment, so it stays closed.
    pub fn close_ring(&mut self) -> Result<Segment, CurveError> {
        if !self.is_ring {
            return Err(CurveError::NotARing);
        }
        if self.ring_closed {
            return Err(CurveError::RingAlreadyClosed);
        }
        // With a single segment first and last alias; what that means is up to the driver.
        let last = match self.result.as_slice() {
            [_, .., last] => *last,
            segs => {
                return Err(CurveError::RingCollapsed {
                    segments: segs.len(),
                });
            }
        };
        self.result.truncate(self.result.len() - 1);
        self.result[0].start = last.start;
        self.ring_closed = true;

        debug!(
            "closed ring: dropped {} -> {}, {} segments remain",
            last.start,
            last.end,
            self.result.len()
        );
        Ok(last)
    }

    pub fn is_ring_closed(&self) -> bool {
        self.ring_closed
    }
}
