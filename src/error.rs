use thiserror::Error;

use crate::geom::Coord;

/// Contract violations detected by the tagged curve and the geometry layer.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CurveError {
    #[error("curve needs at least 2 coordinates, got {len}")]
    DegenerateCurve { len: usize },

    #[error("result segment index {index} out of range for {len} segments")]
    ResultIndexOutOfRange { index: isize, len: usize },

    #[error("appended segment starts at {start} but result ends at {tail_end}")]
    DisconnectedAppend { tail_end: Coord, start: Coord },

    #[error("cannot append to a ring whose endpoint was already merged")]
    AppendAfterRingClosed,

    #[error("ring closure requested on an open curve")]
    NotARing,

    #[error("ring closure needs at least 2 result segments, got {segments}")]
    RingCollapsed { segments: usize },

    #[error("ring endpoint was already merged")]
    RingAlreadyClosed,

    #[error("simplification needs an empty result, found {segments} segments")]
    ResultNotEmpty { segments: usize },

    #[error("line string needs 0 or at least 2 coordinates, got {len}")]
    InvalidLineString { len: usize },

    #[error("ring is not closed: starts at {first} and ends at {last}")]
    UnclosedRing { first: Coord, last: Coord },

    #[error("ring needs 0 or at least 4 coordinates, got {len}")]
    RingTooShort { len: usize },
}
