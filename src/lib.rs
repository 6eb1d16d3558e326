// Library crate root.
//
// `tagged_curve` is the core: the bookkeeping for one curve under simplification.
// The other modules are the geometry it consumes and a reference driver for it.

pub mod desc;
pub mod error;
pub mod geom;
pub mod logging;
pub mod paths;
pub mod simplify;
pub mod tagged_curve;

pub use error::CurveError;
pub use tagged_curve::{TaggedCurve, TaggedSegment};

#[cfg(test)]
pub mod test_helpers;
