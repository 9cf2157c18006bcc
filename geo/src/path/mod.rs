//!
//! # Paths
//!
//! A `Path` is an ordered list of points, thought of as a polyline. As well as the usual list
//! operations, paths can measure themselves, be simplified with the Douglas-Peucker algorithm
//! (`reduce`) and be converted to and from the encoded polyline format used by mapping services.
//!

mod error;
mod path;
mod reduce;
mod encoding;
mod off_file;

pub use self::error::*;
pub use self::path::*;
