//!
//! # Encoded polylines
//!
//! Reads and writes the compact text format used by mapping services to store a list of
//! coordinates. Each coordinate is quantized to a fixed number of decimal places, stored as
//! the difference from the previous coordinate and then written as a variable-length run of
//! printable characters.
//!
//! Coordinates are always (latitude, longitude) pairs in this crate, which is the order they
//! appear in the encoded string.
//!

#![warn(bare_trait_objects)]

#[macro_use] extern crate log;

mod error;
mod encode;
mod decode;

pub use self::error::*;
pub use self::encode::*;
pub use self::decode::*;

/// The factor used by the common polyline format (coordinates are stored to 5 decimal places)
pub const DEFAULT_FACTOR: f64 = 1.0e5;
