//!
//! # Geometric paths
//!
//! Basic geometric types (`Point`, `Line` and `Bound`) and the `Path` type built from them.
//! Points can be planar coordinates or longitude/latitude pairs: the distance functions come
//! in both planar and spherical versions.
//!

#![warn(bare_trait_objects)]

#[macro_use] extern crate serde_derive;
#[macro_use] extern crate log;

extern crate flo_polyline;

pub mod point;
pub mod line;
pub mod bound;
pub mod path;
pub mod cluster;

pub use self::point::*;
pub use self::line::*;
pub use self::bound::*;
pub use self::path::*;
pub use self::cluster::*;

pub use flo_polyline::{PolylineError, DEFAULT_FACTOR};
