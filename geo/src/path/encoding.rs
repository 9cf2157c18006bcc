use super::path::*;
use super::super::point::*;

use flo_polyline::*;

impl Path {
    ///
    /// Encodes this path as a polyline string, using the standard factor of 1e5
    ///
    /// Points are treated as longitude/latitude pairs.
    ///
    pub fn encode(&self) -> String {
        self.encode_with_factor(DEFAULT_FACTOR)
    }

    ///
    /// Encodes this path as a polyline string, quantizing coordinates with the specified factor
    ///
    /// The factor isn't stored in the string: the same one must be passed in when decoding.
    ///
    pub fn encode_with_factor(&self, factor: f64) -> String {
        // The wire format is latitude first
        encode_coordinates(self.points.iter().map(|point| (point.lat(), point.lng())), factor)
    }

    ///
    /// Decodes a path from a polyline string encoded with the standard factor of 1e5
    ///
    pub fn decode(encoded: &str) -> Result<Path, PolylineError> {
        Path::decode_with_factor(encoded, DEFAULT_FACTOR)
    }

    ///
    /// Decodes a path from a polyline string encoded with the specified factor
    ///
    pub fn decode_with_factor(encoded: &str, factor: f64) -> Result<Path, PolylineError> {
        PolylineDecoder::with_factor(encoded, factor)
            .map(|coord| coord.map(|(lat, lng)| Point::new(lng, lat)))
            .collect()
    }
}
