use super::DEFAULT_FACTOR;

/// Added to every 5-bit group so that the output is printable ASCII
pub (crate) const CHAR_OFFSET: u8           = 63;

/// Set on every group except the last one of a number
pub (crate) const CONTINUATION_BIT: u64     = 0x20;

/// The bits carried by a single character
pub (crate) const GROUP_MASK: u64           = 0x1f;

///
/// Converts a coordinate to the fixed-point value that's stored in an encoded polyline
///
#[inline]
pub fn quantize(value: f64, factor: f64) -> i64 {
    (value * factor).round() as i64
}

///
/// Maps a signed number onto an unsigned one so that small negative values stay small
///
/// Non-negative values map to even numbers and negative values map to odd numbers.
///
#[inline]
pub fn zig_zag(num: i64) -> u64 {
    let shifted = num << 1;

    if num < 0 {
        (!shifted) as u64
    } else {
        shifted as u64
    }
}

///
/// Appends an unsigned number to a string as a sequence of 5-bit groups
///
/// Groups are written least significant first. Every group except the last has the
/// continuation bit set, so the end of a number can be found without a separator.
///
pub fn encode_number(num: u64, append_to: &mut String) {
    let mut remaining = num;

    while remaining >= CONTINUATION_BIT {
        let next_part = (CONTINUATION_BIT | (remaining & GROUP_MASK)) as u8;
        append_to.push((next_part + CHAR_OFFSET) as char);

        remaining >>= 5;
    }

    append_to.push((remaining as u8 + CHAR_OFFSET) as char);
}

///
/// Appends a signed number to a string (zig-zag encoded)
///
#[inline]
pub fn encode_signed_number(num: i64, append_to: &mut String) {
    encode_number(zig_zag(num), append_to)
}

///
/// Builds an encoded polyline from a series of (latitude, longitude) pairs
///
/// Each coordinate is stored as the difference from the previous one, so the encoder
/// needs to track the last quantized position it wrote.
///
#[derive(Clone, Debug)]
pub struct PolylineEncoder {
    factor:     f64,
    last:       (i64, i64),
    encoded:    String
}

impl Default for PolylineEncoder {
    fn default() -> PolylineEncoder {
        PolylineEncoder::new()
    }
}

impl PolylineEncoder {
    ///
    /// Creates an encoder using the standard factor of 1e5
    ///
    pub fn new() -> PolylineEncoder {
        PolylineEncoder::with_factor(DEFAULT_FACTOR)
    }

    ///
    /// Creates an encoder that uses the specified factor for quantizing coordinates
    ///
    /// The same factor must be used when decoding: it's not stored in the output.
    ///
    pub fn with_factor(factor: f64) -> PolylineEncoder {
        PolylineEncoder {
            factor:     factor,
            last:       (0, 0),
            encoded:    String::new()
        }
    }

    ///
    /// Appends a coordinate to the polyline
    ///
    /// The latitude is always written before the longitude. Coordinates that don't fit in an
    /// `i64` once multiplied by the factor are clamped, and a jump between values that far apart
    /// wraps around: the decoder reports this as an `Overflow` error.
    ///
    pub fn push(&mut self, lat: f64, lng: f64) {
        let lat_q = quantize(lat, self.factor);
        let lng_q = quantize(lng, self.factor);

        encode_signed_number(lat_q.wrapping_sub(self.last.0), &mut self.encoded);
        encode_signed_number(lng_q.wrapping_sub(self.last.1), &mut self.encoded);

        self.last = (lat_q, lng_q);
    }

    ///
    /// The polyline encoded so far
    ///
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    ///
    /// Finishes encoding and returns the polyline string
    ///
    pub fn finish(self) -> String {
        self.encoded
    }
}

///
/// Encodes a set of (latitude, longitude) pairs as a polyline string
///
pub fn encode_coordinates<Coords: IntoIterator<Item=(f64, f64)>>(coordinates: Coords, factor: f64) -> String {
    let mut encoder = PolylineEncoder::with_factor(factor);

    for (lat, lng) in coordinates {
        encoder.push(lat, lng);
    }

    encoder.finish()
}
