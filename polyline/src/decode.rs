use super::error::*;
use super::encode::{CHAR_OFFSET, CONTINUATION_BIT, GROUP_MASK};
use super::DEFAULT_FACTOR;

/// Largest character that the encoder can generate
const MAX_CHAR: u8 = CHAR_OFFSET + 63;

///
/// Reverses the zig-zag mapping applied to signed numbers
///
#[inline]
pub fn unzig_zag(num: u64) -> i64 {
    if num & 1 != 0 {
        !((num >> 1) as i64)
    } else {
        (num >> 1) as i64
    }
}

///
/// Reads a single unsigned number from an encoded polyline, starting at `pos`
///
/// On success, `pos` is updated to point at the first character after the number.
///
pub fn decode_number(encoded: &[u8], pos: &mut usize) -> Result<u64, PolylineError> {
    let start       = *pos;
    let mut result  = 0u64;
    let mut shift   = 0u32;

    loop {
        let byte = match encoded.get(*pos) {
            Some(byte)  => *byte,
            None        => return Err(PolylineError::UnterminatedNumber { position: start })
        };

        if byte < CHAR_OFFSET || byte > MAX_CHAR {
            return Err(PolylineError::InvalidCharacter { position: *pos, byte: byte });
        }

        let group = (byte - CHAR_OFFSET) as u64;
        let value = group & GROUP_MASK;

        // The 13th group only has room for 4 more bits
        if shift >= 64 || (shift > 59 && (value >> (64 - shift)) != 0) {
            return Err(PolylineError::Overflow { position: start });
        }

        result  |= value << shift;
        shift   += 5;
        *pos    += 1;

        if group < CONTINUATION_BIT {
            return Ok(result);
        }
    }
}

///
/// Reads a signed (zig-zag encoded) number from an encoded polyline
///
#[inline]
pub fn decode_signed_number(encoded: &[u8], pos: &mut usize) -> Result<i64, PolylineError> {
    decode_number(encoded, pos).map(unzig_zag)
}

///
/// Iterator that reads the (latitude, longitude) pairs from an encoded polyline
///
/// Stops after the first error.
///
pub struct PolylineDecoder<'a> {
    encoded:    &'a [u8],
    factor:     f64,
    pos:        usize,
    last:       (i64, i64),
    failed:     bool
}

impl<'a> PolylineDecoder<'a> {
    ///
    /// Creates a decoder for a polyline encoded with the standard factor of 1e5
    ///
    pub fn new(encoded: &'a str) -> PolylineDecoder<'a> {
        PolylineDecoder::with_factor(encoded, DEFAULT_FACTOR)
    }

    ///
    /// Creates a decoder for a polyline encoded with the specified factor
    ///
    pub fn with_factor(encoded: &'a str, factor: f64) -> PolylineDecoder<'a> {
        PolylineDecoder {
            encoded:    encoded.as_bytes(),
            factor:     factor,
            pos:        0,
            last:       (0, 0),
            failed:     false
        }
    }

    ///
    /// Reads the next pair of coordinates as quantized values
    ///
    fn next_quantized(&mut self) -> Result<(i64, i64), PolylineError> {
        let lat_pos     = self.pos;
        let delta_lat   = decode_signed_number(self.encoded, &mut self.pos)?;

        if self.pos >= self.encoded.len() {
            return Err(PolylineError::MissingLongitude { position: lat_pos });
        }

        let lng_pos     = self.pos;
        let delta_lng   = decode_signed_number(self.encoded, &mut self.pos)?;

        let lat = self.last.0.checked_add(delta_lat).ok_or(PolylineError::Overflow { position: lat_pos })?;
        let lng = self.last.1.checked_add(delta_lng).ok_or(PolylineError::Overflow { position: lng_pos })?;

        self.last = (lat, lng);
        Ok((lat, lng))
    }
}

impl<'a> Iterator for PolylineDecoder<'a> {
    type Item = Result<(f64, f64), PolylineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.encoded.len() {
            return None;
        }

        match self.next_quantized() {
            Ok((lat, lng))  => Some(Ok((lat as f64 / self.factor, lng as f64 / self.factor))),
            Err(err)        => {
                debug!("Polyline decoding failed: {}", err);

                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

///
/// Decodes a polyline into a list of (latitude, longitude) pairs
///
pub fn decode_coordinates(encoded: &str, factor: f64) -> Result<Vec<(f64, f64)>, PolylineError> {
    PolylineDecoder::with_factor(encoded, factor).collect()
}
