use std::fmt;
use std::error::Error;

///
/// Reasons an encoded polyline could not be decoded
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PolylineError {
    /// A byte outside of the range used by the encoding (63 to 126)
    InvalidCharacter { position: usize, byte: u8 },

    /// The string ended in the middle of a number (the last character had its continuation bit set)
    UnterminatedNumber { position: usize },

    /// The string ended after a latitude with no matching longitude
    MissingLongitude { position: usize },

    /// A number or a running coordinate total did not fit in 64 bits
    Overflow { position: usize }
}

impl fmt::Display for PolylineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::PolylineError::*;

        match self {
            InvalidCharacter { position, byte } => write!(f, "invalid character 0x{:02x} at position {}", byte, position),
            UnterminatedNumber { position }     => write!(f, "unterminated number starting at position {}", position),
            MissingLongitude { position }       => write!(f, "latitude at position {} has no longitude", position),
            Overflow { position }               => write!(f, "value starting at position {} is too large", position)
        }
    }
}

impl Error for PolylineError { }
