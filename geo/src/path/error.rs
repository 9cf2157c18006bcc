use std::fmt;
use std::error::Error;

///
/// Errors from the checked index operations on a path
///
#[derive(Clone, Debug, PartialEq)]
pub enum PathError {
    /// An index was outside of the range accepted by the operation
    IndexOutOfRange {
        /// Name of the operation that failed ('set', 'insert' or 'remove')
        operation:  &'static str,
        index:      usize,
        length:     usize
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PathError::IndexOutOfRange { operation, index, length } =>
                write!(f, "{} index out of range, requested: {}, length: {}", operation, index, length)
        }
    }
}

impl Error for PathError { }
