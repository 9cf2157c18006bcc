use flo_geo::PolylineError;

use std::io;
use std::fmt;
use std::error::Error;

///
/// Errors that can stop a command from completing
///
#[derive(Debug)]
pub enum ToolError {
    /// Could not read the input or write the output
    Io(io::Error),

    /// The input or configuration was not valid JSON (or had the wrong structure)
    Json(serde_json::Error),

    /// The input was not a valid encoded polyline
    Polyline(PolylineError),

    /// A command line argument could not be understood
    InvalidArgument(String),

    /// The configuration has a value that can't be used
    InvalidConfig(String)
}

impl From<io::Error> for ToolError {
    fn from(err: io::Error) -> ToolError {
        ToolError::Io(err)
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> ToolError {
        ToolError::Json(err)
    }
}

impl From<PolylineError> for ToolError {
    fn from(err: PolylineError) -> ToolError {
        ToolError::Polyline(err)
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::ToolError::*;

        match self {
            Io(err)                 => write!(f, "I/O error: {}", err),
            Json(err)               => write!(f, "invalid JSON: {}", err),
            Polyline(err)           => write!(f, "invalid polyline: {}", err),
            InvalidArgument(msg)    => write!(f, "invalid argument: {}", msg),
            InvalidConfig(msg)      => write!(f, "invalid configuration: {}", msg)
        }
    }
}

impl Error for ToolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use self::ToolError::*;

        match self {
            Io(err)         => Some(err),
            Json(err)       => Some(err),
            Polyline(err)   => Some(err),
            _               => None
        }
    }
}
