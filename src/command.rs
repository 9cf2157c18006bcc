use super::config::*;
use super::error::*;

use flo_geo::*;

use std::io::Write;

///
/// Command that can be run by the path tool
///
#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Reads a JSON list of [x, y] points and writes them as an encoded polyline
    Encode,

    /// Reads an encoded polyline and writes its points as JSON
    Decode,

    /// Reads an encoded polyline, simplifies it and writes the result as a new encoded polyline
    Reduce,

    /// Reads an encoded polyline and writes a summary of its size
    Stats,

    /// Reads an encoded polyline and writes it as an OFF mesh
    Off
}

///
/// Runs a command against some input text, writing the result to the specified output
///
pub fn run_command<Output: Write>(command: &PathCommand, input: &str, config: &ToolConfig, output: &mut Output) -> Result<(), ToolError> {
    use self::PathCommand::*;

    config.validate()?;

    match command {
        Encode  => {
            let points: Vec<Point> = serde_json::from_str(input)?;
            let path = Path::from_points(points);

            debug!("Encoding {} points", path.len());
            writeln!(output, "{}", path.encode_with_factor(config.factor))?;
        }

        Decode  => {
            let path = decode_input(input, config)?;

            serde_json::to_writer(&mut *output, path.points())?;
            writeln!(output)?;
        }

        Reduce  => {
            let mut path        = decode_input(input, config)?;
            let original_len    = path.len();

            path.reduce(config.threshold);
            info!("Reduced {} points to {}", original_len, path.len());

            writeln!(output, "{}", path.encode_with_factor(config.factor))?;
        }

        Stats   => {
            let path = decode_input(input, config)?;

            writeln!(output, "points: {}", path.len())?;
            writeln!(output, "distance: {:.6}", path.total_distance())?;
            writeln!(output, "geo distance: {:.3} m", path.geo_total_distance(config.haversine))?;
            writeln!(output, "bounds: {}", path.bounds())?;
        }

        Off     => {
            let path = decode_input(input, config)?;

            path.write_off_file(output)?;
        }
    }

    Ok(())
}

///
/// Decodes the polyline in the input (ignoring any surrounding whitespace)
///
fn decode_input(input: &str, config: &ToolConfig) -> Result<Path, ToolError> {
    let path = Path::decode_with_factor(input.trim(), config.factor)?;
    debug!("Decoded {} points", path.len());

    Ok(path)
}
