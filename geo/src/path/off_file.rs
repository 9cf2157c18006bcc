use super::path::*;

use std::io::{Write, Result};

impl Path {
    ///
    /// Writes the points of this path as an Object File Format mesh (for viewing in a tool such as MeshLab)
    ///
    /// The mesh has one vertex per point (with a z coordinate of 0) and no faces or edges.
    /// The target is not flushed or closed.
    ///
    pub fn write_off_file<Target: Write>(&self, target: &mut Target) -> Result<()> {
        target.write_all(b"OFF\n")?;
        target.write_all(format!("{} 0 0\n", self.points.len()).as_bytes())?;

        for point in self.points.iter() {
            target.write_all(format!("{:.6} {:.6} 0\n", point.x(), point.y()).as_bytes())?;
        }

        Ok(())
    }
}
