use super::path::*;
use super::super::point::*;
use super::super::line::*;

///
/// Marks the points between `start` and `end` that are needed to keep the path within `threshold` of the original (Douglas-Peucker)
///
fn mark_points_to_keep(points: &[Point], start: usize, end: usize, threshold: f64, keep: &mut [bool]) {
    keep[start]     = true;
    keep[end]       = true;

    if end <= start + 1 {
        return;
    }

    let line        = Line(points[start], points[end]);

    // Find the point furthest from the line (the first one wins if there's a tie)
    let mut max_index       = start + 1;
    let mut max_distance    = line.distance_to(&points[max_index]);

    for index in (start+2)..end {
        let distance = line.distance_to(&points[index]);

        if distance > max_distance {
            max_distance    = distance;
            max_index       = index;
        }
    }

    // Every point between start and end can be discarded unless the furthest one is too far away
    if max_distance > threshold {
        mark_points_to_keep(points, start, max_index, threshold, keep);
        mark_points_to_keep(points, max_index, end, threshold, keep);
    }
}

impl Path {
    ///
    /// Works out which points would survive reducing this path with the specified threshold
    ///
    /// The result has one entry per point in this path. This is useful for callers that keep
    /// extra data alongside each point and need to reduce it in the same way.
    ///
    pub fn reduce_mask(&self, threshold: f64) -> Vec<bool> {
        let mut keep = vec![false; self.points.len()];

        if !self.points.is_empty() {
            mark_points_to_keep(&self.points, 0, self.points.len()-1, threshold, &mut keep);
        }

        keep
    }

    ///
    /// Simplifies this path using the Douglas-Peucker algorithm
    ///
    /// Points are removed so long as no removed point is further than `threshold` from the
    /// line that replaces it. The first and last points are always kept. The path is modified
    /// in place.
    ///
    pub fn reduce(&mut self, threshold: f64) -> &mut Self {
        let keep            = self.reduce_mask(threshold);
        let original_len    = self.points.len();

        let mut keep_iter   = keep.into_iter();
        self.points.retain(|_| keep_iter.next().unwrap_or(false));

        trace!("Reduced path from {} to {} points (threshold {})", original_len, self.points.len(), threshold);

        self
    }

    ///
    /// Returns a simplified copy of this path, leaving this path unchanged
    ///
    pub fn reduced(&self, threshold: f64) -> Path {
        let mut copy = self.clone();
        copy.reduce(threshold);
        copy
    }
}
