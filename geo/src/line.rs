use super::point::*;
use super::bound::*;

///
/// Represents a straight line segment between two points
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Line(pub Point, pub Point);

impl Line {
    ///
    /// Creates a new line from points
    ///
    #[inline]
    pub fn new(a: Point, b: Point) -> Line {
        Line(a, b)
    }

    /// The start point of this line
    #[inline] pub fn a(&self) -> Point { self.0 }

    /// The end point of this line
    #[inline] pub fn b(&self) -> Point { self.1 }

    ///
    /// Returns the two points that mark the start and end of this line
    ///
    #[inline]
    pub fn points(&self) -> (Point, Point) {
        (self.0, self.1)
    }

    ///
    /// The planar length of this line
    ///
    #[inline]
    pub fn length(&self) -> f64 {
        self.0.distance_to(&self.1)
    }

    ///
    /// The length of this line over the surface of the earth, treating the points as longitude/latitude pairs
    ///
    #[inline]
    pub fn geo_length(&self, haversine: bool) -> f64 {
        self.0.geo_distance_to(&self.1, haversine)
    }

    ///
    /// Finds the position of the closest point on the infinite line through this segment
    ///
    /// The result is 0.0 at the start of the line and 1.0 at the end (and may be outside of
    /// that range). A line with no length always returns 0.0.
    ///
    pub fn project(&self, point: &Point) -> f64 {
        let offset              = self.1 - self.0;
        let squared_length      = offset.dot(&offset);

        if squared_length == 0.0 {
            0.0
        } else {
            (*point - self.0).dot(&offset) / squared_length
        }
    }

    ///
    /// Returns the point at the specified position along this line (0.0 = start, 1.0 = end)
    ///
    #[inline]
    pub fn interpolate(&self, t: f64) -> Point {
        self.0 + (self.1 - self.0)*t
    }

    ///
    /// The point half way along this line
    ///
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.interpolate(0.5)
    }

    ///
    /// Computes the distance from a point to the closest point on this segment
    ///
    /// Points that project beyond either end of the segment are measured from that end point
    ///
    pub fn distance_to(&self, point: &Point) -> f64 {
        let t = self.project(point);

        if t <= 0.0 {
            self.0.distance_to(point)
        } else if t >= 1.0 {
            self.1.distance_to(point)
        } else {
            // Perpendicular distance from the cross product (exactly 0 for collinear points)
            let offset      = self.1 - self.0;
            let relative    = *point - self.0;
            let cross       = offset.0*relative.1 - offset.1*relative.0;

            cross.abs() / offset.dot(&offset).sqrt()
        }
    }

    ///
    /// The bounding box of this line
    ///
    #[inline]
    pub fn bound(&self) -> Bound {
        Bound::from_points(self.0, self.1)
    }
}
