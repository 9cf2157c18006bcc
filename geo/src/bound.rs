use super::point::*;

use std::fmt;

///
/// An axis-aligned bounding rectangle
///
/// The south-west corner always holds the minimum coordinates and the north-east corner
/// always holds the maximum coordinates.
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Bound {
    sw: Point,
    ne: Point
}

impl Bound {
    ///
    /// Creates a bound from its edges, given in (max_x, min_x, max_y, min_y) order
    ///
    /// The order within each pair doesn't matter: the smaller value is always used as the minimum.
    ///
    pub fn new(max_x: f64, min_x: f64, max_y: f64, min_y: f64) -> Bound {
        Bound {
            sw: Point(min_x.min(max_x), min_y.min(max_y)),
            ne: Point(min_x.max(max_x), min_y.max(max_y))
        }
    }

    ///
    /// Creates the bound that has the two points as opposite corners
    ///
    pub fn from_points(p1: Point, p2: Point) -> Bound {
        Bound::new(p1.x(), p2.x(), p1.y(), p2.y())
    }

    ///
    /// A bound with all of its corners at the origin
    ///
    pub fn empty() -> Bound {
        Bound {
            sw: Point::origin(),
            ne: Point::origin()
        }
    }

    /// The corner with the minimum coordinates
    #[inline] pub fn sw(&self) -> Point { self.sw }

    /// The corner with the maximum coordinates
    #[inline] pub fn ne(&self) -> Point { self.ne }

    #[inline] pub fn min_x(&self) -> f64 { self.sw.x() }
    #[inline] pub fn min_y(&self) -> f64 { self.sw.y() }
    #[inline] pub fn max_x(&self) -> f64 { self.ne.x() }
    #[inline] pub fn max_y(&self) -> f64 { self.ne.y() }

    #[inline] pub fn width(&self) -> f64 { self.ne.x() - self.sw.x() }
    #[inline] pub fn height(&self) -> f64 { self.ne.y() - self.sw.y() }

    ///
    /// True if this bound encloses no area
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sw.x() >= self.ne.x() || self.sw.y() >= self.ne.y()
    }

    ///
    /// The point at the center of this bound
    ///
    pub fn center(&self) -> Point {
        Point((self.sw.x() + self.ne.x()) * 0.5, (self.sw.y() + self.ne.y()) * 0.5)
    }

    ///
    /// True if the point is inside this bound (points on the edge count as inside)
    ///
    pub fn contains(&self, point: &Point) -> bool {
        point.x() >= self.sw.x() && point.x() <= self.ne.x()
            && point.y() >= self.sw.y() && point.y() <= self.ne.y()
    }

    ///
    /// True if this bound overlaps another (bounds that only share an edge count as overlapping)
    ///
    pub fn intersects(&self, other: &Bound) -> bool {
        !(self.ne.x() < other.sw.x() || self.sw.x() > other.ne.x()
            || self.ne.y() < other.sw.y() || self.sw.y() > other.ne.y())
    }

    ///
    /// Grows this bound so that it includes the specified point
    ///
    pub fn extend(&mut self, point: &Point) -> &mut Self {
        self.sw = Point(self.sw.x().min(point.x()), self.sw.y().min(point.y()));
        self.ne = Point(self.ne.x().max(point.x()), self.ne.y().max(point.y()));

        self
    }

    ///
    /// Grows this bound so that it includes another bound
    ///
    pub fn union(&mut self, other: &Bound) -> &mut Self {
        self.extend(&other.sw);
        self.extend(&other.ne)
    }

    ///
    /// Moves every edge of this bound outwards by the specified amount (or inwards if the amount is negative)
    ///
    pub fn pad(&mut self, amount: f64) -> &mut Self {
        self.sw = Point(self.sw.x() - amount, self.sw.y() - amount);
        self.ne = Point(self.ne.x() + amount, self.ne.y() + amount);

        self
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[[{:.6}, {:.6}], [{:.6}, {:.6}]]", self.sw.x(), self.ne.x(), self.sw.y(), self.ne.y())
    }
}
