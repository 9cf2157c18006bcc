use std::ops::*;

/// Equatorial radius of the earth in metres (WGS84), used for the spherical distance calculations
pub const EARTH_RADIUS: f64 = 6378137.0;

///
/// Represents a 2D point
///
/// For geographic points, the x component is the longitude and the y component is the
/// latitude (both in degrees).
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Point(pub f64, pub f64);

impl Point {
    ///
    /// Creates a point from its x and y components
    ///
    #[inline]
    pub fn new(x: f64, y: f64) -> Point {
        Point(x, y)
    }

    ///
    /// Returns the point at the origin
    ///
    #[inline]
    pub fn origin() -> Point {
        Point(0.0, 0.0)
    }

    #[inline] pub fn x(&self) -> f64 { self.0 }
    #[inline] pub fn y(&self) -> f64 { self.1 }

    /// Longitude (the same as the x component)
    #[inline] pub fn lng(&self) -> f64 { self.0 }

    /// Latitude (the same as the y component)
    #[inline] pub fn lat(&self) -> f64 { self.1 }

    #[inline] pub fn set_x(&mut self, x: f64) { self.0 = x; }
    #[inline] pub fn set_y(&mut self, y: f64) { self.1 = y; }

    ///
    /// Computes the dot product of this point with another (treating both as vectors)
    ///
    #[inline]
    pub fn dot(&self, target: &Point) -> f64 {
        self.0*target.0 + self.1*target.1
    }

    ///
    /// Computes the square of the distance between this point and another
    ///
    #[inline]
    pub fn squared_distance_to(&self, target: &Point) -> f64 {
        let dist_x = target.0-self.0;
        let dist_y = target.1-self.1;

        dist_x*dist_x + dist_y*dist_y
    }

    ///
    /// Computes the planar distance between this point and another
    ///
    #[inline]
    pub fn distance_to(&self, target: &Point) -> f64 {
        f64::sqrt(self.squared_distance_to(target))
    }

    ///
    /// Computes the distance in metres between two points on the surface of the earth
    ///
    /// The points are treated as longitude/latitude pairs in degrees. The spherical law of
    /// cosines is used unless `haversine` is set, in which case the haversine formula is used
    /// (which is more accurate for points that are very close together).
    ///
    pub fn geo_distance_to(&self, target: &Point, haversine: bool) -> f64 {
        let lat1    = self.lat().to_radians();
        let lat2    = target.lat().to_radians();
        let d_lat   = lat2 - lat1;
        let d_lng   = (target.lng() - self.lng()).to_radians();

        if haversine {
            let sin_lat = (d_lat * 0.5).sin();
            let sin_lng = (d_lng * 0.5).sin();
            let a       = sin_lat*sin_lat + lat1.cos()*lat2.cos()*sin_lng*sin_lng;

            2.0 * EARTH_RADIUS * a.sqrt().asin()
        } else {
            // Rounding can push the cosine fractionally outside of the range acos accepts
            let cos_angle = lat1.sin()*lat2.sin() + lat1.cos()*lat2.cos()*d_lng.cos();
            let cos_angle = cos_angle.max(-1.0).min(1.0);

            cos_angle.acos() * EARTH_RADIUS
        }
    }
}

impl Add<Point> for Point {
    type Output=Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Point> for Point {
    type Output=Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Point {
    type Output=Point;

    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point(self.0 * rhs, self.1 * rhs)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Point {
        Point(x, y)
    }
}
