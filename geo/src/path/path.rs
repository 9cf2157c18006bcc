use super::error::*;
use super::super::point::*;
use super::super::line::*;
use super::super::bound::*;

use std::iter::FromIterator;
use std::slice;

///
/// An ordered set of points, to be thought of as a polyline
///
/// The order of the points is significant: it defines the shape of the path. Points may be
/// repeated. A path owns its points, so accessors return copies rather than references into
/// the path's storage.
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Path {
    pub (super) points: Vec<Point>
}

impl Path {
    ///
    /// Creates a new empty path
    ///
    pub fn new() -> Path {
        Path { points: vec![] }
    }

    ///
    /// Creates an empty path with space for the specified number of points
    ///
    pub fn with_capacity(capacity: usize) -> Path {
        Path { points: Vec::with_capacity(capacity) }
    }

    ///
    /// Creates a path from a list of points
    ///
    pub fn from_points(points: Vec<Point>) -> Path {
        Path { points: points }
    }

    ///
    /// The points in this path, in order
    ///
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    ///
    /// Iterates over the points in this path
    ///
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Point> {
        self.points.iter()
    }

    ///
    /// Consumes this path and returns its points
    ///
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// The number of points in this path
    #[inline] pub fn len(&self) -> usize { self.points.len() }

    /// True if this path has no points
    #[inline] pub fn is_empty(&self) -> bool { self.points.is_empty() }

    ///
    /// Adds a point to the end of this path
    ///
    pub fn push(&mut self, point: Point) -> &mut Self {
        self.points.push(point);
        self
    }

    ///
    /// Removes the last point of this path, returning None if the path is empty
    ///
    pub fn pop(&mut self) -> Option<Point> {
        self.points.pop()
    }

    ///
    /// Returns the point at the specified index, or None if the index is past the end of the path
    ///
    #[inline]
    pub fn get_at(&self, index: usize) -> Option<Point> {
        self.points.get(index).cloned()
    }

    ///
    /// Replaces the point at the specified index
    ///
    pub fn try_set_at(&mut self, index: usize, point: Point) -> Result<&mut Self, PathError> {
        if index >= self.points.len() {
            return Err(PathError::IndexOutOfRange { operation: "set", index: index, length: self.points.len() });
        }

        self.points[index] = point;
        Ok(self)
    }

    ///
    /// Inserts a point before the specified index (an index equal to the length of the path appends the point)
    ///
    pub fn try_insert_at(&mut self, index: usize, point: Point) -> Result<&mut Self, PathError> {
        if index > self.points.len() {
            return Err(PathError::IndexOutOfRange { operation: "insert", index: index, length: self.points.len() });
        }

        self.points.insert(index, point);
        Ok(self)
    }

    ///
    /// Removes the point at the specified index, returning it
    ///
    pub fn try_remove_at(&mut self, index: usize) -> Result<Point, PathError> {
        if index >= self.points.len() {
            return Err(PathError::IndexOutOfRange { operation: "remove", index: index, length: self.points.len() });
        }

        Ok(self.points.remove(index))
    }

    ///
    /// Replaces the point at the specified index
    ///
    /// Panics if the index is out of range.
    ///
    pub fn set_at(&mut self, index: usize, point: Point) -> &mut Self {
        match self.try_set_at(index, point) {
            Ok(path)    => path,
            Err(err)    => panic!("geo: {}", err)
        }
    }

    ///
    /// Inserts a point before the specified index
    ///
    /// Panics if the index is greater than the length of the path.
    ///
    pub fn insert_at(&mut self, index: usize, point: Point) -> &mut Self {
        match self.try_insert_at(index, point) {
            Ok(path)    => path,
            Err(err)    => panic!("geo: {}", err)
        }
    }

    ///
    /// Removes the point at the specified index, returning it
    ///
    /// Panics if the index is out of range.
    ///
    pub fn remove_at(&mut self, index: usize) -> Point {
        match self.try_remove_at(index) {
            Ok(point)   => point,
            Err(err)    => panic!("geo: {}", err)
        }
    }

    ///
    /// Applies a projection (or inverse projection) to every point in this path, in order
    ///
    pub fn transform<Projection: FnMut(Point) -> Point>(&mut self, mut projection: Projection) -> &mut Self {
        for point in self.points.iter_mut() {
            *point = projection(*point);
        }

        self
    }

    ///
    /// Iterates over the line segments joining each point to the next
    ///
    pub fn lines<'a>(&'a self) -> impl 'a+Iterator<Item=Line> {
        self.points.windows(2).map(|pair| Line(pair[0], pair[1]))
    }

    ///
    /// The bounding box of the points in this path
    ///
    /// An empty path has an empty bound at the origin.
    ///
    pub fn bounds(&self) -> Bound {
        let first = match self.points.first() {
            Some(first) => *first,
            None        => return Bound::empty()
        };

        let (mut min_x, mut min_y) = (first.x(), first.y());
        let (mut max_x, mut max_y) = (first.x(), first.y());

        for point in self.points.iter().skip(1) {
            min_x = min_x.min(point.x());
            min_y = min_y.min(point.y());

            max_x = max_x.max(point.x());
            max_y = max_y.max(point.y());
        }

        Bound::new(max_x, min_x, max_y, min_y)
    }

    ///
    /// The total planar length of this path
    ///
    pub fn total_distance(&self) -> f64 {
        self.lines().map(|line| line.length()).sum()
    }

    ///
    /// The total length of this path over the surface of the earth (the points are treated as longitude/latitude pairs)
    ///
    pub fn geo_total_distance(&self, haversine: bool) -> f64 {
        self.lines().map(|line| line.geo_length(haversine)).sum()
    }

    ///
    /// The distance from a point to the closest part of this path
    ///
    /// This checks every segment, so it's O(n). Paths with fewer than two points have no
    /// segments, so the distance to them is infinite.
    ///
    pub fn distance_from(&self, point: &Point) -> f64 {
        self.lines()
            .map(|line| line.distance_to(point))
            .fold(f64::INFINITY, f64::min)
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Path {
        Path::from_points(points)
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<Iter: IntoIterator<Item=Point>>(iter: Iter) -> Path {
        Path::from_points(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item       = &'a Point;
    type IntoIter   = slice::Iter<'a, Point>;

    fn into_iter(self) -> slice::Iter<'a, Point> {
        self.points.iter()
    }
}

impl Extend<Point> for Path {
    fn extend<Iter: IntoIterator<Item=Point>>(&mut self, iter: Iter) {
        self.points.extend(iter)
    }
}
