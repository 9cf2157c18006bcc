use super::point::*;
use super::line::*;

///
/// Trait implemented by things that can be clustered: anything that can be reduced to a single point
///
pub trait Pointer {
    ///
    /// The point that represents this item (longitude/latitude, or some other coordinate system)
    ///
    fn center_point(&self) -> Point;
}

impl Pointer for Point {
    #[inline]
    fn center_point(&self) -> Point {
        *self
    }
}

///
/// A group of pointers along with their centroid
///
#[derive(Clone, Debug)]
pub struct Cluster<P: Pointer> {
    pub centroid:   Point,
    pub pointers:   Vec<P>
}

impl<P: Pointer> Cluster<P> {
    ///
    /// Creates a cluster from a set of pointers, using the mean of their points as the centroid
    ///
    /// An empty cluster has its centroid at the origin.
    ///
    pub fn new(pointers: Vec<P>) -> Cluster<P> {
        let centroid = match pointers.len() {
            0 => Point::origin(),
            1 => pointers[0].center_point(),
            count => {
                let sum = pointers.iter()
                    .map(|pointer| pointer.center_point())
                    .fold(Point::origin(), |sum, point| sum + point);

                sum * (1.0 / count as f64)
            }
        };

        Cluster {
            centroid:   centroid,
            pointers:   pointers
        }
    }

    ///
    /// Creates a cluster with a known centroid
    ///
    pub fn with_centroid(centroid: Point, pointers: Vec<P>) -> Cluster<P> {
        Cluster {
            centroid:   centroid,
            pointers:   pointers
        }
    }

    /// The number of pointers in this cluster
    #[inline] pub fn len(&self) -> usize { self.pointers.len() }

    /// True if this cluster has no pointers
    #[inline] pub fn is_empty(&self) -> bool { self.pointers.is_empty() }

    ///
    /// Merges another cluster into this one
    ///
    /// The new centroid is between the two old ones, weighted by how many pointers each cluster had.
    ///
    pub fn merge(&mut self, other: Cluster<P>) {
        let own_count   = self.pointers.len() as f64;
        let total_count = (self.pointers.len() + other.pointers.len()) as f64;

        if total_count > 0.0 {
            self.centroid = Line(self.centroid, other.centroid).interpolate(1.0 - own_count/total_count);
        }

        self.pointers.extend(other.pointers);
    }
}
