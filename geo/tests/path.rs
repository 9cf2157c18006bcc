extern crate flo_geo;

use flo_geo::*;

fn square() -> Path {
    Path::from_points(vec![Point(0.0, 0.0), Point(4.0, 0.0), Point(4.0, 3.0), Point(0.0, 3.0)])
}

#[test]
fn new_path_is_empty() {
    let path = Path::new();

    assert!(path.len() == 0);
    assert!(path.is_empty());
    assert!(path.get_at(0).is_none());
}

#[test]
fn push_adds_to_end() {
    let mut path = square();
    path.push(Point(7.0, 8.0));

    assert!(path.len() == 5);
    assert!(path.get_at(path.len()-1) == Some(Point(7.0, 8.0)));
}

#[test]
fn push_can_be_chained() {
    let mut path = Path::new();
    path.push(Point(1.0, 1.0)).push(Point(2.0, 2.0));

    assert!(path.points() == &[Point(1.0, 1.0), Point(2.0, 2.0)]);
}

#[test]
fn pop_then_push_restores_path() {
    let original    = square();
    let mut path    = original.clone();

    let last = path.pop().unwrap();
    assert!(last == Point(0.0, 3.0));
    assert!(path.len() == 3);

    path.push(last);
    assert!(path == original);
}

#[test]
fn pop_empty_path_is_none() {
    let mut path = Path::new();

    assert!(path.pop().is_none());
    assert!(path.len() == 0);
}

#[test]
fn get_past_end_is_none() {
    let path = square();

    assert!(path.get_at(3) == Some(Point(0.0, 3.0)));
    assert!(path.get_at(4).is_none());
    assert!(path.get_at(100).is_none());
}

#[test]
fn set_replaces_point() {
    let mut path = square();
    path.set_at(1, Point(5.0, 5.0));

    assert!(path.points() == &[Point(0.0, 0.0), Point(5.0, 5.0), Point(4.0, 3.0), Point(0.0, 3.0)]);
}

#[test]
#[should_panic(expected = "set index out of range")]
fn set_past_end_panics() {
    let mut path = square();
    path.set_at(4, Point(5.0, 5.0));
}

#[test]
fn insert_shifts_later_points() {
    let mut path = square();
    path.insert_at(1, Point(2.0, -1.0));

    assert!(path.points() == &[Point(0.0, 0.0), Point(2.0, -1.0), Point(4.0, 0.0), Point(4.0, 3.0), Point(0.0, 3.0)]);
}

#[test]
fn insert_at_start_and_end() {
    let mut path = square();
    path.insert_at(0, Point(-1.0, -1.0));
    path.insert_at(path.len(), Point(9.0, 9.0));

    assert!(path.len() == 6);
    assert!(path.get_at(0) == Some(Point(-1.0, -1.0)));
    assert!(path.get_at(1) == Some(Point(0.0, 0.0)));
    assert!(path.get_at(5) == Some(Point(9.0, 9.0)));
}

#[test]
fn insert_into_empty_path() {
    let mut path = Path::new();
    path.insert_at(0, Point(1.0, 2.0));

    assert!(path.points() == &[Point(1.0, 2.0)]);
}

#[test]
#[should_panic(expected = "insert index out of range")]
fn insert_past_end_panics() {
    let mut path = square();
    path.insert_at(5, Point(5.0, 5.0));
}

#[test]
fn remove_shifts_later_points() {
    let mut path    = square();
    let removed     = path.remove_at(1);

    assert!(removed == Point(4.0, 0.0));
    assert!(path.points() == &[Point(0.0, 0.0), Point(4.0, 3.0), Point(0.0, 3.0)]);
}

#[test]
#[should_panic(expected = "remove index out of range")]
fn remove_at_length_panics() {
    let mut path = square();
    path.remove_at(4);
}

#[test]
#[should_panic(expected = "remove index out of range")]
fn remove_from_empty_path_panics() {
    let mut path = Path::new();
    path.remove_at(0);
}

#[test]
fn checked_operations_report_range_errors() {
    let mut path = square();

    assert!(path.try_set_at(4, Point(1.0, 1.0)).err() == Some(PathError::IndexOutOfRange { operation: "set", index: 4, length: 4 }));
    assert!(path.try_insert_at(5, Point(1.0, 1.0)).err() == Some(PathError::IndexOutOfRange { operation: "insert", index: 5, length: 4 }));
    assert!(path.try_remove_at(4) == Err(PathError::IndexOutOfRange { operation: "remove", index: 4, length: 4 }));

    // Failed operations leave the path alone
    assert!(path == square());

    assert!(path.try_insert_at(4, Point(1.0, 1.0)).is_ok());
    assert!(path.try_remove_at(4) == Ok(Point(1.0, 1.0)));
}

#[test]
fn clone_is_independent() {
    let original    = square();
    let mut copy    = original.clone();

    assert!(copy == original);

    copy.set_at(0, Point(10.0, 10.0));
    copy.push(Point(11.0, 11.0));

    assert!(original == square());
    assert!(copy != original);
}

#[test]
fn transform_every_point() {
    let mut path        = square();
    let mut visited     = vec![];

    path.transform(|point| {
        visited.push(point);
        Point(point.x() * 2.0, point.y() + 1.0)
    });

    assert!(visited == square().into_points());
    assert!(path.points() == &[Point(0.0, 1.0), Point(8.0, 1.0), Point(8.0, 7.0), Point(0.0, 7.0)]);
}

#[test]
fn bounds_of_square() {
    let bounds = square().bounds();

    assert!(bounds.sw() == Point(0.0, 0.0));
    assert!(bounds.ne() == Point(4.0, 3.0));
}

#[test]
fn bounds_of_tall_path() {
    let path    = Path::from_points(vec![Point(1.0, -5.0), Point(2.0, 10.0), Point(-1.0, 0.0)]);
    let bounds  = path.bounds();

    assert!(bounds.sw() == Point(-1.0, -5.0));
    assert!(bounds.ne() == Point(2.0, 10.0));
}

#[test]
fn bounds_of_empty_path() {
    assert!(Path::new().bounds() == Bound::empty());
}

#[test]
fn bounds_of_single_point() {
    let bounds = Path::from_points(vec![Point(3.0, 4.0)]).bounds();

    assert!(bounds.sw() == Point(3.0, 4.0));
    assert!(bounds.ne() == Point(3.0, 4.0));
}

#[test]
fn total_distance() {
    let path = Path::from_points(vec![Point(0.0, 0.0), Point(3.0, 0.0), Point(3.0, 4.0)]);

    assert!(path.total_distance() == 7.0);
    assert!(square().total_distance() == 11.0);
}

#[test]
fn total_distance_of_short_paths() {
    assert!(Path::new().total_distance() == 0.0);
    assert!(Path::from_points(vec![Point(1.0, 1.0)]).total_distance() == 0.0);
    assert!(Path::new().geo_total_distance(false) == 0.0);
}

#[test]
fn geo_total_distance_sums_segments() {
    let path = Path::from_points(vec![Point(0.0, 0.0), Point(1.0, 0.0), Point(2.0, 0.0)]);
    let expected = 2.0 * EARTH_RADIUS * 1.0f64.to_radians();

    assert!((path.geo_total_distance(false) - expected).abs() < 0.01);
    assert!((path.geo_total_distance(true) - expected).abs() < 0.01);
}

#[test]
fn distance_from_point() {
    let path = square();

    assert!(path.distance_from(&Point(2.0, 1.0)) == 1.0);
    assert!(path.distance_from(&Point(5.0, 1.5)) == 1.0);
    assert!(path.distance_from(&Point(4.0, 3.0)) == 0.0);

    // The square isn't closed, so the left side is only near via the corners
    assert!((path.distance_from(&Point(-1.0, 1.5)) - 3.25f64.sqrt()).abs() < 1e-12);
}

#[test]
fn distance_from_short_path_is_infinite() {
    assert!(Path::new().distance_from(&Point(0.0, 0.0)).is_infinite());
    assert!(Path::from_points(vec![Point(1.0, 1.0)]).distance_from(&Point(1.0, 1.0)).is_infinite());
}

#[test]
fn collect_and_iterate() {
    let path: Path = (0..4).map(|x| Point(x as f64, 0.0)).collect();

    assert!(path.len() == 4);
    assert!(path.iter().map(|point| point.x()).sum::<f64>() == 6.0);

    let mut count = 0;
    for _point in &path {
        count += 1;
    }
    assert!(count == 4);

    assert!(path.lines().count() == 3);
}

#[test]
fn write_off_file() {
    let path        = Path::from_points(vec![Point(1.0, 2.0), Point(-3.5, 0.25)]);
    let mut output  = vec![];

    path.write_off_file(&mut output).unwrap();

    assert!(String::from_utf8(output).unwrap() == "OFF\n2 0 0\n1.000000 2.000000 0\n-3.500000 0.250000 0\n");
}

#[test]
fn write_empty_off_file() {
    let mut output = vec![];

    Path::new().write_off_file(&mut output).unwrap();

    assert!(output == b"OFF\n0 0 0\n");
}
