extern crate flo_geo;

use flo_geo::*;

#[test]
fn can_get_distance_between_points() {
    assert!(Point(1.0, 1.0).distance_to(&Point(1.0, 8.0)) == 7.0);
    assert!(Point(0.0, 0.0).distance_to(&Point(3.0, 4.0)) == 5.0);
}

#[test]
fn lng_lat_are_x_y() {
    let point = Point::new(-120.2, 38.5);

    assert!(point.lng() == point.x());
    assert!(point.lat() == point.y());
    assert!(point.x() == -120.2);
}

#[test]
fn copies_are_independent() {
    let original    = Point::new(1.0, 2.0);
    let mut copy    = original;

    copy.set_x(5.0);

    assert!(original == Point(1.0, 2.0));
    assert!(copy == Point(5.0, 2.0));
}

#[test]
fn geo_distance_to_same_point_is_zero() {
    let point = Point::new(-122.4167, 37.7833);

    // The law of cosines loses some precision for very close points
    assert!(point.geo_distance_to(&point, false) < 1.0);
    assert!(point.geo_distance_to(&point, true) == 0.0);
}

#[test]
fn geo_distance_along_equator() {
    // One degree of longitude along the equator
    let expected = EARTH_RADIUS * 1.0f64.to_radians();

    assert!((Point(0.0, 0.0).geo_distance_to(&Point(1.0, 0.0), false) - expected).abs() < 0.01);
    assert!((Point(0.0, 0.0).geo_distance_to(&Point(1.0, 0.0), true) - expected).abs() < 0.01);
}

#[test]
fn geo_distance_formulas_agree() {
    let sf = Point::new(-122.4167, 37.7833);
    let la = Point::new(-118.2500, 34.0500);

    let cosines     = sf.geo_distance_to(&la, false);
    let haversine   = sf.geo_distance_to(&la, true);

    assert!((cosines - haversine).abs() < 1.0);
    assert!(cosines > 550_000.0 && cosines < 570_000.0);
}

#[test]
fn points_serialize_as_pairs() {
    let json = serde_json::to_string(&Point(1.5, -2.0)).unwrap();
    assert!(json == "[1.5,-2.0]");

    let point: Point = serde_json::from_str("[3.0, 4.0]").unwrap();
    assert!(point == Point(3.0, 4.0));
}
