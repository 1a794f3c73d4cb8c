//! Tests for bounding box derivation

use crate::geo::distance::bounding_box;
use crate::geo::{BoundedBox, Coordinate, DistanceUnit};

#[test]
fn test_box_contains_center() {
    let center = Coordinate::new(37.0, -122.0);
    let bbox = bounding_box(center, 100.0, DistanceUnit::Kilometers);

    assert!(bbox.lat_min <= center.latitude && center.latitude <= bbox.lat_max);
    assert!(bbox.lon_min <= center.longitude && center.longitude <= bbox.lon_max);
    assert!(bbox.contains(&center));
}

#[test]
fn test_box_is_symmetric_around_center() {
    let center = Coordinate::new(37.0, -122.0);
    let bbox = BoundedBox::from_center_radius(center, 100.0, DistanceUnit::Kilometers);

    assert!((bbox.lat_max - center.latitude - (center.latitude - bbox.lat_min)).abs() < 1e-9);
    assert!((bbox.lon_max - center.longitude - (center.longitude - bbox.lon_min)).abs() < 1e-9);
}

#[test]
fn test_box_dimensions_match_radius() {
    let center = Coordinate::new(37.0, -122.0);
    let bbox = BoundedBox::from_center_radius(center, 100.0, DistanceUnit::Kilometers);

    // 100 km is ~0.8993 degrees of latitude either side
    assert!((bbox.height() - 2.0 * 0.8993).abs() < 0.001, "height {}", bbox.height());

    // Longitude degrees are shorter at 37N, so the box is wider than tall
    assert!(bbox.width() > bbox.height());

    assert!((bbox.area_deg_sq - bbox.width() * bbox.height()).abs() < 1e-12);
}

#[test]
fn test_zero_radius_degenerates_to_point() {
    let center = Coordinate::new(37.0, -122.0);
    let bbox = BoundedBox::from_center_radius(center, 0.0, DistanceUnit::Miles);

    assert_eq!(bbox.lat_min, bbox.lat_max);
    assert_eq!(bbox.lon_min, bbox.lon_max);
    assert_eq!(bbox.area_deg_sq, 0.0);
}

#[test]
fn test_near_pole_box_spans_full_longitude_range() {
    // At 89.9N a longitude degree is ~194 m long, so a 100 km radius
    // needs more than the whole longitude range and must clamp.
    let center = Coordinate::new(89.9, 0.0);
    let bbox = BoundedBox::from_center_radius(center, 100.0, DistanceUnit::Kilometers);

    assert_eq!(bbox.lon_min, -180.0);
    assert_eq!(bbox.lon_max, 180.0);
    assert_eq!(bbox.lat_max, 90.0);
    assert!(bbox.lat_min < 89.9);

    assert!(bbox.area_deg_sq.is_finite());
    assert!(bbox.lat_max >= bbox.lat_min);
    assert!(bbox.lon_max >= bbox.lon_min);
}

#[test]
fn test_invariants_hold_for_large_radius() {
    let center = Coordinate::new(-45.0, 170.0);
    let bbox = BoundedBox::from_center_radius(center, 5000.0, DistanceUnit::Miles);

    assert!(bbox.lat_max >= bbox.lat_min);
    assert!(bbox.lon_max >= bbox.lon_min);
    assert!(bbox.area_deg_sq >= 0.0);
    assert!(bbox.contains(&center));
}
