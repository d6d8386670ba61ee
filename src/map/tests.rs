use crate::map::consts::FALLBACK_CENTER;
use crate::map::derive_center;
use crate::map::models::{CoordinateField, CoordinatePair, CoordinateTarget, LatLng, Validity};

#[test]
fn test_midpoint_is_exact_componentwise_average() {
    let pairs = [
        ((40.7128, -74.0060), (34.0522, -118.2437)),
        ((0.0, 0.0), (0.0, 0.0)),
        ((-33.8688, 151.2093), (51.5074, -0.1278)),
        ((89.9, 179.9), (-89.9, -179.9)),
    ];
    for ((lat_1, lng_1), (lat_2, lng_2)) in pairs {
        let pair = CoordinatePair {
            first: LatLng {
                lat: lat_1,
                lng: lng_1,
            },
            second: LatLng {
                lat: lat_2,
                lng: lng_2,
            },
        };

        let derived = derive_center(&pair);

        assert!(derived.both_valid);
        assert_eq!(derived.center.lat, (lat_1 + lat_2) / 2.0);
        assert_eq!(derived.center.lng, (lng_1 + lng_2) / 2.0);
    }
}

#[test]
fn test_default_pair_centers_between_nyc_and_la() {
    let derived = derive_center(&CoordinatePair::default());

    assert!(derived.both_valid);
    assert!((derived.center.lat - 37.3825).abs() < 1e-9);
    assert!((derived.center.lng - -96.14485).abs() < 1e-9);
}

#[test]
fn test_one_malformed_coordinate_falls_back() {
    let mut pair = CoordinatePair::default();
    pair.set_field(CoordinateTarget::First, CoordinateField::Lat, "abc");

    let derived = derive_center(&pair);

    assert!(!derived.both_valid);
    assert_eq!(derived.center, FALLBACK_CENTER);
    // The untouched coordinate stays valid on its own.
    assert!(!pair.first.is_valid());
    assert!(pair.second.is_valid());
    assert_eq!(pair.validity(), Validity::OneValid);
}

#[test]
fn test_both_malformed_coordinates_fall_back() {
    let mut pair = CoordinatePair::default();
    pair.set_field(CoordinateTarget::First, CoordinateField::Lat, "");
    pair.set_field(CoordinateTarget::Second, CoordinateField::Lng, "not a number");

    let derived = derive_center(&pair);

    assert!(!derived.both_valid);
    assert_eq!(derived.center, FALLBACK_CENTER);
    assert_eq!(pair.validity(), Validity::NoneValid);
}

#[test]
fn test_derivation_is_idempotent() {
    let mut pair = CoordinatePair::default();
    pair.set_field(CoordinateTarget::Second, CoordinateField::Lat, "oops");

    assert_eq!(derive_center(&pair), derive_center(&pair));

    pair.set_field(CoordinateTarget::Second, CoordinateField::Lat, "34.0522");

    assert_eq!(derive_center(&pair), derive_center(&pair));
}

#[test]
fn test_set_field_round_trips_numeric_text() {
    let mut pair = CoordinatePair::default();
    pair.set_field(CoordinateTarget::First, CoordinateField::Lat, "40.7128");

    assert_eq!(pair.first.lat, 40.7128);
}

#[test]
fn test_correcting_a_field_restores_the_original_midpoint() {
    let original = derive_center(&CoordinatePair::default());

    let mut pair = CoordinatePair::default();
    pair.set_field(CoordinateTarget::First, CoordinateField::Lat, "abc");
    assert_eq!(pair.validity(), Validity::OneValid);

    pair.set_field(CoordinateTarget::First, CoordinateField::Lat, "40.7128");

    assert_eq!(pair.validity(), Validity::BothValid);
    assert_eq!(derive_center(&pair), original);
}

#[test]
fn test_out_of_range_values_are_not_rejected() {
    let mut pair = CoordinatePair::default();
    pair.set_field(CoordinateTarget::First, CoordinateField::Lat, "1234.5");
    pair.set_field(CoordinateTarget::First, CoordinateField::Lng, "-999.0");

    assert!(pair.first.is_valid());
    assert!(derive_center(&pair).both_valid);
}

#[test]
fn test_each_setter_touches_only_its_own_coordinate() {
    let mut pair = CoordinatePair::default();
    let second_before = pair.second;

    pair.set_field(CoordinateTarget::First, CoordinateField::Lng, "12.5");

    assert_eq!(pair.second, second_before);
    assert_eq!(pair.first.lng, 12.5);
}
