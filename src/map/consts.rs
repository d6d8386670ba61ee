use crate::map::models::LatLng;

/// New York City.
pub const DEFAULT_FIRST_COORDINATE: LatLng = LatLng {
    lat: 40.7128,
    lng: -74.0060,
};

/// Los Angeles.
pub const DEFAULT_SECOND_COORDINATE: LatLng = LatLng {
    lat: 34.0522,
    lng: -118.2437,
};

/// Where the viewport goes while the pair is not fully valid.
pub const FALLBACK_CENTER: LatLng = LatLng {
    lat: 40.7128,
    lng: -74.0060,
};
