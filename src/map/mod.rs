use crate::map::consts::FALLBACK_CENTER;
use crate::map::models::{CoordinatePair, LatLng};

pub mod consts;
pub mod models;
#[cfg(test)]
pub mod tests;

/// What the map viewport should look like for a given coordinate pair.
///
/// Recomputed from scratch on every derivation; nothing here is cached
/// between edits.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DerivedView {
    pub center: LatLng,
    pub both_valid: bool,
}

/// Derives the map center from the coordinate pair.
///
/// When both coordinates are well-formed the center is their componentwise
/// arithmetic midpoint. Otherwise the center falls back to
/// [`FALLBACK_CENTER`], even when exactly one coordinate is valid.
pub fn derive_center(pair: &CoordinatePair) -> DerivedView {
    if pair.first.is_valid() && pair.second.is_valid() {
        DerivedView {
            center: midpoint(pair.first, pair.second),
            both_valid: true,
        }
    } else {
        DerivedView {
            center: FALLBACK_CENTER,
            both_valid: false,
        }
    }
}

fn midpoint(first: LatLng, second: LatLng) -> LatLng {
    LatLng {
        lat: (first.lat + second.lat) / 2.0,
        lng: (first.lng + second.lng) / 2.0,
    }
}
