use crate::map::consts::{DEFAULT_FIRST_COORDINATE, DEFAULT_SECOND_COORDINATE};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// A coordinate is valid iff both fields are real numbers. Out-of-range
    /// values are deliberately not rejected; only NaN marks a field as
    /// malformed.
    pub fn is_valid(&self) -> bool {
        !self.lat.is_nan() && !self.lng.is_nan()
    }
}

/// Which coordinate of the pair an edit targets.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoordinateTarget {
    First,
    Second,
}

/// Which field of the targeted coordinate an edit targets.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CoordinateField {
    Lat,
    Lng,
}

/// Validity of the pair as a whole.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Validity {
    NoneValid,
    OneValid,
    BothValid,
}

/// Two independently owned coordinates. Each side is only ever mutated
/// through [`CoordinatePair::set_field`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoordinatePair {
    pub first: LatLng,
    pub second: LatLng,
}

impl Default for CoordinatePair {
    fn default() -> Self {
        Self {
            first: DEFAULT_FIRST_COORDINATE,
            second: DEFAULT_SECOND_COORDINATE,
        }
    }
}

impl CoordinatePair {
    /// Applies one field edit. Text that does not parse as a float stores
    /// NaN instead of failing: "currently invalid" is a normal transient
    /// state while the user is typing, not an error.
    pub fn set_field(&mut self, target: CoordinateTarget, field: CoordinateField, raw_text: &str) {
        let value = raw_text.trim().parse::<f64>().unwrap_or(f64::NAN);
        let coordinate = match target {
            CoordinateTarget::First => &mut self.first,
            CoordinateTarget::Second => &mut self.second,
        };
        match field {
            CoordinateField::Lat => coordinate.lat = value,
            CoordinateField::Lng => coordinate.lng = value,
        }
    }

    pub fn validity(&self) -> Validity {
        match (self.first.is_valid(), self.second.is_valid()) {
            (true, true) => Validity::BothValid,
            (false, false) => Validity::NoneValid,
            _ => Validity::OneValid,
        }
    }
}
