use crate::map::models::LatLng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptionsResponse {
    pub tile_url: String,
    pub fallback_center: LatLng,
    pub default_zoom: u8,
    pub marker_icon_url: String,
    pub marker_icon_2x_url: String,
    pub marker_shadow_url: String,
}
