use crate::cli::Args;
use crate::map::consts::FALLBACK_CENTER;
use crate::pages::responses::MapOptionsResponse;
use std::sync::OnceLock;

pub mod handlers;
pub mod html;
pub mod responses;

static MAP_OPTIONS: OnceLock<MapOptionsResponse> = OnceLock::new();

/// Captures the map collaborator's configuration once at startup. The page
/// never sees CLI args directly; it asks for these options over HTTP.
pub fn init(args: &Args) {
    MAP_OPTIONS.get_or_init(|| MapOptionsResponse {
        tile_url: args.tile_url.clone(),
        fallback_center: FALLBACK_CENTER,
        default_zoom: args.default_zoom,
        marker_icon_url: args.marker_icon_url.to_string(),
        marker_icon_2x_url: args.marker_icon_2x_url.to_string(),
        marker_shadow_url: args.marker_shadow_url.to_string(),
    });
}

pub fn options() -> &'static MapOptionsResponse {
    MAP_OPTIONS
        .get()
        .expect("`MAP_OPTIONS` was not initialized.")
}
