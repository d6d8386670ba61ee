use clap::Parser;
use std::net::SocketAddr;
use url::Url;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// Tile layer URL template handed to the map page as-is.
    #[arg(long)]
    #[arg(default_value = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png")]
    pub tile_url: String,
    #[arg(long)]
    #[arg(default_value_t = 4)]
    pub default_zoom: u8,
    // Leaflet's own icon path resolution is broken in bundled deployments,
    // so the page always overrides it with these URLs.
    #[arg(long)]
    #[arg(
        default_value = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.7.1/images/marker-icon.png"
    )]
    pub marker_icon_url: Url,
    #[arg(long)]
    #[arg(
        default_value = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.7.1/images/marker-icon-2x.png"
    )]
    pub marker_icon_2x_url: Url,
    #[arg(long)]
    #[arg(
        default_value = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.7.1/images/marker-shadow.png"
    )]
    pub marker_shadow_url: Url,
}
