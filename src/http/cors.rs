use crate::cli::Args;
use http::Method;
use tower_http::cors::CorsLayer;

pub fn layer(_args: &Args) -> CorsLayer {
    CorsLayer::new()
        .allow_origin([
            // TODO: this should be configured from outside the program (config file, CLI args)
            "http://127.0.0.1:3030".parse().unwrap(),
            "http://localhost:3030".parse().unwrap(),
        ])
        .allow_headers(["content-type".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
