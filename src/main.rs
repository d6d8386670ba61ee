use clap::Parser;
use std::net::SocketAddr;

mod app_context;
mod cli;
mod health;
mod http;
mod logging;
mod map;
mod pages;
mod plots;
mod storage;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    logging::init(&args);
    pages::init(&args);
    let app_context = app_context::init();
    let router = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Failed to run the HTTP server.");
}
