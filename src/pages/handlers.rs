use crate::pages;
use crate::pages::html::INDEX_PAGE;
use crate::pages::responses::MapOptionsResponse;
use axum::response::{Html, Json};

#[axum::debug_handler]
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

#[axum::debug_handler]
pub async fn map_options() -> Json<MapOptionsResponse> {
    Json(pages::options().clone())
}
