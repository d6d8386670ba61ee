use crate::app_context::{AppContext, RequestContext};
use crate::plots::handlers::http::{CreatePlotHttpHandler, PlotHttpHandler};
use crate::plots::handlers::responses::{CreatePlotResponse, PlotViewResponse};
use crate::plots::handlers::ws::PlotWsHandler;
use crate::plots::message_types::FieldEditPayload;
use crate::storage::interface::PlotRepo;
use crate::storage::plots::HashMapPlotsStorage;
use axum::extract::ws::WebSocketUpgrade;
use axum::extract::{ConnectInfo, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use std::net::SocketAddr;

#[axum::debug_handler]
pub async fn create(
    State(app_context): State<AppContext<HashMapPlotsStorage>>,
) -> Json<CreatePlotResponse> {
    let response = CreatePlotHttpHandler::new(app_context).create().await;
    Json(response)
}

#[axum::debug_handler]
pub async fn view(
    Path(plot_id): Path<String>,
    State(app_context): State<AppContext<HashMapPlotsStorage>>,
) -> Json<PlotViewResponse> {
    let request_context = RequestContext {
        plot_id,
        client_ip: None,
    };
    let response = PlotHttpHandler::new(app_context, &request_context)
        .view()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn edit_field(
    Path(plot_id): Path<String>,
    State(app_context): State<AppContext<HashMapPlotsStorage>>,
    Json(payload): Json<FieldEditPayload>,
) -> Json<PlotViewResponse> {
    let request_context = RequestContext {
        plot_id,
        client_ip: None,
    };
    let response = PlotHttpHandler::new(app_context, &request_context)
        .edit_field(payload)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn ws(
    Path(plot_id): Path<String>,
    State(app_context): State<AppContext<HashMapPlotsStorage>>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    ws: WebSocketUpgrade,
) -> Response {
    if !app_context.plots.exists(&plot_id).await {
        return StatusCode::NOT_FOUND.into_response();
    }
    let client_ip = connect_info.map(|ConnectInfo(client_ip)| client_ip);
    ws.on_upgrade(move |socket| async move {
        PlotWsHandler::new(app_context, plot_id, client_ip, socket)
            .await
            .on_viewer_connected()
            .await
    })
    .into_response()
}
