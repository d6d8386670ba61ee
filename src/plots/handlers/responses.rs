use crate::plots::message_types::ViewStatePayload;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlotResponse {
    pub plot_id: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotViewResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<PlotViewResponseError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewStatePayload>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlotViewResponseError {
    PlotNotFound,
}
