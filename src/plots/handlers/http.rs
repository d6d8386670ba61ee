use crate::app_context::{AppContext, RequestContext};
use crate::plots::handlers::responses::{
    CreatePlotResponse, PlotViewResponse, PlotViewResponseError,
};
use crate::plots::message_types::{FieldEditPayload, ViewStatePayload};
use crate::plots::sync;
use crate::storage::interface::IPlotStorage;

pub struct CreatePlotHttpHandler<PS: IPlotStorage> {
    app_context: AppContext<PS>,
}

impl<PS> CreatePlotHttpHandler<PS>
where
    PS: IPlotStorage,
{
    pub fn new(app_context: AppContext<PS>) -> Self {
        Self { app_context }
    }

    pub async fn create(&self) -> CreatePlotResponse {
        let plot_id = self.app_context.plots.create().await;
        tracing::info!("Created plot {plot_id}.");
        CreatePlotResponse { plot_id }
    }
}

pub struct PlotHttpHandler<'a, PS: IPlotStorage> {
    app_context: AppContext<PS>,
    request_context: &'a RequestContext,
}

impl<'a, PS> PlotHttpHandler<'a, PS>
where
    PS: IPlotStorage,
{
    pub fn new(app_context: AppContext<PS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn view(&self) -> PlotViewResponse {
        let plot_id = &self.request_context.plot_id;
        if !self.app_context.plots.exists(plot_id).await {
            return PlotViewResponse {
                error: true,
                error_code: Some(PlotViewResponseError::PlotNotFound),
                view: None,
            };
        }
        let pair = self.app_context.plots.pair(plot_id).await;
        PlotViewResponse {
            error: false,
            error_code: None,
            view: Some(ViewStatePayload::new(&pair)),
        }
    }

    /// Applies one field edit and synchronizes any attached viewers exactly
    /// like the websocket path does.
    pub async fn edit_field(&self, payload: FieldEditPayload) -> PlotViewResponse {
        let plot_id = &self.request_context.plot_id;
        if !self.app_context.plots.exists(plot_id).await {
            return PlotViewResponse {
                error: true,
                error_code: Some(PlotViewResponseError::PlotNotFound),
                view: None,
            };
        }
        let pair = self
            .app_context
            .plots
            .set_field(plot_id, payload.target, payload.field, &payload.raw_text)
            .await;
        sync::broadcast_view_update(&self.app_context, plot_id, &pair).await;
        PlotViewResponse {
            error: false,
            error_code: None,
            view: Some(ViewStatePayload::new(&pair)),
        }
    }
}
