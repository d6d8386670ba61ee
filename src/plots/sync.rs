use crate::app_context::AppContext;
use crate::map;
use crate::map::models::{CoordinatePair, LatLng};
use crate::plots::message_types::{self, ServerSentSocketMessage, SetViewPayload, ViewStatePayload};
use crate::storage::interface::IPlotStorage;

/// Change-detection cell for the viewport bridge.
///
/// The viewport is mutable state owned by the map collaborator; this cell
/// makes sure we only reach into it when the derived center actually changed
/// by value, so rapid typing never produces redundant viewport writes.
#[derive(Copy, Clone, Debug, Default)]
pub struct ViewSynchronizer {
    last_center: Option<LatLng>,
}

impl ViewSynchronizer {
    pub fn on_center_changed(&mut self, center: LatLng) -> bool {
        if self.last_center == Some(center) {
            return false;
        }
        self.last_center = Some(center);
        true
    }
}

/// Derives the view for `pair` and pushes it to every socket attached to the
/// plot: a `SetView` first (only when the center changed since the last
/// push), then the fresh `ViewState`. Runs to completion before the caller
/// reads its next message, so a viewer never sees fresh markers next to a
/// stale center. With no attached sockets this is a no-op.
pub async fn broadcast_view_update<PS>(
    app_context: &AppContext<PS>,
    plot_id: &str,
    pair: &CoordinatePair,
) where
    PS: IPlotStorage,
{
    let derived = map::derive_center(pair);
    let socket_ids = app_context.plots.socket_ids(plot_id).await;
    if app_context
        .plots
        .record_pushed_center(plot_id, derived.center)
        .await
    {
        let set_view = ServerSentSocketMessage::SetView {
            r#type: message_types::SetView,
            payload: SetViewPayload {
                center: derived.center,
                animate: false,
            },
        };
        let raw_set_view = serde_json::to_string(&set_view).unwrap();
        app_context
            .sockets
            .broadcast_msg(&raw_set_view, &socket_ids)
            .await;
    }
    let view_state = ServerSentSocketMessage::ViewState {
        r#type: message_types::ViewState,
        payload: ViewStatePayload::new(pair),
    };
    let raw_view_state = serde_json::to_string(&view_state).unwrap();
    app_context
        .sockets
        .broadcast_msg(&raw_view_state, &socket_ids)
        .await;
}
