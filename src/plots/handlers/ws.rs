use crate::app_context::{AppContext, RequestContext};
use crate::logging::consts::DEFAULT_CLIENT_IP;
use crate::map;
use crate::plots::message_types::{
    self, ClientSentSocketMessage, ServerSentSocketMessage, SetViewPayload, ViewStatePayload,
};
use crate::plots::sync;
use crate::storage::interface::IPlotStorage;
use axum::extract::ws::{Message, WebSocket};
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use std::net::SocketAddr;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub struct PlotWsHandler<PS: IPlotStorage> {
    app_context: AppContext<PS>,
    request_context: RequestContext,
    socket_id: usize,
    viewer_ws_tx: Option<SplitSink<WebSocket, Message>>,
    viewer_ws_rx: SplitStream<WebSocket>,
    rx: Option<UnboundedReceiverStream<Message>>,
}

impl<PS> PlotWsHandler<PS>
where
    PS: IPlotStorage,
{
    pub async fn new(
        app_context: AppContext<PS>,
        plot_id: String,
        client_ip: Option<SocketAddr>,
        websocket: WebSocket,
    ) -> Self {
        let request_context = RequestContext { plot_id, client_ip };
        // Split the socket into a sender and receiver of messages.
        // Use an unbounded channel to handle buffering and flushing of messages to the websocket.
        let (viewer_ws_tx, viewer_ws_rx) = websocket.split();
        let (tx, rx) = mpsc::unbounded_channel();
        let rx = UnboundedReceiverStream::new(rx);
        let socket_id = app_context.sockets.add(tx).await;
        Self {
            app_context,
            request_context,
            socket_id,
            viewer_ws_tx: Some(viewer_ws_tx),
            viewer_ws_rx,
            rx: Some(rx),
        }
    }

    pub async fn on_viewer_connected(&mut self) {
        let mut viewer_ws_tx = self.viewer_ws_tx.take().unwrap();
        let mut rx = self.rx.take().unwrap();
        tokio::task::spawn(async move {
            while let Some(message) = rx.next().await {
                if let Err(e) = viewer_ws_tx.send(message).await {
                    tracing::warn!("Websocket send error: {e}");
                }
            }
        });
        self.app_context
            .plots
            .attach_socket(&self.request_context.plot_id, self.socket_id)
            .await;
        self.push_initial_view().await;
        let socket_id = self.socket_id;
        while let Some(result) = self.viewer_ws_rx.next().await {
            let message = match result {
                Ok(message) => message,
                Err(e) => {
                    tracing::warn!("Websocket error (socket_id={socket_id}): {e}");
                    break;
                }
            };
            self.on_new_message(message).await;
        }
        self.on_viewer_disconnected().await;
    }

    /// A freshly mounted map knows nothing yet: seed it with an
    /// unconditional viewport push and the current view state.
    async fn push_initial_view(&self) {
        let pair = self
            .app_context
            .plots
            .pair(&self.request_context.plot_id)
            .await;
        let derived = map::derive_center(&pair);
        let set_view = ServerSentSocketMessage::SetView {
            r#type: message_types::SetView,
            payload: SetViewPayload {
                center: derived.center,
                animate: false,
            },
        };
        let raw_set_view = serde_json::to_string(&set_view).unwrap();
        self.app_context
            .sockets
            .send_msg(&raw_set_view, self.socket_id)
            .await;
        let view_state = ServerSentSocketMessage::ViewState {
            r#type: message_types::ViewState,
            payload: ViewStatePayload::new(&pair),
        };
        let raw_view_state = serde_json::to_string(&view_state).unwrap();
        self.app_context
            .sockets
            .send_msg(&raw_view_state, self.socket_id)
            .await;
    }

    async fn on_new_message(&self, msg: Message) {
        let start_time = Instant::now();
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let raw_incoming_msg = match msg {
            Message::Text(raw_incoming_msg) => raw_incoming_msg,
            Message::Close(_) => return,
            _ => {
                tracing::warn!("Skipping an unexpected non-text message: {msg:?}");
                return;
            }
        };

        let socket_message: Result<ClientSentSocketMessage, _> =
            serde_json::from_str(&raw_incoming_msg);
        let socket_message = match socket_message {
            Ok(socket_message) => socket_message,
            Err(e) => {
                tracing::warn!("Error deserializing such message: {raw_incoming_msg:?}, {e}");
                return;
            }
        };
        let message_type = socket_message.message_type_as_string();
        match socket_message {
            ClientSentSocketMessage::FieldEdited { payload, .. } => {
                // Mutation, derivation and viewport push all complete here,
                // before the next inbound message is read.
                let pair = self
                    .app_context
                    .plots
                    .set_field(
                        &self.request_context.plot_id,
                        payload.target,
                        payload.field,
                        &payload.raw_text,
                    )
                    .await;
                sync::broadcast_view_update(
                    &self.app_context,
                    &self.request_context.plot_id,
                    &pair,
                )
                .await;
            }
            ClientSentSocketMessage::Ping { .. } => {
                let ws_message = ServerSentSocketMessage::Pong {
                    r#type: message_types::Pong,
                };
                let msg = serde_json::to_string(&ws_message).unwrap();
                self.app_context
                    .sockets
                    .send_msg(&msg, self.socket_id)
                    .await;
            }
        }
        let processing_time_ns = start_time.elapsed().as_nanos();
        tracing::info!(
            task = "client_sent_ws_message",
            message_type = message_type,
            plot_id = self.request_context.plot_id,
            client_ip = self
                .request_context
                .client_ip
                .unwrap_or(DEFAULT_CLIENT_IP)
                .ip()
                .to_string(),
            processing_time_ms = processing_time_ns / 1000,
            timestamp,
        );
    }

    async fn on_viewer_disconnected(&self) {
        self.app_context.sockets.remove(self.socket_id).await;
        self.app_context
            .plots
            .detach_socket(&self.request_context.plot_id, self.socket_id)
            .await;
    }
}
