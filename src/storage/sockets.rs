use axum::extract::ws::Message;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

pub static NEXT_SOCKET_ID: AtomicUsize = AtomicUsize::new(1);

#[derive(Clone, Default)]
pub struct HashMapClientSocketsStorage {
    storage: Arc<RwLock<HashMap<usize, mpsc::UnboundedSender<Message>>>>,
}

impl HashMapClientSocketsStorage {
    pub async fn add(&self, socket: mpsc::UnboundedSender<Message>) -> usize {
        let socket_id = NEXT_SOCKET_ID.fetch_add(1, Ordering::Relaxed);
        self.storage.write().await.insert(socket_id, socket);
        socket_id
    }

    pub async fn remove(&self, socket_id: usize) {
        self.storage.write().await.remove(&socket_id);
    }

    pub async fn send_msg(&self, msg: &str, socket_id: usize) {
        if let Some(tx) = self.storage.read().await.get(&socket_id) {
            if let Err(_disconnected) = tx.send(Message::Text(msg.to_string())) {
                // Disconnect cleanup happens in the socket's own task,
                // nothing more to do here.
                tracing::warn!("Failed to send a message to socket {socket_id}.");
            }
        }
    }

    pub async fn broadcast_msg(&self, msg: &str, socket_ids: &[usize]) {
        for (&socket_id, tx) in self.storage.read().await.iter() {
            if socket_ids.contains(&socket_id) {
                if let Err(_disconnected) = tx.send(Message::Text(msg.to_string())) {
                    // Disconnect cleanup happens in the socket's own task,
                    // nothing more to do here.
                    tracing::warn!("Failed to broadcast a message to socket {socket_id}.");
                }
            }
        }
    }
}
