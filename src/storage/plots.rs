use crate::map::models::{CoordinateField, CoordinatePair, CoordinateTarget, LatLng};
use crate::plots::models::Plot;
use crate::storage::consts::PLOT_ID_LENGTH;
use crate::storage::interface::{CoordinatePairRepo, IPlotStorage, PlotRepo, PlotSocketsRepo};
use rand::{distributions::Alphanumeric, Rng};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct HashMapPlotsStorage {
    storage: Arc<RwLock<HashMap<String, Plot>>>,
}

impl IPlotStorage for HashMapPlotsStorage {}

impl PlotRepo for HashMapPlotsStorage {
    async fn exists(&self, plot_id: &str) -> bool {
        self.storage.read().await.contains_key(plot_id)
    }

    async fn create(&self) -> String {
        let plot_id = generate_plot_id();
        self.storage
            .write()
            .await
            .insert(plot_id.clone(), Plot::default());
        plot_id
    }
}

impl CoordinatePairRepo for HashMapPlotsStorage {
    async fn pair(&self, plot_id: &str) -> CoordinatePair {
        self.storage.read().await.get(plot_id).unwrap().pair
    }

    async fn set_field(
        &self,
        plot_id: &str,
        target: CoordinateTarget,
        field: CoordinateField,
        raw_text: &str,
    ) -> CoordinatePair {
        let mut storage_guard = self.storage.write().await;
        let plot = storage_guard.get_mut(plot_id).unwrap();
        plot.pair.set_field(target, field, raw_text);
        plot.pair
    }

    async fn record_pushed_center(&self, plot_id: &str, center: LatLng) -> bool {
        self.storage
            .write()
            .await
            .get_mut(plot_id)
            .unwrap()
            .synchronizer
            .on_center_changed(center)
    }
}

impl PlotSocketsRepo for HashMapPlotsStorage {
    async fn attach_socket(&self, plot_id: &str, socket_id: usize) {
        self.storage
            .write()
            .await
            .get_mut(plot_id)
            .unwrap()
            .socket_ids
            .push(socket_id);
    }

    async fn detach_socket(&self, plot_id: &str, socket_id: usize) {
        self.storage
            .write()
            .await
            .get_mut(plot_id)
            .unwrap()
            .socket_ids
            .retain(|&attached_socket_id| attached_socket_id != socket_id);
    }

    async fn socket_ids(&self, plot_id: &str) -> Vec<usize> {
        self.storage
            .read()
            .await
            .get(plot_id)
            .unwrap()
            .socket_ids
            .clone()
    }
}

fn generate_plot_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(PLOT_ID_LENGTH)
        .map(char::from)
        .collect()
}
