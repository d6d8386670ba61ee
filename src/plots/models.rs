use crate::map::models::CoordinatePair;
use crate::plots::sync::ViewSynchronizer;

/// One live coordinate pair plus the sockets currently viewing it.
///
/// Plots are never persisted; they live from creation until the process
/// goes down.
#[derive(Clone, Debug, Default)]
pub struct Plot {
    pub pair: CoordinatePair,
    pub socket_ids: Vec<usize>,
    pub synchronizer: ViewSynchronizer,
}
