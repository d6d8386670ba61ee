use crate::storage::interface::IPlotStorage;
use crate::storage::plots::HashMapPlotsStorage;
use crate::storage::sockets::HashMapClientSocketsStorage;
use std::net::SocketAddr;

#[derive(Clone, Default)]
pub struct AppContext<PS: IPlotStorage> {
    pub plots: PS,
    pub sockets: HashMapClientSocketsStorage,
}

pub fn init() -> AppContext<HashMapPlotsStorage> {
    AppContext::default()
}

pub struct RequestContext {
    pub plot_id: String,
    pub client_ip: Option<SocketAddr>,
}
