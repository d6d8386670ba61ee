pub mod consts;
pub mod interface;
pub mod plots;
pub mod sockets;
