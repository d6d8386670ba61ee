pub mod http;
pub mod plot;
pub mod responses;
pub mod ws;
