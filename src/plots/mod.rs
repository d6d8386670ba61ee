pub mod handlers;
pub mod message_types;
pub mod models;
pub mod sync;
#[cfg(test)]
pub mod tests;
