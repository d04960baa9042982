// Server module entry point
// Listener creation and per-connection serving

pub mod connection;
pub mod listener;

pub use listener::create_listener;
