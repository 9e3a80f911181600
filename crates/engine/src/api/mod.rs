//! Engine-edge components handed to transport gateways.

mod connections;

pub use connections::ConnectionManager;
