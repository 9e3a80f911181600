//! Infrastructure: ports and the adapters that ship with the engine.

pub mod clock;
pub mod memory;
pub mod ports;
