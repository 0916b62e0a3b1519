//! Hexagonal architecture ports (interfaces)

pub mod outbound;

pub use outbound::*;
