//! Nutrikit Application Layer
//!
//! Wires the pure core (body metrics, battle session) into the outside
//! world: configuration, a key-value persistence port, the explanation
//! service client, and the async battle controller with its auto-advance
//! timer.

pub mod arena;
pub mod config;
pub mod error;
pub mod explain;
pub mod goals;
pub mod storage;
pub mod telemetry;
