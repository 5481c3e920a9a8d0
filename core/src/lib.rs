//! Nutrikit Core Library
//!
//! Pure domain logic for the nutrition app: body-metrics calculations
//! (BMI, TDEE, macro targets) and the food-battle game session. No I/O,
//! no async — the application layer wires these into storage and services.

pub mod battle;
pub mod body_metrics;
pub mod catalog;
pub mod errors;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use battle::*;
pub use body_metrics::*;
pub use catalog::*;
pub use errors::*;
pub use units::*;
