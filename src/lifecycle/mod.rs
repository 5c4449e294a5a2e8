//! Orchestration: configuration, actor startup and shutdown, and tracing setup.

pub mod config;
pub mod restaurant_system;
pub mod tracing;

pub use config::SystemConfig;
pub use restaurant_system::RestaurantSystem;
