//! # Nav Shared
//! 
//! Configuration, telemetry, and common types shared by the navigation crates.

pub mod constants;
pub mod types;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
