//! Shared types, errors, and configuration for PayCalc.
//!
//! This crate provides common types used across all other crates:
//! - Money display types with decimal rounding
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, CalculatorConfig, ServerConfig};
pub use error::{AppError, AppResult};
