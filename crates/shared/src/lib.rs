//! Shared errors and configuration for hrkit.
//!
//! This crate provides the pieces every other crate leans on:
//! - Application-wide error type with stable codes
//! - Configuration management

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
