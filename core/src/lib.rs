//! Core library for Tasktrack
//!
//! This crate contains the core business logic, including:
//! - The task model and its validation rules
//! - The in-memory task store
//! - The use case layer and its error taxonomy

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
