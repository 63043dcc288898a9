//! SafeBAC Library
//!
//! Blood alcohol concentration estimation: unit conversion, legal limits,
//! Widmark-style estimates, and time-to-sober projections.

pub mod bac;
pub mod build_info;
pub mod config;
pub mod error;
pub mod models;

pub use error::{BacError, BacResult, ValidationError};
