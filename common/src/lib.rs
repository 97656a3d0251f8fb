//! # Shared Models
//!
//! Types shared by every crate of the BMI workspace. Nothing in here performs
//! IO; the engine lives in `bmi-core` and the terminal front end in `bmi-cli`.
//!
//! * **[`health`]**: measurements, age groups, categories and results.
//! * **[`locale`]**: the languages the catalog ships.
//! * **[`config`]**: runtime options assembled by the binary.
//! * **[`error`]**: input and engine errors.

pub mod config;
pub mod error;
pub mod health;
pub mod locale;
mod log;

#[doc(hidden)]
pub use tracing;
