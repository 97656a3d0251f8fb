//! # Health Models
//!
//! Value objects consumed and produced by the BMI engine.
//!
//! * [`measurement::Measurement`]: height and weight as entered by the user.
//! * [`age_group::AgeGroup`]: selects which threshold table applies.
//! * [`category::BmiCategory`]: the health-status label of a BMI value.
//! * [`category::BmiResult`]: a computed BMI together with its category.

pub mod age_group;
pub mod category;
pub mod measurement;

pub use age_group::{AgeGroup, ChildFloor};
pub use category::{BmiCategory, BmiResult};
pub use measurement::Measurement;
