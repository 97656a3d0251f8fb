//! # BMI Core
//!
//! Everything the front end needs to turn a height and a weight into a
//! localized verdict.
//!
//! * **[`engine`]**: pure BMI computation and classification.
//! * **[`calculator`]**: the calculate/reset holder a form drives.
//! * **[`batch`]**: parallel evaluation of many measurements.
//! * **[`i18n`]**: Korean, English and Japanese message catalog.
//! * **[`advice`]**: weight-management tips per category.

pub mod advice;
pub mod batch;
pub mod calculator;
pub mod engine;
pub mod i18n;
