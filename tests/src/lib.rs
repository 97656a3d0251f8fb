//! Cross-crate tests for the BMI workspace.

#[cfg(test)]
mod batch;
#[cfg(test)]
mod engine;
