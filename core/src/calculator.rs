//! The calculate/reset holder behind an input form.
//!
//! The engine itself is stateless; this is the caller-side state: two text
//! fields, the selected age group and the last result shown.

use bmi_common::error::EngineError;
use bmi_common::health::{AgeGroup, BmiResult, ChildFloor, Measurement};
use tracing::debug;

use crate::engine;

/// What a calculate action did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// A field was empty; nothing was computed and the previous result stays.
    Skipped,
    Computed(BmiResult),
}

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    height: String,
    weight: String,
    age_group: AgeGroup,
    child_floor: ChildFloor,
    last: Option<BmiResult>,
}

impl Calculator {
    pub fn new(child_floor: ChildFloor) -> Self {
        Self {
            child_floor,
            ..Self::default()
        }
    }

    pub fn set_height(&mut self, height: impl Into<String>) {
        self.height = height.into();
    }

    pub fn set_weight(&mut self, weight: impl Into<String>) {
        self.weight = weight.into();
    }

    pub fn set_age_group(&mut self, age_group: AgeGroup) {
        self.age_group = age_group;
    }

    pub fn height(&self) -> &str {
        &self.height
    }

    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub fn age_group(&self) -> AgeGroup {
        self.age_group
    }

    pub fn last_result(&self) -> Option<BmiResult> {
        self.last
    }

    /// Runs the engine over the current fields.
    ///
    /// On error the previous result is left untouched.
    pub fn calculate(&mut self) -> Result<Outcome, EngineError> {
        let Some(measurement) = Measurement::from_input(&self.height, &self.weight)? else {
            debug!("calculation skipped, a field is empty");
            return Ok(Outcome::Skipped);
        };

        let result: BmiResult = engine::evaluate(&measurement, self.age_group, self.child_floor)?;
        self.last = Some(result);
        Ok(Outcome::Computed(result))
    }

    /// Clears both fields and the result and selects [`AgeGroup::Adult`] again.
    pub fn reset(&mut self) {
        *self = Self::new(self.child_floor);
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
