//! Projection parameters and the guided intake flow

mod intake;
mod params;

pub use intake::{Intake, IntakeAnswers, IntakeStep};
pub use params::{LumpSum, ProjectionParameters, FINAL_AGE};
