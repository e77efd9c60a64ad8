//! Retirement Roadmap - year-by-year retirement projection engine
//!
//! This library provides:
//! - Disability compensation benefit resolution (rate table or custom override)
//! - Deterministic balance and income projection from current age through 100
//! - A guided intake flow for collecting parameters step by step
//! - Named-scenario storage with parallel batch projection
//! - Table, CSV, and chart-series output

pub mod benefits;
pub mod error;
pub mod plan;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use benefits::{BenefitSource, DisabilityRateTable, MaritalStatus, SocialSecurity};
pub use error::RoadmapError;
pub use plan::{Intake, LumpSum, ProjectionParameters, FINAL_AGE};
pub use projection::{project, ProjectionResult, YearRecord};
pub use scenario::ScenarioStore;
