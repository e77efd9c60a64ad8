//! Benefit schedules feeding the projection: disability compensation rates
//! and Social Security timing

mod disability;
mod social_security;

pub use disability::{BenefitSource, DisabilityRateTable, MaritalStatus};
pub use social_security::SocialSecurity;
