//! Guided intake flow for collecting projection parameters
//!
//! Models the questionnaire as a forward-only state machine: each step has a
//! required-answer guard, and the accumulated answers are replaced as a whole
//! rather than mutated field by field. Finishing resolves the disability
//! benefit and validates the assembled parameter set.

use crate::benefits::{BenefitSource, DisabilityRateTable, SocialSecurity};
use crate::error::RoadmapError;

use super::params::{LumpSum, ProjectionParameters};

/// Questionnaire steps in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeStep {
    Ages,
    Balance,
    Contribution,
    Rates,
    EmployerMatch,
    Disability,
    LumpSum,
    SocialSecurity,
    Review,
}

impl IntakeStep {
    /// Next step in the flow; Review is terminal
    pub fn next(self) -> Option<IntakeStep> {
        match self {
            IntakeStep::Ages => Some(IntakeStep::Balance),
            IntakeStep::Balance => Some(IntakeStep::Contribution),
            IntakeStep::Contribution => Some(IntakeStep::Rates),
            IntakeStep::Rates => Some(IntakeStep::EmployerMatch),
            IntakeStep::EmployerMatch => Some(IntakeStep::Disability),
            IntakeStep::Disability => Some(IntakeStep::LumpSum),
            IntakeStep::LumpSum => Some(IntakeStep::SocialSecurity),
            IntakeStep::SocialSecurity => Some(IntakeStep::Review),
            IntakeStep::Review => None,
        }
    }

    /// 1-based step number for progress display
    pub fn number(self) -> u8 {
        match self {
            IntakeStep::Ages => 1,
            IntakeStep::Balance => 2,
            IntakeStep::Contribution => 3,
            IntakeStep::Rates => 4,
            IntakeStep::EmployerMatch => 5,
            IntakeStep::Disability => 6,
            IntakeStep::LumpSum => 7,
            IntakeStep::SocialSecurity => 8,
            IntakeStep::Review => 9,
        }
    }

    /// Total number of steps, for progress display
    pub const COUNT: u8 = 9;
}

/// Accumulated answers; a field stays unset until its step records it
///
/// The optional steps (lump sum, Social Security) distinguish "not answered
/// yet" from an explicit "none": the outer `Option` is the answered flag.
#[derive(Debug, Clone, Default)]
pub struct IntakeAnswers {
    pub current_age: Option<u8>,
    pub retirement_age: Option<u8>,
    pub starting_balance: Option<f64>,
    pub monthly_contribution: Option<f64>,
    pub growth_rate: Option<f64>,
    pub withdrawal_rate: Option<f64>,
    pub inflation_rate: Option<f64>,
    pub employer_match_percent: Option<f64>,
    pub employer_match_cap: Option<f64>,
    pub benefit_source: Option<BenefitSource>,
    pub lump_sum: Option<Option<LumpSum>>,
    pub social_security: Option<Option<SocialSecurity>>,
}

impl IntakeAnswers {
    pub fn with_ages(self, current_age: u8, retirement_age: u8) -> Self {
        Self {
            current_age: Some(current_age),
            retirement_age: Some(retirement_age),
            ..self
        }
    }

    pub fn with_balance(self, starting_balance: f64) -> Self {
        Self {
            starting_balance: Some(starting_balance),
            ..self
        }
    }

    pub fn with_contribution(self, monthly_contribution: f64) -> Self {
        Self {
            monthly_contribution: Some(monthly_contribution),
            ..self
        }
    }

    pub fn with_rates(self, growth_rate: f64, withdrawal_rate: f64, inflation_rate: f64) -> Self {
        Self {
            growth_rate: Some(growth_rate),
            withdrawal_rate: Some(withdrawal_rate),
            inflation_rate: Some(inflation_rate),
            ..self
        }
    }

    pub fn with_employer_match(self, percent: f64, cap: f64) -> Self {
        Self {
            employer_match_percent: Some(percent),
            employer_match_cap: Some(cap),
            ..self
        }
    }

    pub fn with_benefit(self, source: BenefitSource) -> Self {
        Self {
            benefit_source: Some(source),
            ..self
        }
    }

    pub fn with_lump_sum(self, lump_sum: Option<LumpSum>) -> Self {
        Self {
            lump_sum: Some(lump_sum),
            ..self
        }
    }

    pub fn with_social_security(self, social_security: Option<SocialSecurity>) -> Self {
        Self {
            social_security: Some(social_security),
            ..self
        }
    }

    /// Whether the required answers for a step are present
    pub fn step_complete(&self, step: IntakeStep) -> bool {
        match step {
            IntakeStep::Ages => self.current_age.is_some() && self.retirement_age.is_some(),
            IntakeStep::Balance => self.starting_balance.is_some(),
            IntakeStep::Contribution => self.monthly_contribution.is_some(),
            IntakeStep::Rates => {
                self.growth_rate.is_some()
                    && self.withdrawal_rate.is_some()
                    && self.inflation_rate.is_some()
            }
            IntakeStep::EmployerMatch => {
                self.employer_match_percent.is_some() && self.employer_match_cap.is_some()
            }
            IntakeStep::Disability => self.benefit_source.is_some(),
            IntakeStep::LumpSum => self.lump_sum.is_some(),
            IntakeStep::SocialSecurity => self.social_security.is_some(),
            IntakeStep::Review => true,
        }
    }
}

/// Forward-only questionnaire state
#[derive(Debug, Clone)]
pub struct Intake {
    step: IntakeStep,
    answers: IntakeAnswers,
}

impl Intake {
    pub fn new() -> Self {
        Self {
            step: IntakeStep::Ages,
            answers: IntakeAnswers::default(),
        }
    }

    pub fn step(&self) -> IntakeStep {
        self.step
    }

    pub fn answers(&self) -> &IntakeAnswers {
        &self.answers
    }

    /// Replace the accumulated answers (typically after a step's form submit)
    pub fn record(&mut self, answers: IntakeAnswers) {
        self.answers = answers;
    }

    /// Advance to the next step
    ///
    /// The current step's required answers must be present; there is no way
    /// back. Advancing at Review stays on Review.
    pub fn advance(&mut self) -> Result<IntakeStep, RoadmapError> {
        if !self.answers.step_complete(self.step) {
            return Err(RoadmapError::IncompleteStep(self.step));
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Resolve the benefit, validate, and produce the parameter set
    ///
    /// Only valid at the Review step with every prior step answered.
    pub fn finish(&self, table: &DisabilityRateTable) -> Result<ProjectionParameters, RoadmapError> {
        if self.step != IntakeStep::Review {
            return Err(RoadmapError::IncompleteStep(self.step));
        }

        let a = &self.answers;
        let params = ProjectionParameters {
            current_age: require(a.current_age, IntakeStep::Ages)?,
            retirement_age: require(a.retirement_age, IntakeStep::Ages)?,
            starting_balance: require(a.starting_balance, IntakeStep::Balance)?,
            monthly_contribution: require(a.monthly_contribution, IntakeStep::Contribution)?,
            growth_rate: require(a.growth_rate, IntakeStep::Rates)?,
            withdrawal_rate: require(a.withdrawal_rate, IntakeStep::Rates)?,
            inflation_rate: require(a.inflation_rate, IntakeStep::Rates)?,
            employer_match_percent: require(a.employer_match_percent, IntakeStep::EmployerMatch)?,
            employer_match_cap: require(a.employer_match_cap, IntakeStep::EmployerMatch)?,
            disability_benefit: require(a.benefit_source, IntakeStep::Disability)?.resolve(table)?,
            lump_sum: require(a.lump_sum, IntakeStep::LumpSum)?,
            social_security: require(a.social_security, IntakeStep::SocialSecurity)?,
        };

        params.validate()?;
        Ok(params)
    }
}

impl Default for Intake {
    fn default() -> Self {
        Self::new()
    }
}

fn require<T>(answer: Option<T>, step: IntakeStep) -> Result<T, RoadmapError> {
    answer.ok_or(RoadmapError::IncompleteStep(step))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benefits::MaritalStatus;

    fn answered() -> IntakeAnswers {
        IntakeAnswers::default()
            .with_ages(30, 65)
            .with_balance(40_000.0)
            .with_contribution(400.0)
            .with_rates(0.07, 0.04, 0.025)
            .with_employer_match(1.0, 400.0)
            .with_benefit(BenefitSource::Table {
                rating: 70,
                marital: MaritalStatus::Married,
            })
            .with_lump_sum(None)
            .with_social_security(None)
    }

    #[test]
    fn test_guard_blocks_empty_step() {
        let mut intake = Intake::new();
        let err = intake.advance().unwrap_err();
        assert!(matches!(err, RoadmapError::IncompleteStep(IntakeStep::Ages)));
        assert_eq!(intake.step(), IntakeStep::Ages);
    }

    #[test]
    fn test_full_walk_produces_params() {
        let mut intake = Intake::new();
        intake.record(answered());

        for expected in [
            IntakeStep::Balance,
            IntakeStep::Contribution,
            IntakeStep::Rates,
            IntakeStep::EmployerMatch,
            IntakeStep::Disability,
            IntakeStep::LumpSum,
            IntakeStep::SocialSecurity,
            IntakeStep::Review,
        ] {
            assert_eq!(intake.advance().unwrap(), expected);
        }

        let params = intake.finish(&DisabilityRateTable::rates_2025()).unwrap();
        assert_eq!(params.current_age, 30);
        assert_eq!(params.disability_benefit, 1701.48);
        assert!(params.lump_sum.is_none());
        assert!(params.social_security.is_none());
    }

    #[test]
    fn test_finish_requires_review_step() {
        let mut intake = Intake::new();
        intake.record(answered());
        intake.advance().unwrap();

        let err = intake.finish(&DisabilityRateTable::rates_2025()).unwrap_err();
        assert!(matches!(err, RoadmapError::IncompleteStep(IntakeStep::Balance)));
    }

    #[test]
    fn test_partial_answers_block_later_step() {
        let mut intake = Intake::new();
        intake.record(IntakeAnswers::default().with_ages(30, 65).with_balance(0.0));

        intake.advance().unwrap(); // Ages -> Balance
        intake.advance().unwrap(); // Balance -> Contribution
        let err = intake.advance().unwrap_err();
        assert!(matches!(
            err,
            RoadmapError::IncompleteStep(IntakeStep::Contribution)
        ));
    }

    #[test]
    fn test_optional_steps_take_explicit_none() {
        let answers = answered();
        assert!(answers.step_complete(IntakeStep::LumpSum));
        assert!(answers.step_complete(IntakeStep::SocialSecurity));

        let unanswered = IntakeAnswers::default();
        assert!(!unanswered.step_complete(IntakeStep::LumpSum));
    }

    #[test]
    fn test_finish_rejects_invalid_ranges() {
        let mut intake = Intake::new();
        intake.record(answered().with_ages(65, 65));

        while intake.step() != IntakeStep::Review {
            intake.advance().unwrap();
        }

        let err = intake.finish(&DisabilityRateTable::rates_2025()).unwrap_err();
        assert!(matches!(err, RoadmapError::InvalidParameterRange(_)));
    }

    #[test]
    fn test_step_numbering() {
        assert_eq!(IntakeStep::Ages.number(), 1);
        assert_eq!(IntakeStep::Review.number(), IntakeStep::COUNT);
        assert!(IntakeStep::Review.next().is_none());
    }
}
