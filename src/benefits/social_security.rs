//! Social Security benefit timing

use serde::{Deserialize, Serialize};

/// A planned Social Security benefit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SocialSecurity {
    /// Monthly benefit once payments begin
    pub monthly_amount: f64,

    /// Age at which payments begin
    pub start_age: u8,
}

impl SocialSecurity {
    /// Monthly income contributed at a given age (zero before the start age)
    pub fn monthly_income_at(&self, age: u8) -> f64 {
        if age >= self.start_age {
            self.monthly_amount
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_gated_by_start_age() {
        let ss = SocialSecurity {
            monthly_amount: 2200.0,
            start_age: 67,
        };

        assert_eq!(ss.monthly_income_at(66), 0.0);
        assert_eq!(ss.monthly_income_at(67), 2200.0);
        assert_eq!(ss.monthly_income_at(100), 2200.0);
    }
}
