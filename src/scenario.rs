//! Named-scenario storage and batch projection
//!
//! Scenarios live for one session as serialized parameter sets keyed by
//! name. The projection core never depends on the storage representation;
//! loading re-validates at the same boundary as fresh input.

use std::collections::HashMap;

use log::debug;
use rayon::prelude::*;

use crate::error::RoadmapError;
use crate::plan::ProjectionParameters;
use crate::projection::{project, ProjectionResult};

/// In-memory store of named parameter sets
///
/// # Example
/// ```ignore
/// let mut store = ScenarioStore::new();
/// store.save("baseline", &params)?;
/// let restored = store.load("baseline")?;
/// let results = store.project_all()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioStore {
    scenarios: HashMap<String, String>,
}

impl ScenarioStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize and store a parameter set under a name, replacing any
    /// previous scenario with the same name
    pub fn save(&mut self, name: &str, params: &ProjectionParameters) -> Result<(), RoadmapError> {
        let encoded = serde_json::to_string(params)?;
        debug!("saving scenario '{}' ({} bytes)", name, encoded.len());
        self.scenarios.insert(name.to_string(), encoded);
        Ok(())
    }

    /// Load a stored parameter set by name
    ///
    /// Deserialized parameters go through the same validation as freshly
    /// collected input.
    pub fn load(&self, name: &str) -> Result<ProjectionParameters, RoadmapError> {
        let encoded = self
            .scenarios
            .get(name)
            .ok_or_else(|| RoadmapError::UnknownScenario(name.to_string()))?;
        let params: ProjectionParameters = serde_json::from_str(encoded)?;
        params.validate()?;
        Ok(params)
    }

    /// Remove a scenario; true if it existed
    pub fn remove(&mut self, name: &str) -> bool {
        self.scenarios.remove(name).is_some()
    }

    /// Stored scenario names, sorted for stable display
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.scenarios.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Project every stored scenario
    ///
    /// Each run is an independent pure computation, so the scenarios fan out
    /// across threads. Results come back in name order.
    pub fn project_all(&self) -> Result<Vec<(String, ProjectionResult)>, RoadmapError> {
        let named: Vec<(String, ProjectionParameters)> = self
            .names()
            .into_iter()
            .map(|name| self.load(&name).map(|params| (name, params)))
            .collect::<Result<_, _>>()?;

        Ok(named
            .into_par_iter()
            .map(|(name, params)| {
                let result = project(&params);
                (name, result)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benefits::SocialSecurity;
    use crate::plan::LumpSum;

    fn test_params() -> ProjectionParameters {
        ProjectionParameters {
            current_age: 30,
            retirement_age: 65,
            starting_balance: 40_000.0,
            monthly_contribution: 400.0,
            growth_rate: 0.07,
            withdrawal_rate: 0.04,
            inflation_rate: 0.025,
            employer_match_percent: 1.0,
            employer_match_cap: 400.0,
            disability_benefit: 1701.48,
            lump_sum: Some(LumpSum { age: 45, amount: 25_000.0 }),
            social_security: Some(SocialSecurity {
                monthly_amount: 2200.0,
                start_age: 67,
            }),
        }
    }

    #[test]
    fn test_save_load_roundtrip() {
        let mut store = ScenarioStore::new();
        let params = test_params();

        store.save("baseline", &params).unwrap();
        assert_eq!(store.load("baseline").unwrap(), params);
    }

    #[test]
    fn test_unknown_scenario() {
        let store = ScenarioStore::new();
        let err = store.load("missing").unwrap_err();
        assert!(matches!(err, RoadmapError::UnknownScenario(name) if name == "missing"));
    }

    #[test]
    fn test_save_replaces_and_remove_deletes() {
        let mut store = ScenarioStore::new();
        let mut params = test_params();

        store.save("plan", &params).unwrap();
        params.withdrawal_rate = 0.05;
        store.save("plan", &params).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.load("plan").unwrap().withdrawal_rate, 0.05);

        assert!(store.remove("plan"));
        assert!(!store.remove("plan"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_project_all_covers_every_scenario() {
        let mut store = ScenarioStore::new();
        for (name, rate) in [("swr_3pct", 0.03), ("swr_4pct", 0.04), ("swr_5pct", 0.05)] {
            let mut params = test_params();
            params.withdrawal_rate = rate;
            store.save(name, &params).unwrap();
        }

        let results = store.project_all().unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, "swr_3pct");
        for (_, result) in &results {
            assert_eq!(result.years.len(), 71);
        }

        // Lower withdrawal rate leaves a larger final balance
        let final_balance =
            |idx: usize| results[idx].1.years.last().unwrap().balance_end_of_year;
        assert!(final_balance(0) > final_balance(2));
    }
}
