//! Step gating for the two-step quote form.
//!
//! "Next" (step 1 → step 2) needs a concrete location; "submit" needs a
//! concrete intended use. Both are pure functions of the current field values.

use serde::{Deserialize, Serialize};

use crate::config::FormConfig;

/// Placeholder value the form uses for "nothing chosen yet".
pub const SELECTION_NULL: &str = "selection-null";

/// Convert a raw select value into a concrete choice.
///
/// The placeholder and blank values become `None`.
pub fn field_value(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() || value == SELECTION_NULL {
        None
    } else {
        Some(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationFields {
    pub country: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormProgressState {
    pub location: LocationFields,
    pub intended_use: Option<String>,
}

impl FormProgressState {
    /// Fresh form: no country, no use, region preselected from config.
    pub fn initial(config: &FormConfig) -> Self {
        Self {
            location: LocationFields {
                country: None,
                region: config.default_region.clone(),
            },
            intended_use: None,
        }
    }

    pub fn set_country(&mut self, raw: &str) {
        self.location.country = field_value(raw);
    }

    pub fn set_region(&mut self, raw: &str) {
        self.location.region = field_value(raw);
    }

    pub fn set_intended_use(&mut self, raw: &str) {
        self.intended_use = field_value(raw);
    }
}

/// Enablement of the two gated controls.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormGates {
    pub next_enabled: bool,
    pub submit_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormProgressGate {
    default_country: String,
}

impl FormProgressGate {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            default_country: config.default_country.clone(),
        }
    }

    /// Whether the region field applies to the chosen country.
    pub fn region_required(&self, location: &LocationFields) -> bool {
        location.country.as_deref() == Some(self.default_country.as_str())
    }

    pub fn location_complete(&self, location: &LocationFields) -> bool {
        match location.country {
            None => false,
            Some(_) if self.region_required(location) => location.region.is_some(),
            Some(_) => true,
        }
    }

    pub fn use_complete(&self, state: &FormProgressState) -> bool {
        state.intended_use.is_some()
    }

    pub fn evaluate(&self, state: &FormProgressState) -> FormGates {
        let gates = FormGates {
            next_enabled: self.location_complete(&state.location),
            submit_enabled: self.use_complete(state),
        };
        tracing::debug!(
            next_enabled = gates.next_enabled,
            submit_enabled = gates.submit_enabled,
            "form gates evaluated"
        );
        gates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn gate() -> FormProgressGate {
        FormProgressGate::new(&FormConfig::default())
    }

    fn state(country: &str, region: &str, intended_use: &str) -> FormProgressState {
        let mut state = FormProgressState::default();
        state.set_country(country);
        state.set_region(region);
        state.set_intended_use(intended_use);
        state
    }

    #[test]
    fn placeholder_and_blank_are_no_selection() {
        assert_eq!(field_value(SELECTION_NULL), None);
        assert_eq!(field_value("  "), None);
        assert_eq!(field_value(" Canada "), Some("Canada".to_string()));
    }

    #[test]
    fn initial_state_blocks_both_controls() {
        let config = FormConfig::default();
        let state = FormProgressState::initial(&config);
        assert_eq!(state.location.region.as_deref(), Some("Alabama"));
        assert_eq!(gate().evaluate(&state), FormGates::default());
    }

    #[test]
    fn default_country_with_preselected_region_enables_next() {
        let mut state = FormProgressState::initial(&FormConfig::default());
        state.set_country("United States");
        assert!(gate().evaluate(&state).next_enabled);
    }

    #[test]
    fn default_country_requires_region() {
        let gates = gate().evaluate(&state("United States", SELECTION_NULL, ""));
        assert!(!gates.next_enabled);

        let gates = gate().evaluate(&state("United States", "Texas", ""));
        assert!(gates.next_enabled);
    }

    #[test]
    fn other_country_ignores_region() {
        let gate = gate();
        let location = state("Canada", SELECTION_NULL, "").location;
        assert!(!gate.region_required(&location));
        assert!(gate.location_complete(&location));
    }

    #[test]
    fn missing_country_blocks_next() {
        assert!(!gate().evaluate(&state(SELECTION_NULL, "Texas", "Coaching")).next_enabled);
    }

    #[test]
    fn submit_follows_intended_use() {
        let gate = gate();
        assert!(!gate.evaluate(&state("", "", SELECTION_NULL)).submit_enabled);
        assert!(gate.evaluate(&state("", "", "Team training")).submit_enabled);
    }

    #[test]
    fn gates_reflect_current_values_not_history() {
        let gate = gate();
        let mut state = state("United States", "Texas", "Coaching");
        assert_eq!(
            gate.evaluate(&state),
            FormGates { next_enabled: true, submit_enabled: true }
        );

        state.set_region(SELECTION_NULL);
        state.set_intended_use(SELECTION_NULL);
        assert_eq!(gate.evaluate(&state), FormGates::default());
    }

    fn raw_choice() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(SELECTION_NULL.to_string()),
            Just(String::new()),
            Just("United States".to_string()),
            "[A-Z][a-z]{2,10}",
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: gates are a pure function of the field values.
        #[test]
        fn evaluation_is_history_free(
            steps in prop::collection::vec((raw_choice(), raw_choice(), raw_choice()), 1..8),
        ) {
            let gate = gate();
            let mut evolving = FormProgressState::default();
            for (country, region, intended_use) in &steps {
                evolving.set_country(country);
                evolving.set_region(region);
                evolving.set_intended_use(intended_use);
            }
            let (country, region, intended_use) = steps.last().unwrap();
            let fresh = state(country, region, intended_use);
            prop_assert_eq!(gate.evaluate(&evolving), gate.evaluate(&fresh));
        }
    }
}
