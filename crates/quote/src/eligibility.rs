//! Automatic-quote eligibility.
//!
//! Only the self-serve plan gets an automatic price, and only while its
//! financed total stays at or below the ceiling. Everything else goes to sales.

use serde::{Deserialize, Serialize};

use perch_core::Money;

use crate::calculator::CostBreakdown;

pub const DEFAULT_ELIGIBLE_PLAN: &str = "Standard";
pub const DEFAULT_FINANCED_CEILING: Money = Money::from_dollars(15_000);

/// Why no automatic price is shown.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomQuoteReason {
    PlanIneligible,
    CeilingExceeded,
}

/// Outcome of one recomputation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum QuoteResult {
    Computed(CostBreakdown),
    CustomQuoteRequired { reason: CustomQuoteReason },
}

impl QuoteResult {
    pub fn custom(reason: CustomQuoteReason) -> Self {
        Self::CustomQuoteRequired { reason }
    }

    pub fn breakdown(&self) -> Option<&CostBreakdown> {
        match self {
            QuoteResult::Computed(breakdown) => Some(breakdown),
            QuoteResult::CustomQuoteRequired { .. } => None,
        }
    }

    pub fn custom_reason(&self) -> Option<CustomQuoteReason> {
        match self {
            QuoteResult::Computed(_) => None,
            QuoteResult::CustomQuoteRequired { reason } => Some(*reason),
        }
    }
}

/// Which plan may be auto-quoted and up to what financed total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityPolicy {
    pub eligible_plan: String,
    /// Inclusive: a financed total equal to the ceiling is still auto-quoted.
    pub financed_ceiling: Money,
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            eligible_plan: DEFAULT_ELIGIBLE_PLAN.to_string(),
            financed_ceiling: DEFAULT_FINANCED_CEILING,
        }
    }
}

impl EligibilityPolicy {
    /// Exact, case-sensitive plan check.
    pub fn admits_plan(&self, plan_name: &str) -> bool {
        plan_name == self.eligible_plan
    }

    /// Decide whether `breakdown` may be shown for `plan_name`.
    pub fn gate(&self, plan_name: &str, breakdown: CostBreakdown) -> QuoteResult {
        if !self.admits_plan(plan_name) {
            tracing::debug!(plan = plan_name, "plan requires a custom quote");
            return QuoteResult::custom(CustomQuoteReason::PlanIneligible);
        }
        if breakdown.total_financed > self.financed_ceiling {
            tracing::debug!(
                total_financed = %breakdown.total_financed,
                ceiling = %self.financed_ceiling,
                "financed total exceeds automatic quote ceiling"
            );
            return QuoteResult::custom(CustomQuoteReason::CeilingExceeded);
        }
        QuoteResult::Computed(breakdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown_with_financed(dollars: u64) -> CostBreakdown {
        CostBreakdown {
            total_financed: Money::from_dollars(dollars),
            ..CostBreakdown::default()
        }
    }

    #[test]
    fn non_standard_plan_is_ineligible_even_when_cheap() {
        let policy = EligibilityPolicy::default();
        let result = policy.gate("Championship", breakdown_with_financed(1));
        assert_eq!(result, QuoteResult::custom(CustomQuoteReason::PlanIneligible));
    }

    #[test]
    fn plan_check_wins_over_ceiling_check() {
        let policy = EligibilityPolicy::default();
        let result = policy.gate("Professional", breakdown_with_financed(99_999));
        assert_eq!(result.custom_reason(), Some(CustomQuoteReason::PlanIneligible));
    }

    #[test]
    fn plan_name_match_is_case_sensitive() {
        let policy = EligibilityPolicy::default();
        assert!(policy.admits_plan("Standard"));
        assert!(!policy.admits_plan("standard"));
    }

    #[test]
    fn ceiling_is_inclusive() {
        let policy = EligibilityPolicy::default();
        let at = policy.gate("Standard", breakdown_with_financed(15_000));
        assert!(at.breakdown().is_some());

        let over = CostBreakdown {
            total_financed: Money::from_cents(1_500_001),
            ..CostBreakdown::default()
        };
        assert_eq!(
            policy.gate("Standard", over),
            QuoteResult::custom(CustomQuoteReason::CeilingExceeded)
        );
    }

    #[test]
    fn custom_policy_moves_both_rules() {
        let policy = EligibilityPolicy {
            eligible_plan: "Starter".to_string(),
            financed_ceiling: Money::from_dollars(100),
        };
        assert_eq!(
            policy.gate("Standard", breakdown_with_financed(1)).custom_reason(),
            Some(CustomQuoteReason::PlanIneligible)
        );
        assert_eq!(
            policy.gate("Starter", breakdown_with_financed(101)).custom_reason(),
            Some(CustomQuoteReason::CeilingExceeded)
        );
    }

    #[test]
    fn result_serializes_with_outcome_tag() {
        let json = serde_json::to_value(QuoteResult::custom(CustomQuoteReason::CeilingExceeded)).unwrap();
        assert_eq!(json["outcome"], "custom_quote_required");
        assert_eq!(json["reason"], "ceiling_exceeded");
    }
}
