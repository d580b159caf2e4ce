//! Display model handed to the rendering layer.

use serde::{Deserialize, Serialize};

use perch_core::Money;

use crate::eligibility::{CustomQuoteReason, QuoteResult};

/// Which custom-pricing tooltip to show.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tooltip {
    /// The order is too large for an automatic quote.
    Quantity,
    /// The selected plan is sales-assisted only.
    Plan,
}

impl From<CustomQuoteReason> for Tooltip {
    fn from(reason: CustomQuoteReason) -> Self {
        match reason {
            CustomQuoteReason::CeilingExceeded => Tooltip::Quantity,
            CustomQuoteReason::PlanIneligible => Tooltip::Plan,
        }
    }
}

/// Text for every price slot plus custom-pricing visibility.
///
/// `None` means the slot is blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteView {
    pub haas_recurring_annual: Option<String>,
    pub haas_total: Option<String>,
    pub cash_recurring_annual: Option<String>,
    pub cash_year_one_total: Option<String>,
    pub cash_total: Option<String>,
    pub custom_pricing_tag: bool,
    pub tooltip: Option<Tooltip>,
}

impl QuoteView {
    /// All slots blank, no custom-pricing messaging.
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn from_result(result: &QuoteResult) -> Self {
        match result {
            QuoteResult::Computed(breakdown) => Self {
                haas_recurring_annual: Some(format_currency(breakdown.software_cost)),
                haas_total: Some(format_currency(breakdown.total_financed)),
                cash_recurring_annual: Some(format_currency(breakdown.software_cost)),
                cash_year_one_total: Some(format_currency(breakdown.total_cash)),
                cash_total: Some(format_currency(breakdown.total_cash)),
                custom_pricing_tag: false,
                tooltip: None,
            },
            QuoteResult::CustomQuoteRequired { reason } => Self {
                custom_pricing_tag: true,
                tooltip: Some(Tooltip::from(*reason)),
                ..Self::hidden()
            },
        }
    }

    pub fn shows_prices(&self) -> bool {
        self.haas_total.is_some()
    }
}

/// `$` + comma-grouped dollars, with cents only when non-zero.
pub fn format_currency(amount: Money) -> String {
    amount.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::CostBreakdown;

    #[test]
    fn computed_result_fills_every_slot() {
        let breakdown = CostBreakdown {
            software_cost: Money::from_dollars(5_000),
            hardware_financed_cost: Money::from_dollars(7_500),
            hardware_cash_cost: Money::from_dollars(45_000),
            total_financed: Money::from_dollars(12_500),
            total_cash: Money::from_dollars(50_000),
        };
        let view = QuoteView::from_result(&QuoteResult::Computed(breakdown));
        assert_eq!(view.haas_recurring_annual.as_deref(), Some("$5,000"));
        assert_eq!(view.haas_total.as_deref(), Some("$12,500"));
        assert_eq!(view.cash_recurring_annual.as_deref(), Some("$5,000"));
        assert_eq!(view.cash_year_one_total.as_deref(), Some("$50,000"));
        assert_eq!(view.cash_total.as_deref(), Some("$50,000"));
        assert!(!view.custom_pricing_tag);
        assert!(view.shows_prices());
    }

    #[test]
    fn custom_quote_blanks_prices_and_picks_tooltip() {
        let view = QuoteView::from_result(&QuoteResult::custom(CustomQuoteReason::CeilingExceeded));
        assert!(!view.shows_prices());
        assert!(view.custom_pricing_tag);
        assert_eq!(view.tooltip, Some(Tooltip::Quantity));

        let view = QuoteView::from_result(&QuoteResult::custom(CustomQuoteReason::PlanIneligible));
        assert_eq!(view.tooltip, Some(Tooltip::Plan));
        assert_eq!(view.cash_total, None);
    }

    #[test]
    fn hidden_view_has_no_messaging() {
        let view = QuoteView::hidden();
        assert!(!view.shows_prices());
        assert!(!view.custom_pricing_tag);
        assert_eq!(view.tooltip, None);
    }

    #[test]
    fn currency_format() {
        assert_eq!(format_currency(Money::from_dollars(1_000)), "$1,000");
        assert_eq!(format_currency(Money::from_cents(123_456)), "$1,234.56");
    }
}
