//! Software + hardware cost aggregation.

use serde::{Deserialize, Serialize};

use perch_catalog::{HardwareAddOn, Plan};
use perch_core::{Money, ValueObject};

use crate::resolver::{resolve, TierOverflow};

/// Snapshot of everything one price computation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub plan: Plan,
    pub quantity: u32,
    pub add_ons: Vec<HardwareAddOn>,
}

impl ValueObject for QuoteRequest {}

/// Financed and cash projections for one request.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub software_cost: Money,
    pub hardware_financed_cost: Money,
    pub hardware_cash_cost: Money,
    pub total_financed: Money,
    pub total_cash: Money,
}

impl ValueObject for CostBreakdown {}

/// Compute the cost breakdown for `request`.
///
/// Unselected add-ons contribute nothing. No rounding happens here.
pub fn compute(request: &QuoteRequest, overflow: TierOverflow) -> CostBreakdown {
    let quantity = request.quantity;
    let unit_price = resolve(&request.plan.tiers, quantity, overflow);
    let software_cost = unit_price.times(quantity);

    let selected = request.add_ons.iter().filter(|addon| addon.selected);
    let (hardware_financed_cost, hardware_cash_cost) =
        selected.fold((Money::ZERO, Money::ZERO), |(financed, cash), addon| {
            (
                financed + addon.financed_unit_price.times(quantity),
                cash + addon.cash_unit_price.times(quantity),
            )
        });

    let breakdown = CostBreakdown {
        software_cost,
        hardware_financed_cost,
        hardware_cash_cost,
        total_financed: software_cost + hardware_financed_cost,
        total_cash: software_cost + hardware_cash_cost,
    };

    tracing::debug!(
        plan = %request.plan.name,
        quantity,
        software = %breakdown.software_cost,
        total_financed = %breakdown.total_financed,
        total_cash = %breakdown.total_cash,
        "computed cost breakdown"
    );
    breakdown
}
