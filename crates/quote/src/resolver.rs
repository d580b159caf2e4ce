//! Tier price resolution.

use serde::{Deserialize, Serialize};

use perch_catalog::{PricingTier, TierTable};
use perch_core::Money;

/// What to charge per unit when the quantity is above every tier threshold.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierOverflow {
    /// Unit price 0 (the historical behaviour of the pricing page).
    #[default]
    Zero,
    /// Keep charging the price of the highest tier.
    LargestTier,
}

/// The tier with the smallest threshold `>= quantity`.
pub fn find_tier(tiers: &TierTable, quantity: u32) -> Option<PricingTier> {
    tiers.iter().find(|tier| quantity <= tier.quantity_threshold)
}

/// Unit price for `quantity` under `tiers`.
///
/// An empty table always resolves to zero, whatever the overflow policy.
pub fn resolve(tiers: &TierTable, quantity: u32, overflow: TierOverflow) -> Money {
    if let Some(tier) = find_tier(tiers, quantity) {
        tracing::debug!(
            quantity,
            threshold = tier.quantity_threshold,
            unit_price = %tier.unit_price,
            "resolved tier"
        );
        return tier.unit_price;
    }

    let Some(largest) = tiers.largest() else {
        return Money::ZERO;
    };

    tracing::warn!(
        quantity,
        largest_threshold = largest.quantity_threshold,
        ?overflow,
        "quantity exceeds every pricing tier"
    );
    match overflow {
        TierOverflow::Zero => Money::ZERO,
        TierOverflow::LargestTier => largest.unit_price,
    }
}
