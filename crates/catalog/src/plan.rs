use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use perch_core::{Money, ValueObject};

/// One quantity breakpoint: "price per unit when quantity <= threshold".
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    pub quantity_threshold: u32,
    pub unit_price: Money,
}

impl ValueObject for PricingTier {}

impl PricingTier {
    pub fn new(quantity_threshold: u32, unit_price: Money) -> Self {
        Self {
            quantity_threshold,
            unit_price,
        }
    }
}

/// Tier table keyed by unique threshold, always iterated in ascending order.
///
/// Inserting a threshold that already exists replaces its price, so the last
/// entry read from the source wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PricingTier>", into = "Vec<PricingTier>")]
pub struct TierTable {
    tiers: BTreeMap<u32, Money>,
}

impl ValueObject for TierTable {}

impl TierTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tier: PricingTier) {
        self.tiers.insert(tier.quantity_threshold, tier.unit_price);
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Tiers in ascending threshold order.
    pub fn iter(&self) -> impl Iterator<Item = PricingTier> + '_ {
        self.tiers
            .iter()
            .map(|(&threshold, &price)| PricingTier::new(threshold, price))
    }

    /// The tier with the highest threshold, if any.
    pub fn largest(&self) -> Option<PricingTier> {
        self.tiers
            .last_key_value()
            .map(|(&threshold, &price)| PricingTier::new(threshold, price))
    }
}

impl FromIterator<PricingTier> for TierTable {
    fn from_iter<I: IntoIterator<Item = PricingTier>>(iter: I) -> Self {
        let mut table = TierTable::new();
        for tier in iter {
            table.insert(tier);
        }
        table
    }
}

impl From<Vec<PricingTier>> for TierTable {
    fn from(value: Vec<PricingTier>) -> Self {
        value.into_iter().collect()
    }
}

impl From<TierTable> for Vec<PricingTier> {
    fn from(value: TierTable) -> Self {
        value.iter().collect()
    }
}

/// A named pricing track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    #[serde(default)]
    pub tiers: TierTable,
}

impl ValueObject for Plan {}

impl Plan {
    pub fn new(name: impl Into<String>, tiers: TierTable) -> Self {
        Self {
            name: name.into(),
            tiers,
        }
    }

    /// A plan without any tiers; every quantity resolves to a zero price.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, TierTable::new())
    }
}
