//! Catalog extraction from raw presentation-layer values.
//!
//! The binding layer hands over attribute and text values exactly as it read
//! them. This module turns them into validated `Plan` / `HardwareAddOn` values:
//! malformed tier entries are dropped, unreadable prices count as zero, and a
//! plan card without a name becomes an empty (zero-price) plan.

use serde::{Deserialize, Serialize};

use perch_core::Money;

use crate::addon::HardwareAddOn;
use crate::plan::{Plan, PricingTier, TierTable};

/// Raw `(quantity, price)` attribute pair from a plan card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTierAttribute {
    pub quantity: String,
    pub price: String,
}

impl RawTierAttribute {
    pub fn new(quantity: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            quantity: quantity.into(),
            price: price.into(),
        }
    }
}

/// Raw values read from one plan card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPlanCard {
    pub name: Option<String>,
    #[serde(default)]
    pub tier_attributes: Vec<RawTierAttribute>,
}

/// Raw values read from one hardware toggle row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHardwareItem {
    pub name: Option<String>,
    pub financed_price_text: Option<String>,
    pub cash_price_text: Option<String>,
    #[serde(default)]
    pub toggled: bool,
    #[serde(default)]
    pub readonly: bool,
}

/// Build a plan from a raw plan card.
pub fn extract_plan(card: &RawPlanCard) -> Plan {
    let name = card.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        tracing::debug!("plan card has no name; treating as zero-price plan");
        return Plan::empty("");
    }

    let tiers: TierTable = card
        .tier_attributes
        .iter()
        .filter_map(|attr| {
            let tier = parse_tier(attr);
            if tier.is_none() {
                tracing::debug!(
                    plan = name,
                    quantity = %attr.quantity,
                    price = %attr.price,
                    "dropping malformed tier entry"
                );
            }
            tier
        })
        .collect();

    tracing::debug!(plan = name, tiers = tiers.len(), "extracted plan");
    Plan::new(name, tiers)
}

fn parse_tier(attr: &RawTierAttribute) -> Option<PricingTier> {
    let threshold = u32::try_from(leading_integer(&attr.quantity)?).ok()?;
    let dollars = leading_integer(&attr.price)?;
    Some(PricingTier::new(threshold, Money::from_dollars(dollars)))
}

/// Integer at the start of `text`, ignoring whatever follows it
/// (`"99.99"` reads as 99, `"100 units"` as 100).
///
/// Leading whitespace and a `+` sign are accepted. Negative values and text
/// that does not start with a digit yield `None`.
pub fn leading_integer(text: &str) -> Option<u64> {
    let text = text.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);
    let end = text
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());
    if end == 0 {
        return None;
    }
    text[..end].parse().ok()
}

/// The longest `digits[.digits]` prefix of `text`.
fn leading_decimal(text: &str) -> &str {
    let whole = text
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());
    let rest = &text[whole..];
    match rest.strip_prefix('.') {
        Some(frac) => {
            let frac_len = frac
                .bytes()
                .position(|b| !b.is_ascii_digit())
                .unwrap_or(frac.len());
            &text[..whole + 1 + frac_len]
        }
        None => &text[..whole],
    }
}

/// Build an add-on from a raw hardware row.
pub fn extract_add_on(item: &RawHardwareItem) -> HardwareAddOn {
    let name = item.name.as_deref().map(str::trim).unwrap_or_default();
    let financed = parse_price_text(item.financed_price_text.as_deref().unwrap_or_default());
    let cash = parse_price_text(item.cash_price_text.as_deref().unwrap_or_default());

    HardwareAddOn::new(name, financed, cash)
        .selected(item.toggled)
        .locked(item.readonly)
}

/// Parse displayed price text such as `$1,234.50`.
///
/// A single leading `$` and all `,` separators are ignored, and only the
/// leading amount is read (`$150/mo` is 150). Text that does not start with
/// an amount counts as zero.
pub fn parse_price_text(text: &str) -> Money {
    let trimmed = text.trim();
    let unprefixed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let digits = unprefixed.replace(',', "");
    Money::parse_decimal(leading_decimal(&digits)).unwrap_or_else(|| {
        if !trimmed.is_empty() {
            tracing::debug!(text = trimmed, "unreadable price text; using zero");
        }
        Money::ZERO
    })
}
