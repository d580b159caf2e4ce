//! Catalog data for the quote engine.
//!
//! Plans, tier tables and hardware add-ons, plus the extraction step that turns
//! raw presentation-layer values into them. Pure data; no pricing decisions.

pub mod addon;
pub mod catalog;
pub mod extract;
pub mod plan;

pub use addon::{names_match, HardwareAddOn};
pub use catalog::Catalog;
pub use extract::{
    extract_add_on, extract_plan, leading_integer, parse_price_text, RawHardwareItem, RawPlanCard,
    RawTierAttribute,
};
pub use plan::{Plan, PricingTier, TierTable};
