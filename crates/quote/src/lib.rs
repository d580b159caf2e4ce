//! Quote computation and eligibility gating.
//!
//! Given a plan, a quantity and a set of hardware add-ons, produce either a
//! financed/cash price or a "custom quote required" outcome. Deterministic
//! domain logic only (no IO, no DOM, no clocks).

pub mod calculator;
pub mod config;
pub mod eligibility;
pub mod engine;
pub mod render;
pub mod resolver;

pub use calculator::{compute, CostBreakdown, QuoteRequest};
pub use config::QuoteConfig;
pub use eligibility::{CustomQuoteReason, EligibilityPolicy, QuoteResult};
pub use engine::{build_request, recompute, QuoteSession, Selection};
pub use render::{format_currency, QuoteView, Tooltip};
pub use resolver::{find_tier, resolve, TierOverflow};
