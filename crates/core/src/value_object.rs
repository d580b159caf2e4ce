//! Value object trait: equality by value, not identity.
//!
//! Everything the quote engine exchanges (plans, tiers, add-ons, requests,
//! results) is a value object built fresh for each recomputation.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. Nothing in the engine keeps a value object alive between
/// two recomputations, so two calls with equal inputs see equal values.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct PricingTier {
///     quantity_threshold: u32,
///     unit_price: Money,
/// }
///
/// impl ValueObject for PricingTier {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
