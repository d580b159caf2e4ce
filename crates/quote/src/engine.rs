//! Recompute pipeline and the session dispatcher around it.
//!
//! ```text
//! Selection ──► QuoteRequest ──► compute ──► gate ──► QuoteResult ──► QuoteView
//!  (plan, qty,     (catalog       (tiers +     (plan,
//!   toggles)        snapshot)      add-ons)     ceiling)
//! ```
//!
//! `recompute` is the only entry point into the pricing logic. `QuoteSession`
//! records user actions and calls it once per change.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use perch_catalog::{Catalog, Plan};
use perch_core::{DomainError, DomainResult, ValueObject};

use crate::calculator::{compute, QuoteRequest};
use crate::config::QuoteConfig;
use crate::eligibility::{CustomQuoteReason, QuoteResult};
use crate::render::QuoteView;

/// Current user choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub plan: String,
    pub quantity: u32,
    /// Lower-cased add-on names.
    selected_add_ons: BTreeSet<String>,
}

impl ValueObject for Selection {}

impl Selection {
    pub fn new(plan: impl Into<String>, quantity: u32) -> Self {
        Self {
            plan: plan.into(),
            quantity,
            selected_add_ons: BTreeSet::new(),
        }
    }

    pub fn with_add_on(mut self, name: &str) -> Self {
        self.select(name);
        self
    }

    pub fn select(&mut self, name: &str) {
        self.selected_add_ons.insert(name.to_lowercase());
    }

    pub fn deselect(&mut self, name: &str) {
        self.selected_add_ons.remove(&name.to_lowercase());
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected_add_ons.contains(&name.to_lowercase())
    }

    pub fn selected_count(&self) -> usize {
        self.selected_add_ons.len()
    }
}

/// Snapshot the catalog into a request for `selection`.
///
/// A plan missing from the catalog is priced as an empty plan.
pub fn build_request(catalog: &Catalog, selection: &Selection) -> QuoteRequest {
    let plan = catalog.plan(&selection.plan).cloned().unwrap_or_else(|| {
        tracing::debug!(plan = %selection.plan, "plan not in catalog; pricing as empty plan");
        Plan::empty(selection.plan.clone())
    });

    let add_ons = catalog
        .add_ons
        .iter()
        .map(|addon| {
            let selected = selection.is_selected(&addon.name);
            addon.clone().selected(selected)
        })
        .collect();

    QuoteRequest {
        plan,
        quantity: selection.quantity,
        add_ons,
    }
}

/// Price `selection` against `catalog`.
///
/// Pure and total: equal inputs always give equal results.
pub fn recompute(catalog: &Catalog, selection: &Selection, config: &QuoteConfig) -> QuoteResult {
    if !config.eligibility.admits_plan(&selection.plan) {
        return QuoteResult::custom(CustomQuoteReason::PlanIneligible);
    }

    let request = build_request(catalog, selection);
    let breakdown = compute(&request, config.overflow);
    config.eligibility.gate(&request.plan.name, breakdown)
}

/// Thin dispatcher: applies one user action, then recomputes.
#[derive(Debug, Clone)]
pub struct QuoteSession {
    catalog: Catalog,
    config: QuoteConfig,
    selection: Selection,
}

impl QuoteSession {
    /// Start with the configured default plan, quantity 1 and the catalog's
    /// initially toggled add-ons.
    pub fn new(catalog: Catalog, config: QuoteConfig) -> Self {
        let mut selection = Selection::new(config.default_plan.clone(), 1);
        for name in catalog.initially_selected() {
            selection.select(name);
        }
        Self {
            catalog,
            config,
            selection,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn result(&self) -> QuoteResult {
        recompute(&self.catalog, &self.selection, &self.config)
    }

    pub fn view(&self) -> QuoteView {
        QuoteView::from_result(&self.result())
    }

    pub fn select_plan(&mut self, name: &str) -> DomainResult<QuoteView> {
        if self.catalog.plan(name).is_none() {
            return Err(DomainError::not_found(format!("plan {name}")));
        }
        tracing::info!(plan = name, "plan selected");
        self.selection.plan = name.to_string();
        Ok(self.view())
    }

    pub fn set_quantity(&mut self, quantity: u32) -> DomainResult<QuoteView> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        tracing::info!(quantity, "quantity changed");
        self.selection.quantity = quantity;
        Ok(self.view())
    }

    /// Flip an add-on. Locked add-ons keep their state.
    pub fn toggle_add_on(&mut self, name: &str) -> DomainResult<QuoteView> {
        let selected = !self.selection.is_selected(name);
        self.set_add_on(name, selected)
    }

    pub fn set_add_on(&mut self, name: &str, selected: bool) -> DomainResult<QuoteView> {
        let addon = self
            .catalog
            .add_on(name)
            .ok_or_else(|| DomainError::not_found(format!("add-on {name}")))?;

        if addon.locked {
            tracing::debug!(add_on = %addon.name, "ignoring toggle of locked add-on");
            return Ok(self.view());
        }

        tracing::info!(add_on = %addon.name, selected, "add-on toggled");
        if selected {
            self.selection.select(name);
        } else {
            self.selection.deselect(name);
        }
        Ok(self.view())
    }
}
