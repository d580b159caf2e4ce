use serde::{Deserialize, Serialize};

use perch_core::{DomainError, DomainResult};

use crate::addon::HardwareAddOn;
use crate::extract::{extract_add_on, extract_plan, RawHardwareItem, RawPlanCard};
use crate::plan::Plan;

/// Everything the quote engine needs to know about the offering.
///
/// `selected` flags on the add-ons describe the initial toggle state only; the
/// live selection is tracked by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub plans: Vec<Plan>,
    #[serde(default)]
    pub add_ons: Vec<HardwareAddOn>,
}

impl Catalog {
    pub fn new(plans: Vec<Plan>, add_ons: Vec<HardwareAddOn>) -> Self {
        Self { plans, add_ons }
    }

    /// Build a catalog from raw plan cards and hardware rows.
    pub fn from_raw(cards: &[RawPlanCard], items: &[RawHardwareItem]) -> Self {
        let plans = cards
            .iter()
            .map(extract_plan)
            .filter(|plan| !plan.name.is_empty())
            .collect();
        let add_ons = items
            .iter()
            .map(extract_add_on)
            .filter(|addon| !addon.name.is_empty())
            .collect();
        Self { plans, add_ons }
    }

    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("catalog json: {e}")))
    }

    /// Plan by exact name.
    pub fn plan(&self, name: &str) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.name == name)
    }

    /// Add-on by case-insensitive name.
    pub fn add_on(&self, name: &str) -> Option<&HardwareAddOn> {
        self.add_ons.iter().find(|addon| addon.is_named(name))
    }

    /// Names of the add-ons whose initial toggle state is on.
    pub fn initially_selected(&self) -> impl Iterator<Item = &str> + '_ {
        self.add_ons
            .iter()
            .filter(|addon| addon.selected)
            .map(|addon| addon.name.as_str())
    }
}
