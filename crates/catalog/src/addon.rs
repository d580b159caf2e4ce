use serde::{Deserialize, Serialize};

use perch_core::{Money, ValueObject};

/// Optional hardware item with separate financed ("HaaS") and cash unit prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareAddOn {
    pub name: String,
    pub financed_unit_price: Money,
    pub cash_unit_price: Money,
    #[serde(default)]
    pub selected: bool,
    /// Read-only toggle: its selection cannot be changed by the user.
    #[serde(default)]
    pub locked: bool,
}

impl ValueObject for HardwareAddOn {}

impl HardwareAddOn {
    pub fn new(name: impl Into<String>, financed_unit_price: Money, cash_unit_price: Money) -> Self {
        Self {
            name: name.into(),
            financed_unit_price,
            cash_unit_price,
            selected: false,
            locked: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Whether `name` refers to this add-on (case-insensitive).
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

/// Case-insensitive name comparison used to join a toggle with its line items.
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
