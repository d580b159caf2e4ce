//! End-to-end: raw catalog values → session → rendered view.

use perch_catalog::{Catalog, RawHardwareItem, RawPlanCard, RawTierAttribute};
use perch_quote::{
    recompute, CustomQuoteReason, QuoteConfig, QuoteResult, QuoteSession, Selection, Tooltip,
};

fn plan_card(name: &str, tiers: &[(&str, &str)]) -> RawPlanCard {
    RawPlanCard {
        name: Some(name.to_string()),
        tier_attributes: tiers
            .iter()
            .map(|(q, p)| RawTierAttribute::new(*q, *p))
            .collect(),
    }
}

fn hardware(name: &str, haas: &str, cash: &str) -> RawHardwareItem {
    RawHardwareItem {
        name: Some(name.to_string()),
        financed_price_text: Some(haas.to_string()),
        cash_price_text: Some(cash.to_string()),
        ..RawHardwareItem::default()
    }
}

fn pricing_page() -> Catalog {
    let tiers = [("10", "100"), ("50", "80"), ("100", "60"), ("oops", "1")];
    Catalog::from_raw(
        &[
            plan_card("Standard", &tiers),
            plan_card("Professional", &tiers),
            plan_card("Championship", &[]),
        ],
        &[
            hardware("Perch Camera", "$150", "$1,200"),
            hardware("Tripod", "$25.50", "$300"),
        ],
    )
}

#[test]
fn scenarios_a_b_c_software_cost() {
    let catalog = pricing_page();
    let config = QuoteConfig::default();

    let cases = [(5, "$500"), (10, "$1,000"), (150, "$0")];
    for (quantity, expected) in cases {
        let result = recompute(&catalog, &Selection::new("Standard", quantity), &config);
        let breakdown = result.breakdown().copied().expect("standard plan is priced");
        assert_eq!(breakdown.software_cost.to_string(), expected, "quantity {quantity}");
    }
}

#[test]
fn customer_walkthrough() {
    perch_observability::init();
    let mut session = QuoteSession::new(pricing_page(), QuoteConfig::default());

    // Default plan is sales-assisted.
    let view = session.view();
    assert!(view.custom_pricing_tag);
    assert_eq!(view.tooltip, Some(Tooltip::Plan));

    let view = session.select_plan("Standard").unwrap();
    assert_eq!(view.haas_total.as_deref(), Some("$100"));

    let view = session.set_quantity(40).unwrap();
    assert_eq!(view.haas_recurring_annual.as_deref(), Some("$3,200"));

    let view = session.toggle_add_on("PERCH CAMERA").unwrap();
    assert_eq!(view.haas_total.as_deref(), Some("$9,200"));
    assert_eq!(view.cash_year_one_total.as_deref(), Some("$51,200"));

    let view = session.toggle_add_on("tripod").unwrap();
    assert_eq!(view.haas_total.as_deref(), Some("$10,220"));

    // 100 units: $6,000 software + $15,000 camera + $2,550 tripod.
    let view = session.set_quantity(100).unwrap();
    assert!(!view.shows_prices());
    assert_eq!(view.tooltip, Some(Tooltip::Quantity));
    assert_eq!(
        session.result(),
        QuoteResult::custom(CustomQuoteReason::CeilingExceeded)
    );

    let view = session.select_plan("Championship").unwrap();
    assert_eq!(view.tooltip, Some(Tooltip::Plan));
}

#[test]
fn catalog_round_trips_through_json() {
    let catalog = pricing_page();
    let json = serde_json::to_string(&catalog).unwrap();
    let loaded = Catalog::from_json(&json).unwrap();
    assert_eq!(loaded, catalog);
    assert_eq!(loaded.plan("Standard").map(|p| p.tiers.len()), Some(3));
}
