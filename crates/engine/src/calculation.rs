//! Consumption allocation and packaging.
//!
//! [`calculate`] turns a people composition and a selection of catalog items
//! into a quantity, a package count and a cost for every item. It is a pure
//! function: no I/O, no shared state, same input gives the same output.
//!
//! The computation runs in four stages:
//!
//! 1. **Grouping**: one pass over the selection builds [`RateSums`], the
//!    per-category sums of declared rates used as allocation denominators.
//! 2. **Targets**: each category gets a total target quantity, split across
//!    its items proportionally to their declared rate.
//! 3. **Packaging**: quantities are rounded *up* to whole packages; the cost
//!    of a line is `packages × unit price`.
//! 4. **Aggregation**: the total cost is the sum of line costs.
//!
//! A category whose rate sum is zero never fails: its items get a zero
//! quantity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    BeverageClass, CatalogItem, Category, ConsumptionParams, EngineError, ItemKind, MoneyCents,
    ResultEngine, SupplyKind,
};

/// Ration of a woman relative to a man.
pub const WOMAN_WEIGHT: f64 = 0.75;
/// Ration of a child relative to a man.
pub const CHILD_WEIGHT: f64 = 0.5;
/// Extra meat when no side dish is selected.
pub const MEAT_ONLY_MULTIPLIER: f64 = 1.2;
/// Share of a full non-alcoholic ration drunk by people who also drink
/// alcohol.
pub const DRINKER_NON_ALCOHOLIC_SHARE: f64 = 0.1;
/// Kg of charcoal per kg of meat when the item does not declare a rate.
pub const DEFAULT_CHARCOAL_RATE: f64 = 2.5;
/// Firestarters per hour when the item does not declare a rate.
pub const DEFAULT_FIRESTARTER_RATE: f64 = 1.0;

/// Attendees of the event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct People {
    pub men: u32,
    pub women: u32,
    pub children: u32,
    /// People drinking beverages; not bounded by the headcount.
    pub drinkers: u32,
}

impl People {
    #[must_use]
    pub const fn new(men: u32, women: u32, children: u32, drinkers: u32) -> Self {
        Self {
            men,
            women,
            children,
            drinkers,
        }
    }

    /// Build from signed input, clamping negative counts to 0.
    #[must_use]
    pub fn from_signed(men: i64, women: i64, children: i64, drinkers: i64) -> Self {
        let clamp = |value: i64| u32::try_from(value.max(0)).unwrap_or(u32::MAX);
        Self::new(clamp(men), clamp(women), clamp(children), clamp(drinkers))
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        u64::from(self.men) + u64::from(self.women) + u64::from(self.children)
    }

    #[must_use]
    pub fn adults(&self) -> u64 {
        u64::from(self.men) + u64::from(self.women)
    }

    #[must_use]
    pub fn adult_equivalent(&self) -> f64 {
        adult_equivalent(self.men, self.women, self.children)
    }
}

/// Everything needed to compute a calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRequest {
    pub people: People,
    /// Only used by firestarter supplies.
    pub duration_hours: f64,
    /// Selection order is the line order of the result.
    pub selected_items: Vec<CatalogItem>,
    pub params: ConsumptionParams,
}

impl EventRequest {
    pub fn new(
        people: People,
        duration_hours: f64,
        selected_items: Vec<CatalogItem>,
        params: ConsumptionParams,
    ) -> Self {
        Self {
            people,
            duration_hours,
            selected_items,
            params,
        }
    }

    fn duration(&self) -> f64 {
        if self.duration_hours.is_finite() && self.duration_hours > 0.0 {
            self.duration_hours
        } else {
            0.0
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_id: Uuid,
    pub name: String,
    pub category: Category,
    pub unit_price: MoneyCents,
    /// Rounded to 2 decimals, for display only.
    pub required_quantity: f64,
    pub packages_to_buy: u64,
    pub package_size: f64,
    pub line_cost: MoneyCents,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beverage_class: Option<BeverageClass>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub total_people: u64,
    pub adult_people: u64,
    pub drinker_people: u64,
    pub adult_equivalent: f64,
    pub line_items: Vec<LineItem>,
    pub total_cost: MoneyCents,
}

/// Weighted headcount: men count 1, women 0.75, children 0.5.
#[must_use]
pub fn adult_equivalent(men: u32, women: u32, children: u32) -> f64 {
    f64::from(men) + WOMAN_WEIGHT * f64::from(women) + CHILD_WEIGHT * f64::from(children)
}

/// Compute quantities, packages and costs for an event.
///
/// Fails with [`EngineError::Validation`] when nothing is selected or nobody
/// attends; every other irregular input is normalised.
pub fn calculate(request: &EventRequest) -> ResultEngine<CalculationResult> {
    validate(&request.people, request.selected_items.len())?;
    let total_people = request.people.total();

    let allocation = Allocation::new(request);

    let line_items: Vec<LineItem> = request
        .selected_items
        .iter()
        .map(|item| line_item(item, allocation.quantity(item)))
        .collect();
    let total_cost: MoneyCents = line_items.iter().map(|line| line.line_cost).sum();

    Ok(CalculationResult {
        total_people,
        adult_people: request.people.adults(),
        drinker_people: u64::from(request.people.drinkers),
        adult_equivalent: allocation.adult_equivalent,
        line_items,
        total_cost,
    })
}

/// Reject requests that cannot be computed: nothing selected or nobody
/// attending, in that order.
pub(crate) fn validate(people: &People, selected: usize) -> ResultEngine<()> {
    if selected == 0 {
        return Err(EngineError::Validation(
            "select at least one item".to_string(),
        ));
    }
    if people.total() == 0 {
        return Err(EngineError::Validation(
            "define at least one attendee".to_string(),
        ));
    }
    Ok(())
}

/// Per-category rate sums, built in a single pass over the selection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct RateSums {
    pub(crate) meat: f64,
    /// Sides and "other" dishes share one pool.
    pub(crate) side_other: f64,
    pub(crate) dessert: f64,
    pub(crate) alcoholic: f64,
    pub(crate) non_alcoholic: f64,
    pub(crate) has_meat: bool,
    pub(crate) has_side_or_other: bool,
    pub(crate) has_alcoholic: bool,
}

impl RateSums {
    pub(crate) fn from_items(items: &[CatalogItem]) -> Self {
        items.iter().fold(Self::default(), Self::with)
    }

    fn with(mut self, item: &CatalogItem) -> Self {
        let rate = item.rate();
        match item.kind {
            ItemKind::Meat => {
                self.meat += rate;
                self.has_meat = true;
            }
            ItemKind::Side | ItemKind::Other => {
                self.side_other += rate;
                self.has_side_or_other = true;
            }
            ItemKind::Dessert => self.dessert += rate,
            ItemKind::Beverage {
                beverage_class: BeverageClass::Alcoholic,
            } => {
                self.alcoholic += rate;
                self.has_alcoholic = true;
            }
            ItemKind::Beverage {
                beverage_class: BeverageClass::NonAlcoholic,
            } => self.non_alcoholic += rate,
            ItemKind::Supply { .. } | ItemKind::Unclassified => {}
        }
        self
    }

    pub(crate) fn meat_multiplier(&self) -> f64 {
        if self.has_meat && !self.has_side_or_other {
            MEAT_ONLY_MULTIPLIER
        } else {
            1.0
        }
    }
}

struct Allocation {
    adult_equivalent: f64,
    total_people: f64,
    drinkers: f64,
    duration_hours: f64,
    params: ConsumptionParams,
    sums: RateSums,
}

impl Allocation {
    fn new(request: &EventRequest) -> Self {
        Self {
            adult_equivalent: request.people.adult_equivalent(),
            total_people: request.people.total() as f64,
            drinkers: f64::from(request.people.drinkers),
            duration_hours: request.duration(),
            params: request.params,
            sums: RateSums::from_items(&request.selected_items),
        }
    }

    fn meat_target(&self) -> f64 {
        self.adult_equivalent * self.params.grams_meat_per_adult * self.sums.meat_multiplier()
    }

    /// Headcount drinking non-alcoholic beverages at full ration.
    fn non_alcoholic_headcount(&self) -> f64 {
        if self.sums.has_alcoholic {
            (self.total_people - self.drinkers) + DRINKER_NON_ALCOHOLIC_SHARE * self.drinkers
        } else {
            self.total_people
        }
    }

    fn quantity(&self, item: &CatalogItem) -> f64 {
        let rate = item.rate();
        let ae = self.adult_equivalent;
        let quantity = match item.kind {
            ItemKind::Meat => share(self.meat_target(), rate, self.sums.meat),
            ItemKind::Side | ItemKind::Other => {
                if self.sums.side_other < self.params.grams_side_per_adult {
                    ae * rate
                } else {
                    share(
                        ae * self.params.grams_side_per_adult,
                        rate,
                        self.sums.side_other,
                    )
                }
            }
            ItemKind::Dessert => share(
                ae * self.params.grams_dessert_per_adult,
                rate,
                self.sums.dessert,
            ),
            ItemKind::Beverage {
                beverage_class: BeverageClass::Alcoholic,
            } => {
                if self.sums.alcoholic > 0.0 {
                    share(
                        self.drinkers * self.params.ml_beverage_per_adult,
                        rate,
                        self.sums.alcoholic,
                    )
                } else {
                    rate * self.drinkers
                }
            }
            ItemKind::Beverage {
                beverage_class: BeverageClass::NonAlcoholic,
            } => share(
                self.non_alcoholic_headcount() * self.params.ml_beverage_per_adult,
                rate,
                self.sums.non_alcoholic,
            ),
            ItemKind::Supply {
                supply_kind: SupplyKind::Charcoal,
            } => {
                let kg_meat = self.meat_target() / 1000.0;
                kg_meat * rate_or(rate, DEFAULT_CHARCOAL_RATE)
            }
            ItemKind::Supply {
                supply_kind: SupplyKind::Firestarter,
            } => self.duration_hours * rate_or(rate, DEFAULT_FIRESTARTER_RATE),
            ItemKind::Supply {
                supply_kind: SupplyKind::Other,
            } => ae * rate,
            ItemKind::Unclassified => ae,
        };

        if quantity.is_finite() && quantity > 0.0 {
            quantity
        } else {
            0.0
        }
    }
}

/// Proportional share of `target`; zero when the group has no rate.
fn share(target: f64, rate: f64, rate_sum: f64) -> f64 {
    if rate_sum > 0.0 {
        target * (rate / rate_sum)
    } else {
        0.0
    }
}

fn rate_or(rate: f64, default: f64) -> f64 {
    if rate > 0.0 { rate } else { default }
}

fn line_item(item: &CatalogItem, quantity: f64) -> LineItem {
    let package_size = item.package_size();
    let packages_to_buy = packages_for(quantity, package_size);
    let unit_price = item.unit_price();
    LineItem {
        item_id: item.id,
        name: item.name.clone(),
        category: item.kind.category(),
        unit_price,
        required_quantity: round2(quantity),
        packages_to_buy,
        package_size,
        line_cost: unit_price.times(packages_to_buy),
        beverage_class: item.kind.beverage_class(),
    }
}

/// Whole packages needed to cover `quantity`; always rounds up.
pub(crate) fn packages_for(quantity: f64, package_size: f64) -> u64 {
    if !(quantity > 0.0) {
        return 0;
    }
    let packages = (quantity / package_size).ceil();
    if packages > 0.0 { packages as u64 } else { 0 }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, kind: ItemKind, rate: f64, package_size: f64, price: i64) -> CatalogItem {
        CatalogItem::new(
            Uuid::new_v4(),
            name,
            kind,
            MoneyCents::new(price),
            rate,
            package_size,
        )
    }

    fn meat(rate: f64) -> CatalogItem {
        item("Picanha", ItemKind::Meat, rate, 1000.0, 50_00)
    }

    fn side(rate: f64) -> CatalogItem {
        item("Farofa", ItemKind::Side, rate, 500.0, 8_00)
    }

    fn beverage(class: BeverageClass, rate: f64) -> CatalogItem {
        item(
            "Drink",
            ItemKind::Beverage {
                beverage_class: class,
            },
            rate,
            2000.0,
            9_00,
        )
    }

    fn supply(kind: SupplyKind, rate: f64, package_size: f64) -> CatalogItem {
        item(
            "Supply",
            ItemKind::Supply { supply_kind: kind },
            rate,
            package_size,
            15_00,
        )
    }

    fn request(people: People, items: Vec<CatalogItem>) -> EventRequest {
        EventRequest::new(people, 4.0, items, ConsumptionParams::default())
    }

    fn quantities(result: &CalculationResult) -> Vec<f64> {
        result
            .line_items
            .iter()
            .map(|line| line.required_quantity)
            .collect()
    }

    #[test]
    fn adult_equivalent_weights_women_and_children() {
        assert_eq!(adult_equivalent(0, 0, 0), 0.0);
        assert_eq!(adult_equivalent(1, 0, 0), 1.0);
        assert_eq!(adult_equivalent(4, 2, 0), 5.5);
        assert_eq!(adult_equivalent(0, 4, 2), 4.0);
        assert_eq!(adult_equivalent(3, 3, 3), 3.0 + 0.75 * 3.0 + 0.5 * 3.0);
    }

    #[test]
    fn meat_only_event_end_to_end() {
        let result = calculate(&request(People::new(4, 2, 0, 0), vec![meat(400.0)])).unwrap();

        assert_eq!(result.total_people, 6);
        assert_eq!(result.adult_people, 6);
        assert_eq!(result.adult_equivalent, 5.5);
        let line = &result.line_items[0];
        assert_eq!(line.category, Category::Meat);
        assert_eq!(line.required_quantity, 2640.0);
        assert_eq!(line.packages_to_buy, 3);
        assert_eq!(line.line_cost, MoneyCents::new(150_00));
        assert_eq!(result.total_cost, MoneyCents::new(150_00));
    }

    #[test]
    fn any_side_removes_meat_multiplier() {
        let result = calculate(&request(
            People::new(4, 2, 0, 0),
            vec![meat(400.0), side(250.0)],
        ))
        .unwrap();
        assert_eq!(result.line_items[0].required_quantity, 2200.0);

        let other = item("Vinagrete", ItemKind::Other, 10.0, 1.0, 0);
        let result =
            calculate(&request(People::new(4, 2, 0, 0), vec![meat(400.0), other])).unwrap();
        assert_eq!(result.line_items[0].required_quantity, 2200.0);
    }

    #[test]
    fn meat_is_split_by_declared_rate() {
        let result = calculate(&request(
            People::new(10, 0, 0, 0),
            vec![meat(300.0), meat(100.0), side(250.0)],
        ))
        .unwrap();
        assert_eq!(quantities(&result)[..2], [3000.0, 1000.0]);
    }

    #[test]
    fn under_specified_sides_get_their_full_ration() {
        let other = item("Salad", ItemKind::Other, 50.0, 1000.0, 0);
        let result =
            calculate(&request(People::new(4, 2, 0, 0), vec![side(100.0), other])).unwrap();
        assert_eq!(quantities(&result), vec![550.0, 275.0]);
    }

    #[test]
    fn sides_at_or_above_base_are_normalized() {
        let result = calculate(&request(
            People::new(10, 0, 0, 0),
            vec![side(200.0), side(300.0)],
        ))
        .unwrap();
        assert_eq!(quantities(&result), vec![1000.0, 1500.0]);

        // Exactly at the base: normalized, which equals the declared ration.
        let result = calculate(&request(People::new(10, 0, 0, 0), vec![side(250.0)])).unwrap();
        assert_eq!(quantities(&result), vec![2500.0]);
    }

    #[test]
    fn dessert_target_is_split_proportionally() {
        let cake = item("Cake", ItemKind::Dessert, 60.0, 1.0, 0);
        let pudding = item("Pudding", ItemKind::Dessert, 40.0, 1.0, 0);
        let result = calculate(&request(People::new(10, 0, 0, 0), vec![cake, pudding])).unwrap();
        assert_eq!(quantities(&result), vec![600.0, 400.0]);
    }

    #[test]
    fn drinkers_reduce_non_alcoholic_target() {
        let result = calculate(&request(
            People::new(10, 0, 0, 2),
            vec![
                beverage(BeverageClass::Alcoholic, 600.0),
                beverage(BeverageClass::NonAlcoholic, 1200.0),
            ],
        ))
        .unwrap();

        assert_eq!(result.drinker_people, 2);
        assert_eq!(quantities(&result), vec![2400.0, 9840.0]);
        assert_eq!(
            result.line_items[0].beverage_class,
            Some(BeverageClass::Alcoholic)
        );
        assert_eq!(
            result.line_items[1].beverage_class,
            Some(BeverageClass::NonAlcoholic)
        );
    }

    #[test]
    fn without_alcohol_everybody_drinks_non_alcoholic() {
        let result = calculate(&request(
            People::new(4, 4, 2, 3),
            vec![
                beverage(BeverageClass::NonAlcoholic, 800.0),
                beverage(BeverageClass::NonAlcoholic, 400.0),
            ],
        ))
        .unwrap();
        assert_eq!(quantities(&result), vec![8000.0, 4000.0]);
    }

    #[test]
    fn drinkers_above_headcount_are_not_rejected() {
        let result = calculate(&request(
            People::new(2, 0, 0, 5),
            vec![
                beverage(BeverageClass::Alcoholic, 1000.0),
                beverage(BeverageClass::NonAlcoholic, 1000.0),
            ],
        ))
        .unwrap();
        // (2 - 5) + 0.5 is negative: no soft drinks.
        assert_eq!(quantities(&result), vec![6000.0, 0.0]);
        assert_eq!(result.line_items[1].packages_to_buy, 0);
    }

    #[test]
    fn zero_rate_groups_resolve_to_zero() {
        let cake = item("Cake", ItemKind::Dessert, 0.0, 1.0, 10_00);
        let pie = item("Pie", ItemKind::Dessert, 0.0, 1.0, 10_00);
        let result = calculate(&request(
            People::new(3, 0, 0, 3),
            vec![
                cake,
                pie,
                meat(0.0),
                beverage(BeverageClass::Alcoholic, 0.0),
                beverage(BeverageClass::NonAlcoholic, 0.0),
            ],
        ))
        .unwrap();

        assert!(result.line_items.iter().all(|line| line.required_quantity == 0.0));
        assert!(result.line_items.iter().all(|line| line.packages_to_buy == 0));
        assert_eq!(result.total_cost, MoneyCents::ZERO);
    }

    #[test]
    fn charcoal_follows_meat_mass() {
        let result = calculate(&request(
            People::new(10, 0, 0, 0),
            vec![meat(400.0), supply(SupplyKind::Charcoal, 0.0, 5.0)],
        ))
        .unwrap();
        // 10 × 400 g × 1.2 = 4.8 kg of meat, 2.5 kg charcoal per kg.
        assert_eq!(result.line_items[1].required_quantity, 12.0);
        assert_eq!(result.line_items[1].packages_to_buy, 3);

        let result = calculate(&request(
            People::new(10, 0, 0, 0),
            vec![meat(400.0), side(250.0), supply(SupplyKind::Charcoal, 1.0, 5.0)],
        ))
        .unwrap();
        assert_eq!(result.line_items[2].required_quantity, 4.0);
    }

    #[test]
    fn firestarter_follows_duration() {
        let mut req = request(
            People::new(1, 0, 0, 0),
            vec![
                supply(SupplyKind::Firestarter, 2.0, 1.0),
                supply(SupplyKind::Firestarter, 0.0, 1.0),
            ],
        );
        req.duration_hours = 5.0;
        assert_eq!(quantities(&calculate(&req).unwrap()), vec![10.0, 5.0]);

        req.duration_hours = -3.0;
        assert_eq!(quantities(&calculate(&req).unwrap()), vec![0.0, 0.0]);
    }

    #[test]
    fn other_supplies_and_unclassified_items_follow_headcount() {
        let napkins = supply(SupplyKind::Other, 2.0, 50.0);
        let ice = item("Ice", ItemKind::Unclassified, 999.0, 0.0, 3_00);
        let result = calculate(&request(People::new(4, 2, 0, 0), vec![napkins, ice])).unwrap();

        assert_eq!(quantities(&result), vec![11.0, 5.5]);
        assert_eq!(result.line_items[0].packages_to_buy, 1);
        assert_eq!(result.line_items[1].packages_to_buy, 6);
        assert_eq!(result.line_items[1].package_size, 1.0);
        assert_eq!(result.line_items[1].line_cost, MoneyCents::new(18_00));
    }

    #[test]
    fn empty_selection_or_no_attendee_is_rejected() {
        assert_eq!(
            calculate(&request(People::new(4, 0, 0, 0), vec![])),
            Err(EngineError::Validation(
                "select at least one item".to_string()
            ))
        );
        assert_eq!(
            calculate(&request(People::new(0, 0, 0, 4), vec![meat(400.0)])),
            Err(EngineError::Validation(
                "define at least one attendee".to_string()
            ))
        );
    }

    #[test]
    fn calculation_is_idempotent() {
        let req = request(
            People::new(7, 5, 3, 4),
            vec![
                meat(350.0),
                side(120.0),
                beverage(BeverageClass::Alcoholic, 700.0),
                beverage(BeverageClass::NonAlcoholic, 500.0),
                supply(SupplyKind::Charcoal, 2.0, 3.0),
            ],
        );
        assert_eq!(calculate(&req).unwrap(), calculate(&req).unwrap());
    }

    #[test]
    fn more_men_never_reduce_food() {
        let cake = item("Cake", ItemKind::Dessert, 100.0, 1.0, 0);
        let items = vec![meat(400.0), side(80.0), side(300.0), cake];
        let mut previous: Option<Vec<f64>> = None;
        for men in 0..40 {
            let result = calculate(&request(People::new(men, 3, 2, 0), items.clone())).unwrap();
            let current = quantities(&result);
            if let Some(previous) = previous {
                for (before, after) in previous.iter().zip(&current) {
                    assert!(after >= before, "{after} < {before} with {men} men");
                }
            }
            previous = Some(current);
        }
    }

    #[test]
    fn packages_always_cover_required_quantity() {
        for (rate, size) in [(333.0, 1000.0), (250.0, 250.0), (1.0, 3.0), (1234.5, 600.0)] {
            for men in 1..25 {
                let result = calculate(&request(
                    People::new(men, 1, 1, 0),
                    vec![item("X", ItemKind::Other, rate, size, 1_00)],
                ))
                .unwrap();
                let line = &result.line_items[0];
                assert!(line.packages_to_buy as f64 * line.package_size >= line.required_quantity);
                assert_eq!(
                    line.packages_to_buy,
                    (line.required_quantity / line.package_size).ceil() as u64
                );
            }
        }
    }

    #[test]
    fn packages_are_the_ceiling_of_the_ratio() {
        assert_eq!(packages_for(0.0, 1000.0), 0);
        assert_eq!(packages_for(1.0, 1000.0), 1);
        assert_eq!(packages_for(1000.0, 1000.0), 1);
        assert_eq!(packages_for(1000.01, 1000.0), 2);
        assert_eq!(packages_for(2640.0, 1000.0), 3);
        // Plain ceiling of the computed ratio, no tolerance below it.
        assert_eq!(packages_for(1000.000_001, 1000.0), 2);
        assert_eq!(packages_for(f64::NAN, 1.0), 0);
    }

    #[test]
    fn lines_keep_selection_order_and_costs_add_up() {
        let result = calculate(&request(
            People::new(10, 0, 0, 0),
            vec![side(300.0), meat(400.0)],
        ))
        .unwrap();
        assert_eq!(result.line_items[0].name, "Farofa");
        assert_eq!(result.line_items[1].name, "Picanha");
        let sum: MoneyCents = result.line_items.iter().map(|line| line.line_cost).sum();
        assert_eq!(result.total_cost, sum);
        // 2500 g of farofa in 500 g bags, 4000 g of picanha in 1 kg packs.
        assert_eq!(result.total_cost, MoneyCents::new(5 * 8_00 + 4 * 50_00));
    }

    #[test]
    fn rate_sums_are_built_per_category() {
        let sums = RateSums::from_items(&[
            meat(300.0),
            side(100.0),
            item("Rice", ItemKind::Other, 50.0, 1.0, 0),
            beverage(BeverageClass::Alcoholic, 500.0),
            beverage(BeverageClass::NonAlcoholic, 700.0),
            supply(SupplyKind::Charcoal, 2.5, 1.0),
        ]);
        assert_eq!(sums.meat, 300.0);
        assert_eq!(sums.side_other, 150.0);
        assert_eq!(sums.dessert, 0.0);
        assert_eq!(sums.alcoholic, 500.0);
        assert_eq!(sums.non_alcoholic, 700.0);
        assert!(sums.has_alcoholic);
        assert_eq!(sums.meat_multiplier(), 1.0);
    }

    #[test]
    fn people_clamp_negative_input() {
        let people = People::from_signed(-1, 2, -3, -4);
        assert_eq!(people, People::new(0, 2, 0, 0));
        assert_eq!(people.total(), 2);
    }
}
