use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod catalog {
    use super::*;

    /// Request body for adding an item to a tenant catalog.
    ///
    /// `category` is one of `MEAT`, `SIDE`, `OTHER`, `DESSERT`, `BEVERAGE`,
    /// `SUPPLY` (case-insensitive).
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ItemNew {
        pub name: String,
        pub category: String,
        pub beverage_class: Option<String>,
        pub supply_kind: Option<String>,
        #[serde(default)]
        pub unit_price_minor: i64,
        #[serde(default)]
        pub per_adult_rate: f64,
        pub package_size: Option<f64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ItemView {
        pub id: Uuid,
        pub name: String,
        pub category: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub beverage_class: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub supply_kind: Option<String>,
        pub unit_price_minor: i64,
        pub per_adult_rate: f64,
        pub package_size: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ItemListResponse {
        pub items: Vec<ItemView>,
    }
}

pub mod params {
    use super::*;

    /// Per-adult rations used as allocation bases.
    #[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ConsumptionParamsView {
        pub grams_meat_per_adult: f64,
        pub grams_side_per_adult: f64,
        pub ml_beverage_per_adult: f64,
        pub grams_dessert_per_adult: f64,
    }
}

pub mod calculation {
    use super::*;

    /// Attendees. Negative counts are read as 0.
    #[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
    #[serde(default)]
    pub struct PeopleInput {
        pub men: i64,
        pub women: i64,
        pub children: i64,
        pub drinkers: i64,
    }

    /// Request body for a calculation.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CalculationNew {
        pub people: PeopleInput,
        /// Event duration in hours, used by firestarter supplies.
        #[serde(default)]
        pub duration_hours: f64,
        /// Selected catalog items, in display order.
        pub item_ids: Vec<Uuid>,
    }

    /// Query string of the history listing.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct CalculationList {
        pub limit: Option<u64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LineItemView {
        pub item_id: Uuid,
        pub name: String,
        pub category: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub beverage_class: Option<String>,
        pub unit_price_minor: i64,
        pub required_quantity: f64,
        pub packages_to_buy: u64,
        pub package_size: f64,
        pub line_cost_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CalculationView {
        /// Missing when the result could not be stored.
        pub id: Option<Uuid>,
        pub created_at: Option<DateTime<Utc>>,
        pub user_id: Option<String>,
        pub total_people: u64,
        pub adult_people: u64,
        pub drinker_people: u64,
        pub adult_equivalent: f64,
        pub duration_hours: f64,
        pub line_items: Vec<LineItemView>,
        pub total_cost_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CalculationListResponse {
        pub calculations: Vec<CalculationView>,
    }
}
