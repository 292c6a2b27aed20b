//! Catalog items: what can be selected for an event and how it is sold.
//!
//! The category of an item decides which allocation rule applies to it, so it
//! is modelled as [`ItemKind`], a sum type carrying the category-specific
//! payload (beverage class, supply kind) instead of a flat record of optional
//! fields.

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, MoneyCents};

/// Coarse classification reported on each line of a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Meat,
    Side,
    Other,
    Dessert,
    Beverage,
    Supply,
    Unclassified,
}

impl Category {
    /// Canonical storage/wire code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Meat => "MEAT",
            Self::Side => "SIDE",
            Self::Other => "OTHER",
            Self::Dessert => "DESSERT",
            Self::Beverage => "BEVERAGE",
            Self::Supply => "SUPPLY",
            Self::Unclassified => "UNCLASSIFIED",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeverageClass {
    Alcoholic,
    #[default]
    NonAlcoholic,
}

impl BeverageClass {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alcoholic => "ALCOHOLIC",
            Self::NonAlcoholic => "NON_ALCOHOLIC",
        }
    }

    /// Lenient parse: anything but `ALCOHOLIC` is non-alcoholic.
    #[must_use]
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(normalize_code).as_deref() {
            Some("ALCOHOLIC") => Self::Alcoholic,
            _ => Self::NonAlcoholic,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupplyKind {
    /// Rate is kg of charcoal per kg of meat.
    Charcoal,
    /// Rate is units per hour of event.
    Firestarter,
    /// Rate is units per adult equivalent.
    #[default]
    Other,
}

impl SupplyKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Charcoal => "CHARCOAL",
            Self::Firestarter => "FIRESTARTER",
            Self::Other => "OTHER",
        }
    }

    /// Lenient parse: unknown or missing kinds are `Other`.
    #[must_use]
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(normalize_code).as_deref() {
            Some("CHARCOAL") => Self::Charcoal,
            Some("FIRESTARTER") => Self::Firestarter,
            _ => Self::Other,
        }
    }
}

/// Category of an item together with the payload that only makes sense for
/// that category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemKind {
    Meat,
    Side,
    Other,
    Dessert,
    Beverage { beverage_class: BeverageClass },
    Supply { supply_kind: SupplyKind },
    /// A category code the engine does not know; counted once per adult
    /// equivalent.
    Unclassified,
}

impl ItemKind {
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Meat => Category::Meat,
            Self::Side => Category::Side,
            Self::Other => Category::Other,
            Self::Dessert => Category::Dessert,
            Self::Beverage { .. } => Category::Beverage,
            Self::Supply { .. } => Category::Supply,
            Self::Unclassified => Category::Unclassified,
        }
    }

    #[must_use]
    pub const fn beverage_class(self) -> Option<BeverageClass> {
        match self {
            Self::Beverage { beverage_class } => Some(beverage_class),
            _ => None,
        }
    }

    #[must_use]
    pub const fn supply_kind(self) -> Option<SupplyKind> {
        match self {
            Self::Supply { supply_kind } => Some(supply_kind),
            _ => None,
        }
    }

    /// Build a kind from stored codes.
    ///
    /// Fields irrelevant to the category are ignored, missing subclasses fall
    /// back to their defaults and unknown categories become `Unclassified`.
    #[must_use]
    pub fn from_codes(
        category: &str,
        beverage_class: Option<&str>,
        supply_kind: Option<&str>,
    ) -> Self {
        match normalize_code(category).as_str() {
            "MEAT" => Self::Meat,
            "SIDE" => Self::Side,
            "OTHER" => Self::Other,
            "DESSERT" => Self::Dessert,
            "BEVERAGE" => Self::Beverage {
                beverage_class: BeverageClass::parse_lenient(beverage_class),
            },
            "SUPPLY" => Self::Supply {
                supply_kind: SupplyKind::parse_lenient(supply_kind),
            },
            _ => Self::Unclassified,
        }
    }

    /// Strict variant of [`ItemKind::from_codes`] used for user input.
    pub fn parse(
        category: &str,
        beverage_class: Option<&str>,
        supply_kind: Option<&str>,
    ) -> Result<Self, EngineError> {
        match Self::from_codes(category, beverage_class, supply_kind) {
            Self::Unclassified => Err(EngineError::InvalidItem(format!(
                "unknown category: {}",
                category.trim()
            ))),
            kind => Ok(kind),
        }
    }
}

fn normalize_code(value: &str) -> String {
    value.trim().to_ascii_uppercase().replace(['-', ' '], "_")
}

/// A purchasable item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: Uuid,
    pub name: String,
    pub unit_price: MoneyCents,
    pub kind: ItemKind,
    /// Grams, milliliters or units per adult, depending on `kind`.
    pub per_adult_rate: f64,
    /// Size of one purchasable unit, in the same unit as the quantity.
    pub package_size: f64,
}

impl CatalogItem {
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        kind: ItemKind,
        unit_price: MoneyCents,
        per_adult_rate: f64,
        package_size: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price: unit_price.non_negative(),
            kind,
            per_adult_rate: normalize_rate(per_adult_rate),
            package_size: normalize_package_size(package_size),
        }
    }

    /// Declared rate, with negative or non-finite values read as 0.
    #[must_use]
    pub fn rate(&self) -> f64 {
        normalize_rate(self.per_adult_rate)
    }

    /// Package size, with missing/invalid sizes read as 1 (sold individually).
    #[must_use]
    pub fn package_size(&self) -> f64 {
        normalize_package_size(self.package_size)
    }

    #[must_use]
    pub fn unit_price(&self) -> MoneyCents {
        self.unit_price.non_negative()
    }
}

pub(crate) fn normalize_rate(rate: f64) -> f64 {
    if rate.is_finite() && rate > 0.0 { rate } else { 0.0 }
}

pub(crate) fn normalize_package_size(size: f64) -> f64 {
    if size.is_finite() && size > 0.0 { size } else { 1.0 }
}

/// Input for adding an item to a tenant catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub kind: ItemKind,
    pub unit_price: MoneyCents,
    pub per_adult_rate: f64,
    pub package_size: f64,
}

impl NewItem {
    pub(crate) fn into_item(self, id: Uuid) -> Result<CatalogItem, EngineError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidItem("name must not be empty".to_string()));
        }
        Ok(CatalogItem::new(
            id,
            name,
            self.kind,
            self.unit_price,
            self.per_adult_rate,
            self.package_size,
        ))
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "catalog_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub tenant_id: String,
    pub name: String,
    pub unit_price_minor: i64,
    pub category: String,
    pub beverage_class: Option<String>,
    pub supply_kind: Option<String>,
    pub per_adult_rate: f64,
    pub package_size: f64,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Model> for CatalogItem {
    fn from(model: &Model) -> Self {
        CatalogItem::new(
            model.id,
            model.name.clone(),
            ItemKind::from_codes(
                &model.category,
                model.beverage_class.as_deref(),
                model.supply_kind.as_deref(),
            ),
            MoneyCents::new(model.unit_price_minor),
            model.per_adult_rate,
            model.package_size,
        )
    }
}

impl ActiveModel {
    pub(crate) fn from_item(tenant_id: &str, item: &CatalogItem) -> Self {
        Self {
            id: ActiveValue::Set(item.id),
            tenant_id: ActiveValue::Set(tenant_id.to_string()),
            name: ActiveValue::Set(item.name.clone()),
            unit_price_minor: ActiveValue::Set(item.unit_price().cents()),
            category: ActiveValue::Set(item.kind.category().as_str().to_string()),
            beverage_class: ActiveValue::Set(
                item.kind.beverage_class().map(|c| c.as_str().to_string()),
            ),
            supply_kind: ActiveValue::Set(item.kind.supply_kind().map(|k| k.as_str().to_string())),
            per_adult_rate: ActiveValue::Set(item.rate()),
            package_size: ActiveValue::Set(item.package_size()),
            active: ActiveValue::Set(true),
        }
    }
}
