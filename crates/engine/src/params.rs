//! Per-tenant consumption parameters.

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

/// Base rations per adult equivalent.
///
/// Every tenant starts from [`ConsumptionParams::default`] and may override
/// any value independently.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumptionParams {
    pub grams_meat_per_adult: f64,
    pub grams_side_per_adult: f64,
    pub ml_beverage_per_adult: f64,
    pub grams_dessert_per_adult: f64,
}

impl Default for ConsumptionParams {
    fn default() -> Self {
        Self {
            grams_meat_per_adult: 400.0,
            grams_side_per_adult: 250.0,
            ml_beverage_per_adult: 1200.0,
            grams_dessert_per_adult: 100.0,
        }
    }
}

impl ConsumptionParams {
    /// Check that every ration is a finite, positive number.
    pub fn validate(&self) -> ResultEngine<()> {
        let fields = [
            ("grams_meat_per_adult", self.grams_meat_per_adult),
            ("grams_side_per_adult", self.grams_side_per_adult),
            ("ml_beverage_per_adult", self.ml_beverage_per_adult),
            ("grams_dessert_per_adult", self.grams_dessert_per_adult),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(EngineError::InvalidParams(format!(
                    "{name} must be > 0, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "consumption_params")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub tenant_id: String,
    pub grams_meat_per_adult: f64,
    pub grams_side_per_adult: f64,
    pub ml_beverage_per_adult: f64,
    pub grams_dessert_per_adult: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Model> for ConsumptionParams {
    fn from(model: &Model) -> Self {
        Self {
            grams_meat_per_adult: model.grams_meat_per_adult,
            grams_side_per_adult: model.grams_side_per_adult,
            ml_beverage_per_adult: model.ml_beverage_per_adult,
            grams_dessert_per_adult: model.grams_dessert_per_adult,
        }
    }
}

impl ActiveModel {
    pub(crate) fn from_params(tenant_id: &str, params: &ConsumptionParams) -> Self {
        Self {
            tenant_id: ActiveValue::Set(tenant_id.to_string()),
            grams_meat_per_adult: ActiveValue::Set(params.grams_meat_per_adult),
            grams_side_per_adult: ActiveValue::Set(params.grams_side_per_adult),
            ml_beverage_per_adult: ActiveValue::Set(params.ml_beverage_per_adult),
            grams_dessert_per_adult: ActiveValue::Set(params.grams_dessert_per_adult),
        }
    }
}
