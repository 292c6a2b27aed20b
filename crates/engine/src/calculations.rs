//! Stored calculation snapshots.
//!
//! A calculation is persisted as the JSON of its request and result, so
//! later catalog edits never change what was computed at the time.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use uuid::Uuid;

use crate::{CalculationResult, EngineError, EventRequest, ResultEngine};

#[derive(Clone, Debug, PartialEq)]
pub struct StoredCalculation {
    pub id: Uuid,
    pub tenant_id: String,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub request: EventRequest,
    pub result: CalculationResult,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "calculations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub tenant_id: String,
    pub user_id: Option<String>,
    pub created_at: DateTimeUtc,
    pub total_cost_minor: i64,
    pub request_json: String,
    pub result_json: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<&Model> for StoredCalculation {
    type Error = EngineError;

    fn try_from(model: &Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            tenant_id: model.tenant_id.clone(),
            user_id: model.user_id.clone(),
            created_at: model.created_at,
            request: serde_json::from_str(&model.request_json)?,
            result: serde_json::from_str(&model.result_json)?,
        })
    }
}

impl ActiveModel {
    pub(crate) fn from_snapshot(
        id: Uuid,
        tenant_id: &str,
        user_id: Option<&str>,
        created_at: DateTime<Utc>,
        request: &EventRequest,
        result: &CalculationResult,
    ) -> ResultEngine<Self> {
        Ok(Self {
            id: ActiveValue::Set(id),
            tenant_id: ActiveValue::Set(tenant_id.to_string()),
            user_id: ActiveValue::Set(user_id.map(str::to_string)),
            created_at: ActiveValue::Set(created_at),
            total_cost_minor: ActiveValue::Set(result.total_cost.cents()),
            request_json: ActiveValue::Set(serde_json::to_string(request)?),
            result_json: ActiveValue::Set(serde_json::to_string(result)?),
        })
    }
}
