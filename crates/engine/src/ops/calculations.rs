use chrono::Utc;
use sea_orm::{QueryFilter, QueryOrder, QuerySelect, prelude::*};
use uuid::Uuid;

use crate::{
    CalculationResult, EngineError, EventRequest, ResultEngine, StoredCalculation, calculate,
    calculation::validate, calculations, commands::CalculateCmd,
};

use super::{Engine, normalize_tenant_id};

/// A computed calculation and, when the snapshot could be stored, its id.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculationOutcome {
    pub id: Option<Uuid>,
    pub request: EventRequest,
    pub result: CalculationResult,
}

impl Engine {
    /// Resolve the selection against the tenant catalog, compute and store
    /// the result.
    ///
    /// Storing is best effort: a failure is logged and the outcome is
    /// returned without an id.
    pub async fn calculate(&self, cmd: CalculateCmd) -> ResultEngine<CalculationOutcome> {
        let tenant_id = normalize_tenant_id(&cmd.tenant_id)?;
        validate(&cmd.people, cmd.item_ids.len())?;
        let items = self.selected_items(&tenant_id, &cmd.item_ids).await?;
        let consumption = self.consumption_params(&tenant_id).await?;
        let request = EventRequest::new(cmd.people, cmd.duration_hours, items, consumption);
        let result = calculate(&request)?;

        let id = match self
            .store_calculation(&tenant_id, cmd.user_id.as_deref(), &request, &result)
            .await
        {
            Ok(id) => Some(id),
            Err(err) => {
                tracing::warn!(tenant_id = %tenant_id, "failed to store calculation: {err}");
                None
            }
        };

        Ok(CalculationOutcome {
            id,
            request,
            result,
        })
    }

    /// Persist a calculation snapshot and return its id.
    pub async fn store_calculation(
        &self,
        tenant_id: &str,
        user_id: Option<&str>,
        request: &EventRequest,
        result: &CalculationResult,
    ) -> ResultEngine<Uuid> {
        let tenant_id = normalize_tenant_id(tenant_id)?;
        let id = Uuid::new_v4();
        calculations::ActiveModel::from_snapshot(
            id,
            &tenant_id,
            user_id,
            Utc::now(),
            request,
            result,
        )?
        .insert(&self.database)
        .await?;
        tracing::info!(
            tenant_id = %tenant_id,
            calculation_id = %id,
            total_cost = %result.total_cost,
            "calculation stored"
        );
        Ok(id)
    }

    /// Most recent calculations of a tenant, newest first.
    pub async fn list_calculations(
        &self,
        tenant_id: &str,
        limit: u64,
    ) -> ResultEngine<Vec<StoredCalculation>> {
        let tenant_id = normalize_tenant_id(tenant_id)?;
        let models = calculations::Entity::find()
            .filter(calculations::Column::TenantId.eq(tenant_id))
            .order_by_desc(calculations::Column::CreatedAt)
            .order_by_desc(calculations::Column::Id)
            .limit(limit)
            .all(&self.database)
            .await?;
        models.iter().map(StoredCalculation::try_from).collect()
    }

    pub async fn calculation(&self, tenant_id: &str, id: Uuid) -> ResultEngine<StoredCalculation> {
        let tenant_id = normalize_tenant_id(tenant_id)?;
        let model = calculations::Entity::find_by_id(id)
            .filter(calculations::Column::TenantId.eq(tenant_id))
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("calculation {id}")))?;
        StoredCalculation::try_from(&model)
    }
}
