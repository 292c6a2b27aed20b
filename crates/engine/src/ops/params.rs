use sea_orm::{TransactionTrait, prelude::*};

use crate::{ConsumptionParams, ResultEngine, params};

use super::{Engine, normalize_tenant_id, with_tx};

impl Engine {
    /// Rations for a tenant: its override when present, the engine defaults
    /// otherwise.
    pub async fn consumption_params(&self, tenant_id: &str) -> ResultEngine<ConsumptionParams> {
        let tenant_id = normalize_tenant_id(tenant_id)?;
        let model = params::Entity::find_by_id(tenant_id)
            .one(&self.database)
            .await?;
        Ok(model
            .as_ref()
            .map(ConsumptionParams::from)
            .unwrap_or(self.defaults))
    }

    /// Store a tenant override; every ration must be a positive number.
    pub async fn set_consumption_params(
        &self,
        tenant_id: &str,
        consumption: ConsumptionParams,
    ) -> ResultEngine<ConsumptionParams> {
        let tenant_id = normalize_tenant_id(tenant_id)?;
        consumption.validate()?;
        with_tx!(self, |db_tx| {
            let existing = params::Entity::find_by_id(tenant_id.clone())
                .one(&db_tx)
                .await?;
            let active = params::ActiveModel::from_params(&tenant_id, &consumption);
            if existing.is_some() {
                active.update(&db_tx).await?;
            } else {
                active.insert(&db_tx).await?;
            }
            tracing::info!(tenant_id = %tenant_id, "consumption params updated");
            Ok(consumption)
        })
    }

    /// Drop a tenant override, going back to the engine defaults.
    pub async fn reset_consumption_params(&self, tenant_id: &str) -> ResultEngine<ConsumptionParams> {
        let tenant_id = normalize_tenant_id(tenant_id)?;
        params::Entity::delete_by_id(tenant_id)
            .exec(&self.database)
            .await?;
        Ok(self.defaults)
    }
}
