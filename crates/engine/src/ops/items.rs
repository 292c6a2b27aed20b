use std::collections::HashMap;

use sea_orm::{ActiveValue, ConnectionTrait, QueryFilter, QueryOrder, prelude::*};
use uuid::Uuid;

use crate::{CatalogItem, EngineError, ResultEngine, catalog, commands::CreateItemCmd};

use super::{Engine, normalize_tenant_id};

impl Engine {
    /// Active catalog items of a tenant, ordered by name.
    pub async fn list_items(&self, tenant_id: &str) -> ResultEngine<Vec<CatalogItem>> {
        let tenant_id = normalize_tenant_id(tenant_id)?;
        let models = catalog::Entity::find()
            .filter(catalog::Column::TenantId.eq(tenant_id))
            .filter(catalog::Column::Active.eq(true))
            .order_by_asc(catalog::Column::Name)
            .all(&self.database)
            .await?;
        Ok(models.iter().map(CatalogItem::from).collect())
    }

    /// A single active item of the tenant catalog.
    pub async fn item(&self, tenant_id: &str, item_id: Uuid) -> ResultEngine<CatalogItem> {
        let tenant_id = normalize_tenant_id(tenant_id)?;
        let model = self
            .find_item(&self.database, &tenant_id, item_id)
            .await?
            .filter(|model| model.active)
            .ok_or_else(|| EngineError::KeyNotFound(format!("item {item_id}")))?;
        Ok(CatalogItem::from(&model))
    }

    /// Add an item to a tenant catalog.
    pub async fn create_item(&self, cmd: CreateItemCmd) -> ResultEngine<CatalogItem> {
        let tenant_id = normalize_tenant_id(&cmd.tenant_id)?;
        let item = cmd.item.into_item(Uuid::new_v4())?;
        catalog::ActiveModel::from_item(&tenant_id, &item)
            .insert(&self.database)
            .await?;
        Ok(item)
    }

    /// Hide an item from the catalog; stored calculations keep their copy.
    pub async fn archive_item(&self, tenant_id: &str, item_id: Uuid) -> ResultEngine<()> {
        let tenant_id = normalize_tenant_id(tenant_id)?;
        let model = self
            .find_item(&self.database, &tenant_id, item_id)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound(format!("item {item_id}")))?;
        if !model.active {
            return Ok(());
        }
        let mut active: catalog::ActiveModel = model.into();
        active.active = ActiveValue::Set(false);
        active.update(&self.database).await?;
        Ok(())
    }

    /// Resolve a selection against the active catalog, keeping the selection
    /// order and dropping repeated ids.
    pub(super) async fn selected_items(
        &self,
        tenant_id: &str,
        item_ids: &[Uuid],
    ) -> ResultEngine<Vec<CatalogItem>> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut by_id: HashMap<Uuid, catalog::Model> = catalog::Entity::find()
            .filter(catalog::Column::TenantId.eq(tenant_id))
            .filter(catalog::Column::Active.eq(true))
            .filter(catalog::Column::Id.is_in(item_ids.iter().copied()))
            .all(&self.database)
            .await?
            .into_iter()
            .map(|model| (model.id, model))
            .collect();

        let mut items = Vec::with_capacity(by_id.len());
        let mut seen = Vec::with_capacity(item_ids.len());
        for id in item_ids {
            if seen.contains(id) {
                continue;
            }
            seen.push(*id);
            let model = by_id
                .remove(id)
                .ok_or_else(|| EngineError::KeyNotFound(format!("item {id}")))?;
            items.push(CatalogItem::from(&model));
        }
        Ok(items)
    }

    async fn find_item<C: ConnectionTrait>(
        &self,
        db: &C,
        tenant_id: &str,
        item_id: Uuid,
    ) -> ResultEngine<Option<catalog::Model>> {
        Ok(catalog::Entity::find_by_id(item_id)
            .filter(catalog::Column::TenantId.eq(tenant_id))
            .one(db)
            .await?)
    }
}
