//! Catalog API endpoints.

use api_types::catalog::{ItemListResponse, ItemNew, ItemView};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use engine::{CatalogItem, CreateItemCmd, ItemKind, MoneyCents};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

fn map_item(item: CatalogItem) -> ItemView {
    ItemView {
        id: item.id,
        category: item.kind.category().as_str().to_string(),
        beverage_class: item
            .kind
            .beverage_class()
            .map(|class| class.as_str().to_string()),
        supply_kind: item.kind.supply_kind().map(|kind| kind.as_str().to_string()),
        unit_price_minor: item.unit_price().cents(),
        per_adult_rate: item.rate(),
        package_size: item.package_size(),
        name: item.name,
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Path(tenant_id): Path<String>,
) -> Result<Json<ItemListResponse>, ServerError> {
    let items = state
        .engine
        .list_items(&tenant_id)
        .await?
        .into_iter()
        .map(map_item)
        .collect();

    Ok(Json(ItemListResponse { items }))
}

pub async fn create(
    State(state): State<ServerState>,
    Path(tenant_id): Path<String>,
    payload: Result<Json<ItemNew>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemView>), ServerError> {
    let Json(payload) = payload?;
    let kind = ItemKind::parse(
        &payload.category,
        payload.beverage_class.as_deref(),
        payload.supply_kind.as_deref(),
    )?;

    let mut cmd = CreateItemCmd::new(tenant_id, payload.name, kind)
        .unit_price(MoneyCents::new(payload.unit_price_minor))
        .per_adult_rate(payload.per_adult_rate);
    if let Some(size) = payload.package_size {
        cmd = cmd.package_size(size);
    }

    let item = state.engine.create_item(cmd).await?;
    Ok((StatusCode::CREATED, Json(map_item(item))))
}

/// A single active item; archived items answer 404.
pub async fn get(
    State(state): State<ServerState>,
    Path((tenant_id, item_id)): Path<(String, Uuid)>,
) -> Result<Json<ItemView>, ServerError> {
    let item = state.engine.item(&tenant_id, item_id).await?;
    Ok(Json(map_item(item)))
}

pub async fn archive(
    State(state): State<ServerState>,
    Path((tenant_id, item_id)): Path<(String, Uuid)>,
) -> Result<StatusCode, ServerError> {
    state.engine.archive_item(&tenant_id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
