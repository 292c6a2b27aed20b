use api_types::params::ConsumptionParamsView;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use engine::ConsumptionParams;

use crate::{ServerError, server::ServerState};

fn map_params(params: ConsumptionParams) -> ConsumptionParamsView {
    ConsumptionParamsView {
        grams_meat_per_adult: params.grams_meat_per_adult,
        grams_side_per_adult: params.grams_side_per_adult,
        ml_beverage_per_adult: params.ml_beverage_per_adult,
        grams_dessert_per_adult: params.grams_dessert_per_adult,
    }
}

pub async fn get(
    State(state): State<ServerState>,
    Path(tenant_id): Path<String>,
) -> Result<Json<ConsumptionParamsView>, ServerError> {
    let params = state.engine.consumption_params(&tenant_id).await?;
    Ok(Json(map_params(params)))
}

/// Replace the tenant rations.
pub async fn put(
    State(state): State<ServerState>,
    Path(tenant_id): Path<String>,
    payload: Result<Json<ConsumptionParamsView>, JsonRejection>,
) -> Result<Json<ConsumptionParamsView>, ServerError> {
    let Json(payload) = payload?;
    let params = ConsumptionParams {
        grams_meat_per_adult: payload.grams_meat_per_adult,
        grams_side_per_adult: payload.grams_side_per_adult,
        ml_beverage_per_adult: payload.ml_beverage_per_adult,
        grams_dessert_per_adult: payload.grams_dessert_per_adult,
    };
    state
        .engine
        .set_consumption_params(&tenant_id, params)
        .await?;
    Ok(Json(map_params(params)))
}
