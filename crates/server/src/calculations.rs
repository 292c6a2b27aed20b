//! Calculation API endpoints.

use api_types::calculation::{
    CalculationList, CalculationListResponse, CalculationNew, CalculationView, LineItemView,
};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use axum_extra::TypedHeader;
use engine::{CalculateCmd, CalculationResult, EventRequest, LineItem, People, StoredCalculation};
use uuid::Uuid;

use crate::{
    ServerError,
    server::{ServerState, UserIdHeader},
};

const DEFAULT_HISTORY_LIMIT: u64 = 20;
const MAX_HISTORY_LIMIT: u64 = 100;

fn map_line(line: LineItem) -> LineItemView {
    LineItemView {
        item_id: line.item_id,
        name: line.name,
        category: line.category.as_str().to_string(),
        beverage_class: line.beverage_class.map(|class| class.as_str().to_string()),
        unit_price_minor: line.unit_price.cents(),
        required_quantity: line.required_quantity,
        packages_to_buy: line.packages_to_buy,
        package_size: line.package_size,
        line_cost_minor: line.line_cost.cents(),
    }
}

fn map_result(request: &EventRequest, result: CalculationResult) -> CalculationView {
    CalculationView {
        id: None,
        created_at: None,
        user_id: None,
        total_people: result.total_people,
        adult_people: result.adult_people,
        drinker_people: result.drinker_people,
        adult_equivalent: result.adult_equivalent,
        duration_hours: request.duration_hours,
        line_items: result.line_items.into_iter().map(map_line).collect(),
        total_cost_minor: result.total_cost.cents(),
    }
}

fn map_stored(stored: StoredCalculation) -> CalculationView {
    CalculationView {
        id: Some(stored.id),
        created_at: Some(stored.created_at),
        user_id: stored.user_id,
        ..map_result(&stored.request, stored.result)
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Path(tenant_id): Path<String>,
    user: Option<TypedHeader<UserIdHeader>>,
    payload: Result<Json<CalculationNew>, JsonRejection>,
) -> Result<(StatusCode, Json<CalculationView>), ServerError> {
    let Json(payload) = payload?;
    let people = People::from_signed(
        payload.people.men,
        payload.people.women,
        payload.people.children,
        payload.people.drinkers,
    );
    let mut cmd = CalculateCmd::new(tenant_id, people)
        .duration_hours(payload.duration_hours)
        .items(payload.item_ids);
    let user_id = user.map(|TypedHeader(UserIdHeader(user_id))| user_id);
    if let Some(user_id) = &user_id {
        cmd = cmd.user_id(user_id.as_str());
    }

    let outcome = state.engine.calculate(cmd).await?;
    // Without an id the result was computed but not stored.
    let status = if outcome.id.is_some() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    let view = CalculationView {
        id: outcome.id,
        user_id,
        ..map_result(&outcome.request, outcome.result)
    };
    Ok((status, Json(view)))
}

pub async fn list(
    State(state): State<ServerState>,
    Path(tenant_id): Path<String>,
    Query(query): Query<CalculationList>,
) -> Result<Json<CalculationListResponse>, ServerError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .min(MAX_HISTORY_LIMIT);
    let calculations = state
        .engine
        .list_calculations(&tenant_id, limit)
        .await?
        .into_iter()
        .map(map_stored)
        .collect();

    Ok(Json(CalculationListResponse { calculations }))
}

pub async fn get(
    State(state): State<ServerState>,
    Path((tenant_id, calculation_id)): Path<(String, Uuid)>,
) -> Result<Json<CalculationView>, ServerError> {
    let stored = state.engine.calculation(&tenant_id, calculation_id).await?;
    Ok(Json(map_stored(stored)))
}
