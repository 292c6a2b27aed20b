use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::run_with_listener;

mod calculations;
mod items;
mod params;
mod server;

pub mod types {
    pub mod catalog {
        pub use api_types::catalog::{ItemListResponse, ItemNew, ItemView};
    }

    pub mod params {
        pub use api_types::params::ConsumptionParamsView;
    }

    pub mod calculation {
        pub use api_types::calculation::{
            CalculationList, CalculationListResponse, CalculationNew, CalculationView,
            LineItemView, PeopleInput,
        };
    }
}

#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    /// Malformed request: bad JSON, wrong content type, unparsable path.
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::Serialization(_) | EngineError::Database(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        EngineError::Validation(_)
        | EngineError::InvalidItem(_)
        | EngineError::InvalidParams(_)
        | EngineError::InvalidAmount(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        EngineError::Serialization(json_err) => {
            tracing::error!("stored calculation is unreadable: {json_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<axum::extract::rejection::JsonRejection> for ServerError {
    fn from(value: axum::extract::rejection::JsonRejection) -> Self {
        Self::Generic(value.body_text())
    }
}
