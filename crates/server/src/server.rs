use axum::{Router, routing::get};
use axum_extra::headers::{Error as AxumError, Header};

use std::sync::Arc;

use crate::{calculations, items, params};
use engine::Engine;

static USER_ID_HEADER: axum::http::HeaderName = axum::http::HeaderName::from_static("x-user-id");

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// `TypedHeader` for the caller identity.
///
/// Optional: when present, stored calculations are attributed to it.
#[derive(Debug)]
pub(crate) struct UserIdHeader(pub(crate) String);

impl Header for UserIdHeader {
    fn name() -> &'static axum::http::HeaderName {
        &USER_ID_HEADER
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, AxumError>
    where
        Self: Sized,
        I: Iterator<Item = &'i axum::http::HeaderValue>,
    {
        let value = values.next().ok_or_else(AxumError::invalid)?;
        let Ok(value) = value.to_str() else {
            return Err(AxumError::invalid());
        };
        let value = value.trim();
        if value.is_empty() {
            return Err(AxumError::invalid());
        }

        Ok(UserIdHeader(value.to_string()))
    }

    fn encode<E: Extend<axum::http::HeaderValue>>(&self, values: &mut E) {
        match axum::http::HeaderValue::from_str(&self.0) {
            Ok(value) => values.extend(std::iter::once(value)),
            Err(_) => tracing::error!("failed to encode x-user-id header"),
        }
    }
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route(
            "/tenants/{tenant_id}/items",
            get(items::list).post(items::create),
        )
        .route(
            "/tenants/{tenant_id}/items/{item_id}",
            get(items::get).delete(items::archive),
        )
        .route(
            "/tenants/{tenant_id}/params",
            get(params::get).put(params::put),
        )
        .route(
            "/tenants/{tenant_id}/calculations",
            get(calculations::list).post(calculations::create),
        )
        .route(
            "/tenants/{tenant_id}/calculations/{calculation_id}",
            get(calculations::get),
        )
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
    };

    axum::serve(listener, router(state)).await
}
