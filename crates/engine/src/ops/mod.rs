use sea_orm::DatabaseConnection;

use crate::{ConsumptionParams, EngineError, ResultEngine};

mod calculations;
mod items;
mod params;

pub use calculations::CalculationOutcome;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

/// Catalog provider, configuration source and calculation sink around the
/// pure [`calculate`](crate::calculate) function.
#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
    defaults: ConsumptionParams,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Rations used for tenants without an override.
    pub fn defaults(&self) -> ConsumptionParams {
        self.defaults
    }
}

fn normalize_tenant_id(value: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::Validation(
            "tenant id must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
    defaults: ConsumptionParams,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Override the engine-wide default rations.
    pub fn defaults(mut self, defaults: ConsumptionParams) -> EngineBuilder {
        self.defaults = defaults;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        self.defaults.validate()?;
        Ok(Engine {
            database: self.database,
            defaults: self.defaults,
        })
    }
}
