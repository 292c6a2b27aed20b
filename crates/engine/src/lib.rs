//! Event provisioning engine.
//!
//! The core is [`calculate`], a pure function turning a people composition
//! and a selection of catalog items into quantities, packages and costs.
//! [`Engine`] wraps it with the tenant catalog, the tenant consumption
//! parameters and the history of stored calculations.
//!
//! ```rust
//! use engine::{
//!     CatalogItem, ConsumptionParams, EventRequest, ItemKind, MoneyCents, People, calculate,
//! };
//!
//! let picanha = CatalogItem::new(
//!     uuid::Uuid::new_v4(),
//!     "Picanha",
//!     ItemKind::Meat,
//!     MoneyCents::new(50_00),
//!     400.0,
//!     1000.0,
//! );
//! let request = EventRequest::new(
//!     People::new(4, 2, 0, 0),
//!     4.0,
//!     vec![picanha],
//!     ConsumptionParams::default(),
//! );
//! let result = calculate(&request).unwrap();
//! assert_eq!(result.line_items[0].required_quantity, 2640.0);
//! assert_eq!(result.line_items[0].packages_to_buy, 3);
//! assert_eq!(result.total_cost, MoneyCents::new(150_00));
//! ```

pub use calculation::{
    CalculationResult, EventRequest, LineItem, People, adult_equivalent, calculate,
};
pub use calculations::StoredCalculation;
pub use catalog::{BeverageClass, CatalogItem, Category, ItemKind, NewItem, SupplyKind};
pub use commands::{CalculateCmd, CreateItemCmd};
pub use error::EngineError;
pub use money::MoneyCents;
pub use ops::{CalculationOutcome, Engine, EngineBuilder};
pub use params::ConsumptionParams;

pub mod calculation;
mod calculations;
mod catalog;
mod commands;
mod error;
mod money;
mod ops;
mod params;

type ResultEngine<T> = Result<T, EngineError>;
