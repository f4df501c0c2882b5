//! Ingestion and analytics for construction-site inspection exports.
//!
//! Text comes in through [`process::ingest`] (or a [`Session`]), becomes a list
//! of enriched [`Record`]s, and is summarised by [`aggregate`] after an optional
//! [`filter`]. Nothing here touches the clock or installs a tracing subscriber.

pub mod analytics;
pub mod category;
pub mod config;
pub mod demo;
pub mod error;
pub mod filter;
pub mod process;
pub mod schema;
pub mod session;

pub use analytics::{aggregate, aggregate_refs, AggregateOptions, Summary};
pub use config::{EngineConfig, Variant};
pub use error::IngestError;
pub use filter::{filter, filter_refs, Criteria};
pub use process::{ingest, parse};
pub use schema::{build, Record};
pub use session::Session;
