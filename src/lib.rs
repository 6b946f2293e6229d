//! RDS IOPS Calculator Library
//!
//! Validates RDS sizing answers and derives the minimum disk throughput and
//! volume sizes for general-purpose (gp2) and provisioned IOPS (io1) storage.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config_file;
pub mod engine;
pub mod error;
pub mod input;
pub mod selection;
pub mod types;
pub mod ui;
pub mod validate;

// Re-export main types for convenience
pub use app::{SessionOptions, SessionOutcome};
pub use catalog::{EngineCatalog, EngineProfile};
pub use config_file::PlanFile;
pub use engine::{derive, DerivedRequirements, GpAssessment};
pub use error::{CatalogError, InputError, IopsCalcError};
pub use input::{InputCollector, IntroChoice};
pub use selection::UserSelection;
pub use types::{EngineId, IopsPolicy, StorageClass};
pub use ui::{JsonPresenter, Presenter, Screen, TextPresenter};
