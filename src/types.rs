//! Type-safe domain types for the IOPS calculator
//!
//! Engine identifiers, storage classes and validation policies are plain
//! enums with string round-trips, so CLI flags, plan files and menu answers
//! all funnel into the same exhaustive matches.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Supported RDS database engines.
///
/// Variants are declared in menu order, so the derived `Ord` and `EnumIter`
/// follow the menu rather than the alphabetical order of the ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum EngineId {
    #[strum(to_string = "aurora")]
    Aurora,
    #[strum(to_string = "mariadb", serialize = "maria")]
    MariaDb,
    #[strum(to_string = "sqlserver", serialize = "mssql", serialize = "sql-server")]
    SqlServer,
    #[strum(to_string = "mysql")]
    MySql,
    #[strum(to_string = "oracle")]
    Oracle,
    #[strum(to_string = "postgresql", serialize = "postgres")]
    PostgreSql,
}

/// RDS storage class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum StorageClass {
    /// General-purpose SSD (gp2): IOPS scale with volume size
    #[default]
    #[strum(to_string = "gp2", serialize = "general-purpose", serialize = "1")]
    GeneralPurpose,
    /// Provisioned IOPS SSD (io1): IOPS bought independently of size
    #[strum(to_string = "io1", serialize = "provisioned", serialize = "2")]
    Provisioned,
}

impl StorageClass {
    /// Long human-readable name
    pub fn description(&self) -> &'static str {
        match self {
            Self::GeneralPurpose => "general-purpose SSD (gp2)",
            Self::Provisioned => "provisioned IOPS (io1)",
        }
    }
}

/// How provisioned IOPS answers are validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum IopsPolicy {
    /// Provisioned IOPS must be an exact multiple of 1000
    #[default]
    Strict,
    /// Any positive provisioned IOPS is accepted and rounded up later
    Relaxed,
}
