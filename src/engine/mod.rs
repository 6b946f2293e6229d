//! Engine modules: the arithmetic that turns a validated selection into
//! storage requirements.
//!
//! The engine layer is pure. It sits between input collection (what the user
//! wants) and presentation (how the numbers are shown), and performs no I/O.

pub mod requirements;

/// Highest IOPS any RDS volume accepts
pub const MAX_IOPS: u32 = 40_000;

/// Provisioned IOPS ceiling for SQL Server volumes
pub const SQL_SERVER_MAX_IOPS: u32 = 32_000;

/// Valid database page sizes, in KB
pub const MIN_PAGE_SIZE_KB: u32 = 1;
pub const MAX_PAGE_SIZE_KB: u32 = 32;

/// Provisioned IOPS are bought in blocks of this size
pub const PROVISIONED_IOPS_INCREMENT: u32 = 1_000;

/// io1 volumes deliver up to 50 IOPS per allocated GB
pub const PROVISIONED_IOPS_PER_GB: u32 = 50;

/// gp2 volumes deliver a baseline of 3 IOPS per allocated GB
pub const GP_IOPS_PER_GB: u32 = 3;

/// gp2 per-volume IOPS cap
pub const GP_MAX_IOPS: u32 = 10_000;

/// gp2 per-volume throughput cap, in Mbps
pub const GP_MAX_THROUGHPUT_MBPS: u32 = 1_280;

pub use requirements::{derive, DerivedRequirements, GpAssessment};
