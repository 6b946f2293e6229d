//! Storage Requirements Engine
//!
//! Translates a validated `UserSelection` into the minimum disk throughput and
//! volume sizes an RDS instance needs for the requested IOPS.
//!
//! # Formulas
//!
//! | Figure                   | Formula |
//! |--------------------------|---------|
//! | Max read rate (KB/s)     | IOPS × page size |
//! | Disk throughput (Mbps)   | ⌈IOPS × page size × 8 / 1000⌉ |
//! | gp2 volume size (GB)     | ⌈IOPS / 3⌉, only up to 10000 IOPS and 1280 Mbps |
//! | io1 rounded IOPS         | ⌈IOPS / 1000⌉ × 1000 |
//! | io1 volume size (GB)     | rounded IOPS / 50 |
//!
//! # Design
//!
//! - **Pure logic**: No I/O, no side effects. The same selection always
//!   yields the same requirements.
//! - **Total**: The selection is already validated, so there are no error
//!   cases. An infeasible gp2 plan is a verdict, not a failure.

use crate::engine::{
    GP_IOPS_PER_GB, GP_MAX_IOPS, GP_MAX_THROUGHPUT_MBPS, PROVISIONED_IOPS_INCREMENT,
    PROVISIONED_IOPS_PER_GB,
};
use crate::selection::UserSelection;
use serde::Serialize;
use tracing::debug;

// ============================================================================
// Result Types
// ============================================================================

/// Whether a general-purpose (gp2) volume can serve the requested load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum GpAssessment {
    /// gp2 works with a volume of at least this many GB
    Feasible { volume_size_gb: u32 },
    /// gp2 cannot reach the requested load; at least one flag is set
    Infeasible {
        iops_exceeded: bool,
        throughput_exceeded: bool,
    },
}

impl GpAssessment {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible { .. })
    }
}

/// Everything the calculator derives from one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedRequirements {
    pub max_throughput_kb_per_sec: u64,
    pub disk_throughput_mbps: u32,
    pub general_purpose: GpAssessment,
    pub rounded_provisioned_iops: u32,
    pub provisioned_volume_size_gb: u32,
    /// IOPS the user asked for, kept to detect rounding
    #[serde(skip)]
    desired_iops: u32,
}

impl DerivedRequirements {
    /// gp2 volume size, or `None` when gp2 is not viable
    pub fn gp_volume_size_gb(&self) -> Option<u32> {
        match self.general_purpose {
            GpAssessment::Feasible { volume_size_gb } => Some(volume_size_gb),
            GpAssessment::Infeasible { .. } => None,
        }
    }

    /// True when the provisioned IOPS had to be rounded up to a full block
    pub fn iops_rounded_up(&self) -> bool {
        self.rounded_provisioned_iops > self.desired_iops
    }
}

// ============================================================================
// Derivation
// ============================================================================

/// Compute the storage requirements for a validated selection.
pub fn derive(selection: &UserSelection) -> DerivedRequirements {
    let iops = selection.desired_iops();
    let page = selection.page_size_kb();

    let max_throughput_kb_per_sec = u64::from(iops) * u64::from(page);
    let disk_throughput_mbps = disk_throughput_mbps(iops, page);
    let general_purpose = assess_general_purpose(iops, disk_throughput_mbps);
    let rounded_provisioned_iops = round_up_to_block(iops);
    let provisioned_volume_size_gb = rounded_provisioned_iops / PROVISIONED_IOPS_PER_GB;

    let requirements = DerivedRequirements {
        max_throughput_kb_per_sec,
        disk_throughput_mbps,
        general_purpose,
        rounded_provisioned_iops,
        provisioned_volume_size_gb,
        desired_iops: iops,
    };
    debug!(?requirements, "derived storage requirements");
    requirements
}

/// ⌈iops × page × 8 / 1000⌉ in integer arithmetic
fn disk_throughput_mbps(iops: u32, page_size_kb: u32) -> u32 {
    let kilobits = u64::from(iops) * u64::from(page_size_kb) * 8;
    // 40000 IOPS × 32 KB bounds this far below u32::MAX
    u32::try_from(kilobits.div_ceil(1000)).unwrap_or(u32::MAX)
}

fn assess_general_purpose(iops: u32, throughput_mbps: u32) -> GpAssessment {
    let iops_exceeded = iops > GP_MAX_IOPS;
    let throughput_exceeded = throughput_mbps > GP_MAX_THROUGHPUT_MBPS;
    if iops_exceeded || throughput_exceeded {
        GpAssessment::Infeasible {
            iops_exceeded,
            throughput_exceeded,
        }
    } else {
        GpAssessment::Feasible {
            volume_size_gb: iops.div_ceil(GP_IOPS_PER_GB),
        }
    }
}

fn round_up_to_block(iops: u32) -> u32 {
    iops.div_ceil(PROVISIONED_IOPS_INCREMENT) * PROVISIONED_IOPS_INCREMENT
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EngineCatalog;
    use crate::types::{EngineId, IopsPolicy, StorageClass};

    fn selection(
        engine: EngineId,
        class: StorageClass,
        page: u32,
        iops: u32,
    ) -> UserSelection {
        let profile = EngineCatalog::standard().by_id(engine);
        UserSelection::new(profile, class, page, iops, IopsPolicy::Relaxed).unwrap()
    }

    #[test]
    fn test_mysql_provisioned_rounds_up() {
        let sel = selection(EngineId::MySql, StorageClass::Provisioned, 16, 4500);
        let req = derive(&sel);
        assert_eq!(req.rounded_provisioned_iops, 5000);
        assert_eq!(req.provisioned_volume_size_gb, 100);
        assert_eq!(req.disk_throughput_mbps, 576);
        assert_eq!(req.max_throughput_kb_per_sec, 72_000);
        assert!(req.iops_rounded_up());
    }

    #[test]
    fn test_gp_infeasible_above_iops_cap() {
        let sel = selection(EngineId::PostgreSql, StorageClass::GeneralPurpose, 8, 12_000);
        let req = derive(&sel);
        assert_eq!(req.disk_throughput_mbps, 768);
        assert_eq!(
            req.general_purpose,
            GpAssessment::Infeasible {
                iops_exceeded: true,
                throughput_exceeded: false
            }
        );
        assert_eq!(req.gp_volume_size_gb(), None);
    }

    #[test]
    fn test_gp_infeasible_above_throughput_cap() {
        // 10000 IOPS × 32 KB = 2560 Mbps
        let sel = selection(EngineId::Aurora, StorageClass::GeneralPurpose, 32, 10_000);
        let req = derive(&sel);
        assert_eq!(req.disk_throughput_mbps, 2560);
        assert_eq!(
            req.general_purpose,
            GpAssessment::Infeasible {
                iops_exceeded: false,
                throughput_exceeded: true
            }
        );
    }

    #[test]
    fn test_gp_feasible_at_limits() {
        // 10000 IOPS × 16 KB × 8 / 1000 = 1280 Mbps, exactly at the cap
        let sel = selection(EngineId::MySql, StorageClass::GeneralPurpose, 16, 10_000);
        let req = derive(&sel);
        assert_eq!(req.disk_throughput_mbps, 1280);
        assert_eq!(req.gp_volume_size_gb(), Some(3334));
        assert!(req.general_purpose.is_feasible());
    }

    #[test]
    fn test_throughput_rounds_up() {
        // 1 × 1 × 8 / 1000 = 0.008 -> 1
        let sel = selection(EngineId::Oracle, StorageClass::GeneralPurpose, 1, 1);
        let req = derive(&sel);
        assert_eq!(req.disk_throughput_mbps, 1);
        assert_eq!(req.gp_volume_size_gb(), Some(1));
        assert_eq!(req.rounded_provisioned_iops, 1000);
        assert_eq!(req.provisioned_volume_size_gb, 20);
    }

    #[test]
    fn test_exact_block_not_rounded() {
        let sel = selection(EngineId::MySql, StorageClass::Provisioned, 16, 5000);
        let req = derive(&sel);
        assert_eq!(req.rounded_provisioned_iops, 5000);
        assert!(!req.iops_rounded_up());
    }

    #[test]
    fn test_json_shape() {
        let sel = selection(EngineId::MySql, StorageClass::GeneralPurpose, 16, 3000);
        let json = serde_json::to_value(derive(&sel)).unwrap();
        assert_eq!(json["general_purpose"]["verdict"], "feasible");
        assert_eq!(json["general_purpose"]["volume_size_gb"], 1000);
        assert_eq!(json["provisioned_volume_size_gb"], 60);
    }
}
