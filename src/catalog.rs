//! Engine catalog
//!
//! A fixed, statically built table of the RDS engines the calculator knows
//! about. Rows are ordered alphabetically by display name, and that order is
//! the menu order.

use crate::engine::{MAX_IOPS, SQL_SERVER_MAX_IOPS};
use crate::error::CatalogError;
use crate::types::EngineId;
use serde::Serialize;

/// Static description of one database engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineProfile {
    pub id: EngineId,
    /// 1-based position in the interactive menu
    pub menu_number: u32,
    pub display_name: &'static str,
    pub default_page_size_kb: u32,
    /// Highest IOPS a provisioned volume can be bought with on this engine
    pub max_provisioned_iops: u32,
}

static PROFILES: [EngineProfile; 6] = [
    EngineProfile {
        id: EngineId::Aurora,
        menu_number: 1,
        display_name: "Amazon Aurora",
        default_page_size_kb: 16,
        max_provisioned_iops: MAX_IOPS,
    },
    EngineProfile {
        id: EngineId::MariaDb,
        menu_number: 2,
        display_name: "MariaDB",
        default_page_size_kb: 16,
        max_provisioned_iops: MAX_IOPS,
    },
    EngineProfile {
        id: EngineId::SqlServer,
        menu_number: 3,
        display_name: "Microsoft SQL Server",
        default_page_size_kb: 8,
        max_provisioned_iops: SQL_SERVER_MAX_IOPS,
    },
    EngineProfile {
        id: EngineId::MySql,
        menu_number: 4,
        display_name: "MySQL",
        default_page_size_kb: 16,
        max_provisioned_iops: MAX_IOPS,
    },
    EngineProfile {
        id: EngineId::Oracle,
        menu_number: 5,
        display_name: "Oracle",
        default_page_size_kb: 8,
        max_provisioned_iops: MAX_IOPS,
    },
    EngineProfile {
        id: EngineId::PostgreSql,
        menu_number: 6,
        display_name: "PostgreSQL",
        default_page_size_kb: 8,
        max_provisioned_iops: MAX_IOPS,
    },
];

static STANDARD: EngineCatalog = EngineCatalog {
    profiles: &PROFILES,
};

/// Read-only lookup table of engine profiles
#[derive(Debug)]
pub struct EngineCatalog {
    profiles: &'static [EngineProfile],
}

impl EngineCatalog {
    /// The built-in catalog of the six supported RDS engines
    pub fn standard() -> &'static EngineCatalog {
        &STANDARD
    }

    /// Look up a profile by its menu number (1-based)
    pub fn lookup(&self, menu_number: u32) -> Result<&'static EngineProfile, CatalogError> {
        self.profiles
            .iter()
            .find(|p| p.menu_number == menu_number)
            .ok_or(CatalogError::NotFound(menu_number))
    }

    /// Look up a profile by engine id
    pub fn by_id(&self, id: EngineId) -> &'static EngineProfile {
        // Every EngineId has a row; the table test below guards this.
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .unwrap_or(&self.profiles[0])
    }

    /// Profiles in menu order
    pub fn iter(&self) -> impl Iterator<Item = &'static EngineProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_engine_has_a_profile() {
        let catalog = EngineCatalog::standard();
        for id in EngineId::iter() {
            assert!(catalog.iter().any(|p| p.id == id), "missing profile for {}", id);
            assert_eq!(catalog.by_id(id).id, id);
        }
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_lookup_by_menu_number() {
        let catalog = EngineCatalog::standard();
        assert_eq!(catalog.lookup(4).unwrap().display_name, "MySQL");
        assert_eq!(catalog.lookup(5).unwrap().default_page_size_kb, 8);
        assert_eq!(catalog.lookup(0), Err(CatalogError::NotFound(0)));
        assert_eq!(catalog.lookup(7), Err(CatalogError::NotFound(7)));
    }

    #[test]
    fn test_menu_order_is_alphabetical_by_name() {
        let catalog = EngineCatalog::standard();
        let numbers: Vec<u32> = catalog.iter().map(|p| p.menu_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);

        let names: Vec<&str> = catalog.iter().map(|p| p.display_name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);

        let ids: Vec<EngineId> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec![
                EngineId::Aurora,
                EngineId::MariaDb,
                EngineId::SqlServer,
                EngineId::MySql,
                EngineId::Oracle,
                EngineId::PostgreSql,
            ]
        );
    }

    #[test]
    fn test_sql_server_has_lower_ceiling() {
        let catalog = EngineCatalog::standard();
        assert_eq!(catalog.by_id(EngineId::SqlServer).max_provisioned_iops, 32_000);
        assert_eq!(catalog.by_id(EngineId::Oracle).max_provisioned_iops, 40_000);
    }
}
