//! Answer validation
//!
//! Each function turns one raw line of user input into a typed value or an
//! `InputError` describing the broken rule. They hold no state and never
//! print; the interactive collector and the non-interactive `calc` command
//! share them.

use crate::catalog::{EngineCatalog, EngineProfile};
use crate::engine::{MAX_IOPS, MAX_PAGE_SIZE_KB, MIN_PAGE_SIZE_KB, PROVISIONED_IOPS_INCREMENT};
use crate::error::InputError;
use crate::types::{EngineId, IopsPolicy, StorageClass};

pub const STORAGE_CLASS_HINT: &str = "You must enter 1 or 2.";

/// Allowed IOPS interval for one storage class / engine / policy combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IopsBounds {
    pub min: u32,
    pub max: u32,
    /// Answers must be an exact multiple of this, when set
    pub increment: Option<u32>,
}

impl IopsBounds {
    /// Explanation shown when an answer falls outside these bounds
    pub fn hint(&self) -> String {
        match self.increment {
            Some(step) => format!(
                "IOPS must be an integer, in an increment of {}, and between {} and {}.",
                step, self.min, self.max
            ),
            None => format!(
                "IOPS must be an integer between {} and {}.",
                self.min, self.max
            ),
        }
    }

    pub fn contains(&self, iops: u32) -> bool {
        iops >= self.min
            && iops <= self.max
            && self.increment.is_none_or(|step| iops % step == 0)
    }
}

/// IOPS bounds for the given combination.
///
/// General purpose accepts 1..=40000 on every engine. Provisioned is capped
/// by the engine's ceiling and, under the strict policy, must be a whole
/// number of 1000-IOPS blocks.
pub fn iops_bounds(class: StorageClass, engine: &EngineProfile, policy: IopsPolicy) -> IopsBounds {
    match (class, policy) {
        (StorageClass::GeneralPurpose, _) => IopsBounds {
            min: 1,
            max: MAX_IOPS,
            increment: None,
        },
        (StorageClass::Provisioned, IopsPolicy::Strict) => IopsBounds {
            min: PROVISIONED_IOPS_INCREMENT,
            max: engine.max_provisioned_iops,
            increment: Some(PROVISIONED_IOPS_INCREMENT),
        },
        (StorageClass::Provisioned, IopsPolicy::Relaxed) => IopsBounds {
            min: 1,
            max: engine.max_provisioned_iops,
            increment: None,
        },
    }
}

/// Explanation shown for a bad page size
pub fn page_size_hint() -> String {
    format!(
        "The page number must be an integer between {} and {}.",
        MIN_PAGE_SIZE_KB, MAX_PAGE_SIZE_KB
    )
}

/// Explanation shown for a bad engine menu answer
pub fn engine_menu_hint(catalog: &EngineCatalog) -> String {
    format!("You must enter a number between 1 and {}.", catalog.len())
}

/// Parse a non-negative whole number made only of ASCII digits.
///
/// Surrounding whitespace is ignored. Signs, decimals and empty input are
/// malformed; digit strings too large for `u32` are out of range.
pub fn parse_whole_number(raw: &str, hint: &str) -> Result<u32, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::malformed(hint));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| InputError::out_of_range(hint))
}

/// Validate an engine menu answer
pub fn parse_engine_choice(
    raw: &str,
    catalog: &EngineCatalog,
) -> Result<&'static EngineProfile, InputError> {
    let hint = engine_menu_hint(catalog);
    let number = parse_whole_number(raw, &hint)?;
    catalog
        .lookup(number)
        .map_err(|_| InputError::out_of_range(hint))
}

/// Resolve an engine given either a menu number or an engine id/alias
pub fn parse_engine_name(
    raw: &str,
    catalog: &EngineCatalog,
) -> Result<&'static EngineProfile, InputError> {
    let trimmed = raw.trim();
    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return parse_engine_choice(trimmed, catalog);
    }
    trimmed
        .parse::<EngineId>()
        .map(|id| catalog.by_id(id))
        .map_err(|_| {
            let known: Vec<String> = catalog.iter().map(|p| p.id.to_string()).collect();
            InputError::malformed(format!(
                "Unknown engine '{}'. Valid: {} or 1-{}",
                trimmed,
                known.join(", "),
                catalog.len()
            ))
        })
}

/// Validate a storage class menu answer (1 = gp2, 2 = io1)
pub fn parse_storage_class(raw: &str) -> Result<StorageClass, InputError> {
    match parse_whole_number(raw, STORAGE_CLASS_HINT)? {
        1 => Ok(StorageClass::GeneralPurpose),
        2 => Ok(StorageClass::Provisioned),
        _ => Err(InputError::out_of_range(STORAGE_CLASS_HINT)),
    }
}

/// Resolve a storage class from a menu number or a name (`gp2`, `io1`, ...)
pub fn parse_storage_name(raw: &str) -> Result<StorageClass, InputError> {
    raw.trim().parse::<StorageClass>().map_err(|_| {
        InputError::malformed(format!(
            "Unknown storage class '{}'. Valid: 1, 2, gp2, io1",
            raw.trim()
        ))
    })
}

/// Validate a page size answer; blank input takes `default_kb`
pub fn parse_page_size(raw: &str, default_kb: u32) -> Result<u32, InputError> {
    if raw.trim().is_empty() {
        return Ok(default_kb);
    }
    let size = parse_whole_number(raw, &page_size_hint())?;
    check_page_size(size)
}

pub fn check_page_size(size: u32) -> Result<u32, InputError> {
    if (MIN_PAGE_SIZE_KB..=MAX_PAGE_SIZE_KB).contains(&size) {
        Ok(size)
    } else {
        Err(InputError::out_of_range(page_size_hint()))
    }
}

/// Validate a desired IOPS answer
pub fn parse_iops(
    raw: &str,
    class: StorageClass,
    engine: &EngineProfile,
    policy: IopsPolicy,
) -> Result<u32, InputError> {
    let bounds = iops_bounds(class, engine, policy);
    let iops = parse_whole_number(raw, &bounds.hint())?;
    check_iops(iops, class, engine, policy)
}

pub fn check_iops(
    iops: u32,
    class: StorageClass,
    engine: &EngineProfile,
    policy: IopsPolicy,
) -> Result<u32, InputError> {
    let bounds = iops_bounds(class, engine, policy);
    if iops < bounds.min || iops > bounds.max {
        return Err(InputError::out_of_range(bounds.hint()));
    }
    match bounds.increment {
        Some(step) if iops % step != 0 => Err(InputError::not_increment(step, bounds.hint())),
        _ => Ok(iops),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static EngineCatalog {
        EngineCatalog::standard()
    }

    fn mysql() -> &'static EngineProfile {
        catalog().by_id(EngineId::MySql)
    }

    #[test]
    fn test_whole_number_rejects_non_digits() {
        for raw in ["abc", "", "  ", "-5", "+5", "4.5", "1e3", "12a"] {
            assert!(
                matches!(parse_whole_number(raw, "h"), Err(InputError::Malformed { .. })),
                "{:?} should be malformed",
                raw
            );
        }
        assert_eq!(parse_whole_number(" 42\n", "h"), Ok(42));
        assert!(matches!(
            parse_whole_number("99999999999", "h"),
            Err(InputError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_engine_choice() {
        assert_eq!(parse_engine_choice("4", catalog()).unwrap().id, EngineId::MySql);
        assert_eq!(parse_engine_choice("1", catalog()).unwrap().id, EngineId::Aurora);
        let err = parse_engine_choice("7", catalog()).unwrap_err();
        assert!(matches!(err, InputError::OutOfRange { .. }));
        assert_eq!(err.hint(), "You must enter a number between 1 and 6.");
        assert!(matches!(
            parse_engine_choice("0", catalog()),
            Err(InputError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_engine_choice("abc", catalog()),
            Err(InputError::Malformed { .. })
        ));
    }

    #[test]
    fn test_engine_name() {
        assert_eq!(parse_engine_name("oracle", catalog()).unwrap().id, EngineId::Oracle);
        assert_eq!(parse_engine_name("3", catalog()).unwrap().id, EngineId::SqlServer);
        assert!(parse_engine_name("db2", catalog()).is_err());
        assert!(parse_engine_name("9", catalog()).is_err());
    }

    #[test]
    fn test_storage_class() {
        assert_eq!(parse_storage_class("1"), Ok(StorageClass::GeneralPurpose));
        assert_eq!(parse_storage_class("2"), Ok(StorageClass::Provisioned));
        assert_eq!(
            parse_storage_class("3"),
            Err(InputError::out_of_range(STORAGE_CLASS_HINT))
        );
        assert_eq!(
            parse_storage_class("abc"),
            Err(InputError::malformed(STORAGE_CLASS_HINT))
        );
        assert_eq!(parse_storage_name("io1"), Ok(StorageClass::Provisioned));
    }

    #[test]
    fn test_page_size() {
        assert_eq!(parse_page_size("", 16), Ok(16));
        assert_eq!(parse_page_size("  \n", 8), Ok(8));
        assert_eq!(parse_page_size("1", 16), Ok(1));
        assert_eq!(parse_page_size("32", 16), Ok(32));
        assert!(matches!(parse_page_size("0", 16), Err(InputError::OutOfRange { .. })));
        assert!(matches!(parse_page_size("33", 16), Err(InputError::OutOfRange { .. })));
        assert!(matches!(parse_page_size("abc", 16), Err(InputError::Malformed { .. })));
    }

    #[test]
    fn test_general_purpose_iops() {
        let gp = StorageClass::GeneralPurpose;
        assert_eq!(parse_iops("1", gp, mysql(), IopsPolicy::Strict), Ok(1));
        assert_eq!(parse_iops("40000", gp, mysql(), IopsPolicy::Strict), Ok(40_000));
        assert_eq!(parse_iops("1500", gp, mysql(), IopsPolicy::Strict), Ok(1_500));
        assert!(matches!(
            parse_iops("0", gp, mysql(), IopsPolicy::Strict),
            Err(InputError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_iops("40001", gp, mysql(), IopsPolicy::Strict),
            Err(InputError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_iops("abc", gp, mysql(), IopsPolicy::Strict),
            Err(InputError::Malformed { .. })
        ));
    }

    #[test]
    fn test_provisioned_iops_strict() {
        let io1 = StorageClass::Provisioned;
        assert_eq!(parse_iops("5000", io1, mysql(), IopsPolicy::Strict), Ok(5_000));
        assert!(matches!(
            parse_iops("1500", io1, mysql(), IopsPolicy::Strict),
            Err(InputError::NotIncrement { increment: 1000, .. })
        ));
        assert!(matches!(
            parse_iops("0", io1, mysql(), IopsPolicy::Strict),
            Err(InputError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_iops("41000", io1, mysql(), IopsPolicy::Strict),
            Err(InputError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_provisioned_iops_relaxed() {
        let io1 = StorageClass::Provisioned;
        assert_eq!(parse_iops("1500", io1, mysql(), IopsPolicy::Relaxed), Ok(1_500));
        assert_eq!(parse_iops("1", io1, mysql(), IopsPolicy::Relaxed), Ok(1));
        assert!(parse_iops("40001", io1, mysql(), IopsPolicy::Relaxed).is_err());
    }

    #[test]
    fn test_sql_server_ceiling() {
        let mssql = catalog().by_id(EngineId::SqlServer);
        let io1 = StorageClass::Provisioned;
        assert_eq!(parse_iops("32000", io1, mssql, IopsPolicy::Strict), Ok(32_000));
        assert!(parse_iops("33000", io1, mssql, IopsPolicy::Strict).is_err());
        // gp2 is not subject to the SQL Server provisioned ceiling
        assert_eq!(
            parse_iops("33000", StorageClass::GeneralPurpose, mssql, IopsPolicy::Strict),
            Ok(33_000)
        );
    }

    #[test]
    fn test_bounds_hint() {
        let bounds = iops_bounds(StorageClass::Provisioned, mysql(), IopsPolicy::Strict);
        assert_eq!(
            bounds.hint(),
            "IOPS must be an integer, in an increment of 1000, and between 1000 and 40000."
        );
        assert!(bounds.contains(3000));
        assert!(!bounds.contains(3001));
    }
}
