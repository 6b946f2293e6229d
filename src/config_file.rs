//! Plan files: a saved selection as JSON.
//!
//! A plan file lets a calculation run without prompts and lets an
//! interactive session be replayed later. Values are typed enums, so an
//! unknown engine or storage class fails at parse time.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::catalog::EngineCatalog;
use crate::selection::UserSelection;
use crate::types::{EngineId, IopsPolicy, StorageClass};

/// On-disk form of a selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanFile {
    pub engine: EngineId,
    pub storage_class: StorageClass,
    /// Omitted means the engine's default page size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size_kb: Option<u32>,
    pub desired_iops: u32,
    #[serde(default)]
    pub iops_policy: IopsPolicy,
}

impl PlanFile {
    /// Capture a validated selection
    pub fn from_selection(selection: &UserSelection) -> Self {
        Self {
            engine: selection.engine().id,
            storage_class: selection.storage_class(),
            page_size_kb: Some(selection.page_size_kb()),
            desired_iops: selection.desired_iops(),
            iops_policy: selection.iops_policy(),
        }
    }

    /// Save the plan to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize plan to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write plan to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load a plan from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read plan from {:?}", path.as_ref()))?;

        let plan: Self = serde_json::from_str(&content).context("Failed to parse plan JSON")?;

        Ok(plan)
    }

    /// Validate the plan against the same rules the prompts enforce
    pub fn validate(&self, catalog: &EngineCatalog) -> Result<()> {
        self.to_selection(catalog).map(|_| ())
    }

    /// Resolve the plan into a validated selection
    pub fn to_selection(&self, catalog: &EngineCatalog) -> Result<UserSelection> {
        let engine = catalog.by_id(self.engine);
        let page_size_kb = self.page_size_kb.unwrap_or(engine.default_page_size_kb);
        UserSelection::new(
            engine,
            self.storage_class,
            page_size_kb,
            self.desired_iops,
            self.iops_policy,
        )
        .with_context(|| format!("Invalid plan for {}", engine.display_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn catalog() -> &'static EngineCatalog {
        EngineCatalog::standard()
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.json");

        let engine = catalog().by_id(EngineId::Oracle);
        let selection = UserSelection::new(
            engine,
            StorageClass::GeneralPurpose,
            8,
            12_000,
            IopsPolicy::Strict,
        )
        .unwrap();
        let plan = PlanFile::from_selection(&selection);
        plan.save_to_file(&path).unwrap();

        let loaded = PlanFile::load_from_file(&path).unwrap();
        assert_eq!(loaded, plan);
        assert_eq!(loaded.to_selection(catalog()).unwrap(), selection);
    }

    #[test]
    fn test_defaults_applied() {
        let plan: PlanFile = serde_json::from_str(
            r#"{"engine": "oracle", "storage_class": "general-purpose", "desired_iops": 3000}"#,
        )
        .unwrap();
        assert_eq!(plan.iops_policy, IopsPolicy::Strict);
        let selection = plan.to_selection(catalog()).unwrap();
        assert_eq!(selection.page_size_kb(), 8);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut plan = PlanFile {
            engine: EngineId::MySql,
            storage_class: StorageClass::Provisioned,
            page_size_kb: None,
            desired_iops: 4500,
            iops_policy: IopsPolicy::Strict,
        };
        assert!(plan.validate(catalog()).is_err());

        plan.iops_policy = IopsPolicy::Relaxed;
        assert!(plan.validate(catalog()).is_ok());

        plan.page_size_kb = Some(64);
        assert!(plan.validate(catalog()).is_err());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let parsed: std::result::Result<PlanFile, _> = serde_json::from_str(
            r#"{"engine": "mysql", "storage_class": "provisioned", "desired_iops": 1000, "region": "x"}"#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let dir = tempdir().unwrap();
        let err = PlanFile::load_from_file(dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read plan"));
    }
}
