//! The validated set of answers a calculation runs on.

use crate::catalog::EngineProfile;
use crate::error::InputError;
use crate::types::{IopsPolicy, StorageClass};
use crate::validate::{check_iops, check_page_size};
use serde::Serialize;

/// A complete, validated user selection.
///
/// Fields are private and only reachable through [`UserSelection::new`], which
/// re-checks page size and IOPS bounds, so every instance satisfies them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSelection {
    engine: &'static EngineProfile,
    storage_class: StorageClass,
    page_size_kb: u32,
    desired_iops: u32,
    iops_policy: IopsPolicy,
}

impl UserSelection {
    pub fn new(
        engine: &'static EngineProfile,
        storage_class: StorageClass,
        page_size_kb: u32,
        desired_iops: u32,
        iops_policy: IopsPolicy,
    ) -> Result<Self, InputError> {
        let page_size_kb = check_page_size(page_size_kb)?;
        let desired_iops = check_iops(desired_iops, storage_class, engine, iops_policy)?;
        Ok(Self {
            engine,
            storage_class,
            page_size_kb,
            desired_iops,
            iops_policy,
        })
    }

    pub fn engine(&self) -> &'static EngineProfile {
        self.engine
    }

    pub fn storage_class(&self) -> StorageClass {
        self.storage_class
    }

    pub fn page_size_kb(&self) -> u32 {
        self.page_size_kb
    }

    pub fn desired_iops(&self) -> u32 {
        self.desired_iops
    }

    pub fn iops_policy(&self) -> IopsPolicy {
        self.iops_policy
    }
}
