//! Final report rendering
//!
//! `TextPresenter` prints the human-readable report, with each formula shown
//! under the figure it produced. `JsonPresenter` emits the same values as
//! one JSON document for scripting.

use super::{Presenter, Screen};
use crate::engine::{
    DerivedRequirements, GpAssessment, GP_IOPS_PER_GB, GP_MAX_IOPS, GP_MAX_THROUGHPUT_MBPS,
    PROVISIONED_IOPS_INCREMENT, PROVISIONED_IOPS_PER_GB,
};
use crate::selection::UserSelection;
use crate::types::StorageClass;
use serde::Serialize;
use std::io::{self, Write};

/// Marker appended to the heading of the storage class the user picked
const SELECTED_MARKER: &str = " [your selection]";

pub struct TextPresenter<W: Write> {
    out: W,
    screen: Screen,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W, screen: Screen) -> Self {
        Self { out, screen }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn marker(selection: &UserSelection, class: StorageClass) -> &'static str {
        if selection.storage_class() == class {
            SELECTED_MARKER
        } else {
            ""
        }
    }

    fn write_throughput(&mut self, sel: &UserSelection, req: &DerivedRequirements) -> io::Result<()> {
        let iops = sel.desired_iops();
        let page = sel.page_size_kb();
        writeln!(
            self.out,
            "{} IOPS multiplied by a page size of {} KB will produce\n  up to {} KB read per second.",
            iops, page, req.max_throughput_kb_per_sec
        )?;
        writeln!(
            self.out,
            "To achieve {} IOPS you will need disk throughput of at least {} Mbps.",
            iops, req.disk_throughput_mbps
        )?;
        writeln!(self.out, "\t(IOPS * ((page size * 8)/1000))\n")
    }

    fn write_general_purpose(
        &mut self,
        sel: &UserSelection,
        req: &DerivedRequirements,
    ) -> io::Result<()> {
        let marker = Self::marker(sel, StorageClass::GeneralPurpose);
        match req.general_purpose {
            GpAssessment::Feasible { volume_size_gb } => {
                writeln!(
                    self.out,
                    "If you choose general-purpose SSD (gp2) storage{}, your DB instance will need",
                    marker
                )?;
                writeln!(self.out, "  a disk volume that is at least {} GB.", volume_size_gb)?;
                writeln!(
                    self.out,
                    "\t(disk size = IOPS/{} ({} IOPS per GB up to {} IOPS per volume))\n",
                    GP_IOPS_PER_GB, GP_IOPS_PER_GB, GP_MAX_IOPS
                )
            }
            GpAssessment::Infeasible {
                iops_exceeded,
                throughput_exceeded,
            } => {
                writeln!(
                    self.out,
                    "General-purpose SSD (gp2) storage{} cannot deliver this load:",
                    marker
                )?;
                if iops_exceeded {
                    writeln!(
                        self.out,
                        "  {} IOPS exceeds the gp2 limit of {} IOPS per volume.",
                        sel.desired_iops(),
                        GP_MAX_IOPS
                    )?;
                }
                if throughput_exceeded {
                    writeln!(
                        self.out,
                        "  {} Mbps exceeds the gp2 limit of {} Mbps per volume.",
                        req.disk_throughput_mbps, GP_MAX_THROUGHPUT_MBPS
                    )?;
                }
                writeln!(self.out, "  Consider provisioned IOPS (io1) storage instead.\n")
            }
        }
    }

    fn write_provisioned(&mut self, sel: &UserSelection, req: &DerivedRequirements) -> io::Result<()> {
        let engine = sel.engine();
        writeln!(
            self.out,
            "If you choose provisioned IOPS (io1) storage{}, your DB instance will need",
            Self::marker(sel, StorageClass::Provisioned)
        )?;
        writeln!(
            self.out,
            "  a disk volume that is at least {} GB.",
            req.provisioned_volume_size_gb
        )?;
        writeln!(self.out, "\t(disk size = IOPS/{})", PROVISIONED_IOPS_PER_GB)?;
        writeln!(
            self.out,
            "\t({} IOPS per GB up to {} IOPS for {}.)",
            PROVISIONED_IOPS_PER_GB, engine.max_provisioned_iops, engine.display_name
        )?;
        if req.iops_rounded_up() {
            writeln!(
                self.out,
                "  Note: {} IOPS was rounded up to {} IOPS (io1 is provisioned in blocks of {}).",
                sel.desired_iops(),
                req.rounded_provisioned_iops,
                PROVISIONED_IOPS_INCREMENT
            )?;
        }
        Ok(())
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present(&mut self, sel: &UserSelection, req: &DerivedRequirements) -> io::Result<()> {
        self.screen.main_screen(&mut self.out)?;
        writeln!(
            self.out,
            "You plan to use the RDS type {} with a page size of {}KB.",
            sel.engine().display_name,
            sel.page_size_kb()
        )?;
        writeln!(
            self.out,
            "Selected storage: {}.\n",
            sel.storage_class().description()
        )?;
        self.write_throughput(sel, req)?;
        self.write_general_purpose(sel, req)?;
        self.write_provisioned(sel, req)?;
        self.out.flush()
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    selection: &'a UserSelection,
    requirements: &'a DerivedRequirements,
    gp_volume_size_gb: Option<u32>,
    iops_rounded_up: bool,
}

pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn present(&mut self, sel: &UserSelection, req: &DerivedRequirements) -> io::Result<()> {
        let report = JsonReport {
            selection: sel,
            requirements: req,
            gp_volume_size_gb: req.gp_volume_size_gb(),
            iops_rounded_up: req.iops_rounded_up(),
        };
        serde_json::to_writer_pretty(&mut self.out, &report)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
