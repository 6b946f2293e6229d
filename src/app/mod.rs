//! Session orchestration
//!
//! Wires the collector, the requirements engine and a presenter together for
//! each way the calculator can be run: an interactive session, a flag-driven
//! `calc`, a plan file, or the catalog listing.

use crate::catalog::EngineCatalog;
use crate::config_file::PlanFile;
use crate::engine::{derive, DerivedRequirements};
use crate::error::{IopsCalcError, Result};
use crate::input::{InputCollector, IntroChoice};
use crate::selection::UserSelection;
use crate::types::IopsPolicy;
use crate::ui::{screens, JsonPresenter, Presenter, Screen, TextPresenter};
use crate::validate;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user answered "q" at the intro; nothing was computed
    Quit,
    Completed {
        selection: UserSelection,
        requirements: DerivedRequirements,
    },
}

/// Options for an interactive session
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions<'a> {
    pub screen: Screen,
    pub policy: IopsPolicy,
    pub save_plan: Option<&'a Path>,
}

/// Compute requirements for a selection and hand them to a presenter
pub fn calculate<P: Presenter>(
    selection: &UserSelection,
    presenter: &mut P,
) -> Result<DerivedRequirements> {
    let requirements = derive(selection);
    presenter.present(selection, &requirements)?;
    Ok(requirements)
}

/// Run the full interactive flow: intro, questions, report.
pub fn run_interactive<R: BufRead, W: Write>(
    input: R,
    output: W,
    catalog: &EngineCatalog,
    options: SessionOptions<'_>,
) -> anyhow::Result<SessionOutcome> {
    let mut collector = InputCollector::new(input, output, catalog)
        .with_screen(options.screen)
        .with_policy(options.policy);

    if collector.intro()? == IntroChoice::Quit {
        return Ok(SessionOutcome::Quit);
    }
    let selection = collector.collect()?;

    let (_, output) = collector.into_parts();
    let mut presenter = TextPresenter::new(output, options.screen);
    let requirements = calculate(&selection, &mut presenter)?;

    if let Some(path) = options.save_plan {
        save_plan(&selection, path)?;
    }

    Ok(SessionOutcome::Completed {
        selection,
        requirements,
    })
}

/// Raw flag values for a non-interactive calculation
#[derive(Debug, Clone, Copy)]
pub struct FlagSelection<'a> {
    pub engine: &'a str,
    pub storage: &'a str,
    pub iops: &'a str,
    pub page_size: Option<&'a str>,
}

/// Validate flag values with the same rules as the prompts.
///
/// The first rejected value is returned as an error instead of re-prompting.
pub fn selection_from_flags(
    flags: FlagSelection<'_>,
    catalog: &EngineCatalog,
    policy: IopsPolicy,
) -> Result<UserSelection> {
    let engine = validate::parse_engine_name(flags.engine, catalog)?;
    let storage_class = validate::parse_storage_name(flags.storage)?;
    let page_size_kb = match flags.page_size {
        Some(raw) => validate::parse_page_size(raw, engine.default_page_size_kb)?,
        None => engine.default_page_size_kb,
    };
    let desired_iops = validate::parse_iops(flags.iops, storage_class, engine, policy)?;
    Ok(UserSelection::new(
        engine,
        storage_class,
        page_size_kb,
        desired_iops,
        policy,
    )?)
}

/// Load and validate a plan file.
///
/// `--relaxed-iops` on the command line relaxes a strict plan; it never
/// tightens one.
pub fn selection_from_plan(
    path: &Path,
    catalog: &EngineCatalog,
    policy: IopsPolicy,
) -> anyhow::Result<UserSelection> {
    let mut plan = PlanFile::load_from_file(path)?;
    if policy == IopsPolicy::Relaxed {
        plan.iops_policy = IopsPolicy::Relaxed;
    }
    plan.to_selection(catalog)
}

/// Where a non-interactive calculation reads its selection from
#[derive(Debug, Clone, Copy)]
pub enum CalcSource<'a> {
    Plan(&'a Path),
    Flags(FlagSelection<'a>),
}

/// Options for a non-interactive calculation
#[derive(Debug, Clone, Copy)]
pub struct CalcOptions<'a> {
    pub policy: IopsPolicy,
    pub json: bool,
    pub save_plan: Option<&'a Path>,
}

/// Validate, compute and report without prompting.
///
/// The report is written before the plan file, so a failed save still
/// leaves the figures on screen.
pub fn run_calc<W: Write>(
    source: CalcSource<'_>,
    output: W,
    catalog: &EngineCatalog,
    options: CalcOptions<'_>,
) -> anyhow::Result<DerivedRequirements> {
    let selection = match source {
        CalcSource::Plan(path) => {
            info!("Calculating from plan file: {:?}", path);
            selection_from_plan(path, catalog, options.policy)?
        }
        CalcSource::Flags(flags) => selection_from_flags(flags, catalog, options.policy)?,
    };

    let requirements = if options.json {
        calculate(&selection, &mut JsonPresenter::new(output))?
    } else {
        calculate(&selection, &mut TextPresenter::new(output, Screen::plain()))?
    };

    if let Some(path) = options.save_plan {
        save_plan(&selection, path)?;
    }
    Ok(requirements)
}

fn save_plan(selection: &UserSelection, path: &Path) -> anyhow::Result<()> {
    PlanFile::from_selection(selection).save_to_file(path)?;
    info!("Saved plan to {:?}", path);
    Ok(())
}

/// Print the engine catalog as a table or JSON
pub fn list_engines<W: Write>(out: &mut W, catalog: &EngineCatalog, json: bool) -> Result<()> {
    if json {
        let profiles: Vec<_> = catalog.iter().collect();
        serde_json::to_writer_pretty(&mut *out, &profiles).map_err(IopsCalcError::from)?;
        writeln!(out)?;
    } else {
        screens::render_catalog_table(out, catalog)?;
    }
    Ok(())
}
