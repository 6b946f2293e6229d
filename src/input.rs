//! Interactive input collection
//!
//! Drives the prompt/validate/retry cycle for every field of a
//! [`UserSelection`]. Each field runs through an explicit state machine:
//!
//! ```text
//! Prompting ──line──▶ Validating ──ok──▶ Accepted
//!     ▲                   │
//!     └──── rejected ─────┘  (message + "Press <ENTER> to continue.")
//! ```
//!
//! There is no retry limit. The only ways out are an accepted answer, a quit
//! at the intro, or standard input closing.

use crate::catalog::{EngineCatalog, EngineProfile};
use crate::error::{InputError, IopsCalcError, Result};
use crate::selection::UserSelection;
use crate::types::{IopsPolicy, StorageClass};
use crate::ui::screens::{
    self, CONTINUE_PROMPT, INTRO_PROMPT, INTRO_TEXT, IOPS_PROMPT, STORAGE_PROMPT,
};
use crate::ui::Screen;
use crate::validate;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Answer to the intro screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroChoice {
    Begin,
    Quit,
}

/// Per-field prompt state
#[derive(Debug)]
enum FieldState<T> {
    Prompting,
    Validating(String),
    Accepted(T),
}

/// Collects a validated selection over any line-oriented reader and writer.
pub struct InputCollector<'c, R, W> {
    input: R,
    output: W,
    catalog: &'c EngineCatalog,
    screen: Screen,
    policy: IopsPolicy,
}

impl<'c, R: BufRead, W: Write> InputCollector<'c, R, W> {
    pub fn new(input: R, output: W, catalog: &'c EngineCatalog) -> Self {
        Self {
            input,
            output,
            catalog,
            screen: Screen::plain(),
            policy: IopsPolicy::default(),
        }
    }

    pub fn with_screen(mut self, screen: Screen) -> Self {
        self.screen = screen;
        self
    }

    pub fn with_policy(mut self, policy: IopsPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Hand back the reader and writer, e.g. to reuse stdout for the report
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Show the intro text and ask whether to begin.
    ///
    /// "q" or "Q" quits; any other line begins.
    pub fn intro(&mut self) -> Result<IntroChoice> {
        self.screen.main_screen(&mut self.output)?;
        write!(self.output, "{}", INTRO_TEXT)?;
        let answer = self.prompt_line(INTRO_PROMPT)?;
        if answer.trim().eq_ignore_ascii_case("q") {
            info!("user quit at intro");
            Ok(IntroChoice::Quit)
        } else {
            Ok(IntroChoice::Begin)
        }
    }

    /// Collect all four answers, re-prompting until each one is valid.
    pub fn collect(&mut self) -> Result<UserSelection> {
        let engine = self.ask_engine()?;
        let storage_class = self.ask_storage_class()?;
        let page_size_kb = self.ask_page_size(engine)?;
        let desired_iops = self.ask_iops(engine, storage_class)?;

        let selection =
            UserSelection::new(engine, storage_class, page_size_kb, desired_iops, self.policy)?;
        info!(
            engine = %engine.id,
            storage = %storage_class,
            page_size_kb,
            desired_iops,
            "selection complete"
        );
        Ok(selection)
    }

    fn ask_engine(&mut self) -> Result<&'static EngineProfile> {
        let catalog = self.catalog;
        let prompt = screens::engine_prompt(catalog);
        self.ask_field(
            "engine",
            |this| {
                this.screen.main_screen(&mut this.output)?;
                screens::render_engine_menu(&mut this.output, catalog)?;
                Ok(prompt.clone())
            },
            |raw| validate::parse_engine_choice(raw, catalog),
        )
    }

    fn ask_storage_class(&mut self) -> Result<StorageClass> {
        self.ask_field(
            "storage class",
            |_| Ok(STORAGE_PROMPT.to_string()),
            validate::parse_storage_class,
        )
    }

    fn ask_page_size(&mut self, engine: &EngineProfile) -> Result<u32> {
        let default_kb = engine.default_page_size_kb;
        let prompt = screens::page_size_prompt(default_kb);
        self.ask_field(
            "page size",
            |_| Ok(prompt.clone()),
            |raw| validate::parse_page_size(raw, default_kb),
        )
    }

    fn ask_iops(&mut self, engine: &EngineProfile, class: StorageClass) -> Result<u32> {
        let policy = self.policy;
        self.ask_field(
            "desired IOPS",
            |_| Ok(IOPS_PROMPT.to_string()),
            |raw| validate::parse_iops(raw, class, engine, policy),
        )
    }

    /// Run one field's state machine until it reaches `Accepted`.
    ///
    /// `draw` writes anything shown before the prompt and returns the prompt
    /// text itself; it runs again after every rejection.
    fn ask_field<T>(
        &mut self,
        field: &str,
        mut draw: impl FnMut(&mut Self) -> Result<String>,
        check: impl Fn(&str) -> std::result::Result<T, InputError>,
    ) -> Result<T> {
        let mut state = FieldState::Prompting;
        loop {
            state = match state {
                FieldState::Prompting => {
                    let prompt = draw(&mut *self)?;
                    FieldState::Validating(self.prompt_line(&prompt)?)
                }
                FieldState::Validating(line) => match check(&line) {
                    Ok(value) => FieldState::Accepted(value),
                    Err(err) => {
                        debug!(field, answer = line.trim(), %err, "answer rejected");
                        self.reject(&err)?;
                        FieldState::Prompting
                    }
                },
                FieldState::Accepted(value) => return Ok(value),
            };
        }
    }

    /// Explain a rejection and wait for the user to acknowledge it
    fn reject(&mut self, err: &InputError) -> Result<()> {
        writeln!(self.output, "{}", err)?;
        self.prompt_line(CONTINUE_PROMPT)?;
        Ok(())
    }

    /// Print `prompt` and read one line, without its line terminator
    fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(IopsCalcError::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}
