//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Screen clearing and the title banner
//! - `screens` - Intro text, engine menu and prompt strings
//! - `report` - The `Presenter` implementations for final results
//!
//! Nothing here computes; presenters receive finished values from the engine.

pub mod header;
pub mod report;
pub mod screens;

use crate::engine::DerivedRequirements;
use crate::selection::UserSelection;
use std::io;

pub use header::Screen;
pub use report::{JsonPresenter, TextPresenter};

/// Renders a finished calculation.
pub trait Presenter {
    fn present(
        &mut self,
        selection: &UserSelection,
        requirements: &DerivedRequirements,
    ) -> io::Result<()>;
}
