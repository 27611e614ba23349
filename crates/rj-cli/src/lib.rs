//! rj-cli library
//!
//! Exports the wizard flow and the [`Prompter`] seam so the flow can be driven
//! from tests as well as the terminal.

pub(crate) mod cli;
pub(crate) mod commands;
mod error;
pub mod logger;
mod prompter;
mod terminal_prompter;
pub mod wizard;


pub use cli::Cli;
pub use error::{Result as WizardResult, WizardError};
pub use prompter::{Prompter, Validator};
pub use terminal_prompter::TerminalPrompter;
pub use wizard::resolver::{
    Resolution, TrustSource, TrustSourceResolver, resolve, validate_jwks_url, validate_sample_jwt,
};
pub use wizard::run::{WizardOptions, WizardOutcome, run};
