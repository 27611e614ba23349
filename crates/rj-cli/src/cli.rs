use crate::WizardOptions;
use crate::commands::Commands;

use rj_config::OutputConfig;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "router-jwks")]
#[command(about = "Interactive wizard that writes JWKS authentication settings for a GraphQL router")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
}

impl Cli {
    /// Build wizard options for the parsed subcommand
    pub fn wizard_options(&self, working_dir: PathBuf, output: OutputConfig) -> WizardOptions {
        match self.command {
            Commands::CreateConfig => WizardOptions::create(working_dir, output),
            Commands::Configure { ref config } => {
                WizardOptions::configure(config.clone(), working_dir, output)
            }
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
