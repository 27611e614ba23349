use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Write a new router config with a single JWKS URL
    ///
    /// Example: router-jwks create-config
    CreateConfig,

    /// Add JWKS authentication to an existing router config
    ///
    /// Example: router-jwks configure --config ./router.yaml
    Configure {
        /// Router config to update (default: router.yaml in the current directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
