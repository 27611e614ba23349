//! One wizard invocation: resolve a trust source, then write the files.

use crate::wizard::questions;
use crate::wizard::resolver::{Resolution, TrustSource, resolve};
use crate::{Prompter, WizardResult};

use rj_auth::{Jwks, JwksUrl, jwks_file_url, synthesize};
use rj_config::{EmitMode, OutputConfig, RouterConfig};

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

/// Inputs for one wizard run
#[derive(Debug, Clone)]
pub struct WizardOptions {
    pub mode: EmitMode,
    /// Router config to merge into (`configure` only)
    pub existing_config: Option<PathBuf>,
    /// Directory output files are written to and relative paths resolve against
    pub working_dir: PathBuf,
    pub output: OutputConfig,
}

impl WizardOptions {
    /// `create-config`: fresh router config in `working_dir`
    pub fn create(working_dir: PathBuf, output: OutputConfig) -> Self {
        Self {
            mode: EmitMode::Overwrite,
            existing_config: None,
            working_dir,
            output,
        }
    }

    /// `configure`: merge into `existing_config`, or into the default router
    /// config file name when none is given
    pub fn configure(
        existing_config: Option<PathBuf>,
        working_dir: PathBuf,
        output: OutputConfig,
    ) -> Self {
        Self {
            mode: EmitMode::MergeList,
            existing_config,
            working_dir,
            output,
        }
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }

    /// Path of the router config to read (configure) and write
    pub fn router_config_path(&self) -> PathBuf {
        match (self.mode, self.existing_config.as_deref()) {
            (EmitMode::MergeList, Some(path)) => self.resolve_path(path),
            _ => self.working_dir.join(&self.output.router_config_file),
        }
    }

    pub fn jwks_path(&self) -> PathBuf {
        self.working_dir.join(&self.output.jwks_file)
    }
}

/// What a successful run wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardOutcome {
    pub router_config_path: PathBuf,
    /// Set only when a local JWKS file was written
    pub jwks_path: Option<PathBuf>,
    pub jwks_url: JwksUrl,
}

/// A JWKS file this run wrote, with whatever it replaced
struct WrittenJwks {
    path: PathBuf,
    previous: Option<Vec<u8>>,
}

impl WrittenJwks {
    fn write(jwks: &Jwks, path: PathBuf) -> WizardResult<Self> {
        let previous = std::fs::read(&path).ok();
        jwks.write(&path)?;
        Ok(Self { path, previous })
    }

    /// Put back the replaced file, or remove ours if there was none
    fn roll_back(self) {
        let result = match self.previous {
            Some(ref contents) => std::fs::write(&self.path, contents),
            None => std::fs::remove_file(&self.path),
        };

        match result {
            Ok(()) => info!("Rolled back {}", self.path.display()),
            Err(e) => warn!("Failed to roll back {}: {e}", self.path.display()),
        }
    }
}

/// Run the wizard end to end.
///
/// Nothing is written unless every question resolves, and a failed router
/// config write rolls back the JWKS file. In `configure` mode the existing
/// router config is read before any question is asked.
pub fn run<P: Prompter + ?Sized>(
    options: &WizardOptions,
    prompter: &mut P,
) -> WizardResult<WizardOutcome> {
    let router_config_path = options.router_config_path();

    // An explicit --config must exist; the default file is merged only if present.
    let existing = match options.mode {
        EmitMode::MergeList
            if options.existing_config.is_some() || router_config_path.is_file() =>
        {
            Some(RouterConfig::load_existing(&router_config_path)?)
        }
        _ => None,
    };

    let resolution = resolve(prompter)?;
    debug!(
        "Resolved {} trust source for {}",
        if resolution.is_local() { "local" } else { "hosted" },
        resolution.algorithm
    );

    let (jwks_url, jwks) = match resolution.trust_source {
        TrustSource::Hosted(ref url) => (url.clone(), None),
        TrustSource::Local {
            ref signing_key,
            already_base64,
        } => {
            let jwks = synthesize(
                &resolution.algorithm,
                resolution.key_id.as_deref(),
                signing_key,
                already_base64,
            )?;
            if resolution.key_id.is_none() {
                prompter.say(questions::NO_KEY_ID);
            }
            let url = jwks_file_url(&options.working_dir, &options.output.jwks_file)?;
            (url, Some(jwks))
        }
    };

    let router_config = RouterConfig::emit(options.mode, jwks_url.as_str(), existing)?;

    let written = match jwks {
        Some(ref jwks) => Some(WrittenJwks::write(jwks, options.jwks_path())?),
        None => None,
    };
    if let Err(e) = router_config.write(&router_config_path) {
        if let Some(written) = written {
            written.roll_back();
        }
        return Err(e.into());
    }

    let outcome = WizardOutcome {
        router_config_path,
        jwks_path: written.map(|w| w.path),
        jwks_url,
    };
    prompter.say(&completion_message(&outcome));
    info!("Wizard finished for {}", describe(&resolution));

    Ok(outcome)
}

fn completion_message(outcome: &WizardOutcome) -> String {
    match outcome.jwks_path {
        Some(ref jwks_path) => format!(
            "Finished creating files. Output to {} and {}",
            outcome.router_config_path.display(),
            jwks_path.display()
        ),
        None => format!(
            "Finished creating file. Output to {}",
            outcome.router_config_path.display()
        ),
    }
}

fn describe(resolution: &Resolution) -> String {
    match resolution.issuer_guess {
        Some(ref guess) => format!("{} ({})", resolution.algorithm, guess.provider),
        None => resolution.algorithm.to_string(),
    }
}
