use std::fmt::Write as _;
use std::fs;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use clom::{ArgumentStore, DeclarationFile, Error, HelpListing, Resolved};

use super::args::{CliArgs, OutputFormat};
use super::errors::AppError;

/// What a resolution pass produced.
#[derive(Debug)]
pub enum Outcome {
    Help(HelpListing),
    Values(Resolved),
}

/// Resolve `tokens` against the declarations in `json`.
pub fn resolve_declarations(json: &str, tokens: Vec<String>) -> Result<Outcome, AppError> {
    let file = DeclarationFile::from_json(json).map_err(AppError::Declarations)?;
    debug!(
        settings = file.settings.len(),
        strict = file.strict,
        "loaded declarations"
    );

    let store = ArgumentStore::new(tokens);
    match file.to_parser().resolve_all(&store) {
        Ok(resolved) => Ok(Outcome::Values(resolved)),
        Err(Error::HelpRequested(listing)) => Ok(Outcome::Help(listing)),
        Err(e) => Err(e.into()),
    }
}

/// Render an outcome for stdout. Help listings are printed as-is in any format.
pub fn render(outcome: &Outcome, format: OutputFormat) -> Result<String, AppError> {
    let resolved = match outcome {
        Outcome::Help(listing) => return Ok(listing.to_string()),
        Outcome::Values(resolved) => resolved,
    };

    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(resolved).map_err(AppError::Output)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for setting in resolved.iter() {
                // Writing to a String cannot fail.
                let _ = writeln!(out, "{} = {}", setting.name, setting.value);
            }
            Ok(out)
        }
    }
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    info!("Reading declarations from {:?}", args.declarations);
    let json = fs::read_to_string(&args.declarations).map_err(|source| {
        AppError::ReadDeclarations {
            path: args.declarations.clone(),
            source,
        }
    })?;

    let outcome = resolve_declarations(&json, args.args)?;
    if let Outcome::Help(listing) = &outcome {
        info!("Help requested, listing {} settings", listing.len());
    }
    print!("{}", render(&outcome, args.format)?);
    Ok(())
}
