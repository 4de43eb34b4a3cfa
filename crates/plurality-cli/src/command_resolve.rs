use std::path::PathBuf;

use plurality_runtime::{RuntimeError, load_config_or_default};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveCommandError {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ResolveOptions {
    pub input: String,
    pub strict: bool,
    pub config_path: PathBuf,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ResolveReport {
    input: String,
    selected: Option<String>,
    name: Option<String>,
    candidates: Vec<String>,
}

/// Prints the language `input` resolves to, or `none`. With `strict`, a miss
/// is an error instead.
pub fn run_resolve(options: &ResolveOptions) -> Result<String, ResolveCommandError> {
    let registry = load_config_or_default(&options.config_path)?.build_registry()?;
    let resolver = registry.resolver();
    if options.strict {
        resolver.must_parse(&options.input)?;
    }
    let trace = resolver.parse_with_trace(&options.input);

    if options.json {
        let report = ResolveReport {
            input: options.input.clone(),
            selected: trace.selected.as_ref().map(|language| language.id().to_string()),
            name: trace.selected.as_ref().map(|language| language.name().to_string()),
            candidates: trace.candidates,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(match trace.selected {
        Some(language) => format!("{}\t{}", language.id(), language.name()),
        None => "none".to_string(),
    })
}
