use std::path::PathBuf;

use plurality_runtime::{RuntimeError, load_config_or_default};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LanguagesCommandError {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct LanguagesOptions {
    pub config_path: PathBuf,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LanguageReport {
    id: String,
    name: String,
    rule: &'static str,
    categories: Vec<&'static str>,
}

pub fn run_languages(options: &LanguagesOptions) -> Result<String, LanguagesCommandError> {
    let registry = load_config_or_default(&options.config_path)?.build_registry()?;
    let reports: Vec<LanguageReport> = registry
        .languages()
        .iter()
        .map(|language| LanguageReport {
            id: language.id().to_string(),
            name: language.name().to_string(),
            rule: language.rule().name(),
            categories: language
                .categories()
                .iter()
                .map(|category| category.as_str())
                .collect(),
        })
        .collect();

    if options.json {
        return Ok(serde_json::to_string_pretty(&reports)?);
    }
    let lines: Vec<String> = reports
        .iter()
        .map(|report| {
            format!(
                "{}\t{}\t{}\t{}",
                report.id,
                report.name,
                report.rule,
                report.categories.join(", ")
            )
        })
        .collect();
    Ok(lines.join("\n"))
}
