use std::path::PathBuf;

use plurality_runtime::{RuntimeError, load_config_or_default};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClassifyCommandError {
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    #[error("{number:?}: {source}")]
    Number {
        number: String,
        #[source]
        source: RuntimeError,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    pub language: String,
    pub numbers: Vec<String>,
    pub config_path: PathBuf,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ClassifyReport {
    requested: String,
    language: String,
    results: Vec<ClassifyResult>,
}

#[derive(Debug, Serialize)]
struct ClassifyResult {
    number: String,
    category: &'static str,
}

pub fn run_classify(options: &ClassifyOptions) -> Result<String, ClassifyCommandError> {
    let registry = load_config_or_default(&options.config_path)?.build_registry()?;
    let language = registry.resolve(&options.language)?;
    debug!(
        requested = options.language.as_str(),
        language = language.id(),
        "classifying"
    );

    let mut results = Vec::with_capacity(options.numbers.len());
    for number in &options.numbers {
        let category = language
            .classify(number)
            .map_err(|err| ClassifyCommandError::Number {
                number: number.clone(),
                source: err.into(),
            })?;
        results.push(ClassifyResult {
            number: number.clone(),
            category: category.as_str(),
        });
    }

    if options.json {
        let report = ClassifyReport {
            requested: options.language.clone(),
            language: language.id().to_string(),
            results,
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    let lines: Vec<String> = results
        .iter()
        .map(|result| format!("{}\t{}", result.number, result.category))
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::{ClassifyCommandError, ClassifyOptions, run_classify};
    use plurality_runtime::RuntimeError;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("plurality_{name}_{nanos}"));
        fs::create_dir_all(&path).expect("dir");
        path
    }

    fn options(language: &str, numbers: &[&str], config_path: PathBuf) -> ClassifyOptions {
        ClassifyOptions {
            language: language.to_string(),
            numbers: numbers.iter().map(|number| number.to_string()).collect(),
            config_path,
            json: false,
        }
    }

    #[test]
    fn classifies_with_builtin_languages() {
        let root = temp_dir("classify_builtin");
        let output = run_classify(&options(
            "ru-RU",
            &["1", "3", "5", "1.5"],
            root.join("plurality.toml"),
        ))
        .expect("run");
        assert_eq!(output, "1\tone\n3\tfew\n5\tmany\n1.5\tother");
        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn classifies_with_configured_language() {
        let root = temp_dir("classify_config");
        let config_path = root.join("plurality.toml");
        fs::write(
            &config_path,
            "builtin = false\n\n[[language]]\nid = \"xx\"\nrule = \"welsh\"\n",
        )
        .expect("write config");

        let mut options = options("xx-YY", &["0", "6"], config_path);
        options.json = true;
        let output = run_classify(&options).expect("run");
        let report: serde_json::Value = serde_json::from_str(&output).expect("json");
        assert_eq!(report["language"], "xx");
        assert_eq!(report["results"][0]["category"], "zero");
        assert_eq!(report["results"][1]["category"], "many");

        let err = run_classify(&ClassifyOptions {
            language: "en".to_string(),
            ..options
        })
        .expect_err("en is not configured");
        assert!(matches!(err, ClassifyCommandError::Runtime(RuntimeError::NotFound(_))));
        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn reports_malformed_number() {
        let root = temp_dir("classify_malformed");
        let err = run_classify(&options("en", &["1", "one"], root.join("plurality.toml")))
            .expect_err("malformed");
        assert!(matches!(err, ClassifyCommandError::Number { number, .. } if number == "one"));
        fs::remove_dir_all(&root).ok();
    }
}
