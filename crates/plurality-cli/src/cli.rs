use std::path::PathBuf;

use thiserror::Error;

use crate::command_classify::{ClassifyCommandError, ClassifyOptions, run_classify};
use crate::command_languages::{LanguagesCommandError, LanguagesOptions, run_languages};
use crate::command_operands::{OperandsCommandError, OperandsOptions, run_operands};
use crate::command_resolve::{ResolveCommandError, ResolveOptions, run_resolve};

const DEFAULT_CONFIG: &str = "plurality.toml";

#[derive(Debug, Error)]
pub enum CliAppError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Classify(#[from] ClassifyCommandError),
    #[error(transparent)]
    Operands(#[from] OperandsCommandError),
    #[error(transparent)]
    Resolve(#[from] ResolveCommandError),
    #[error(transparent)]
    Languages(#[from] LanguagesCommandError),
}

/// Runs the command named by the process arguments and returns its output.
pub fn run() -> Result<String, CliAppError> {
    run_with(std::env::args().skip(1).collect())
}

fn run_with(args: Vec<String>) -> Result<String, CliAppError> {
    let mut args = args.into_iter();
    let command = args.next().ok_or_else(|| CliAppError::Usage(usage()))?;
    match command.as_str() {
        "classify" => {
            let options = parse_classify_options(args.collect())?;
            Ok(run_classify(&options)?)
        }
        "operands" => {
            let options = parse_operands_options(args.collect())?;
            Ok(run_operands(&options)?)
        }
        "resolve" => {
            let options = parse_resolve_options(args.collect())?;
            Ok(run_resolve(&options)?)
        }
        "languages" => {
            let options = parse_languages_options(args.collect())?;
            Ok(run_languages(&options)?)
        }
        _ => Err(CliAppError::Usage(usage())),
    }
}

// Anything starting with `--` (or `-h`) is a flag; `-1` and `-0.5` are numbers.
fn is_flag(arg: &str) -> bool {
    arg.starts_with("--") || arg == "-h"
}

fn parse_classify_options(args: Vec<String>) -> Result<ClassifyOptions, CliAppError> {
    let mut language = None;
    let mut numbers = Vec::new();
    let mut config_path = PathBuf::from(DEFAULT_CONFIG);
    let mut json = false;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--lang" => language = Some(next_value("--lang", &mut iter)?),
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--json" => json = true,
            _ if is_flag(&arg) => return Err(CliAppError::Usage(usage())),
            _ => numbers.push(arg),
        }
    }
    let language = language.ok_or_else(|| CliAppError::Usage(usage()))?;
    if numbers.is_empty() {
        return Err(CliAppError::Usage(usage()));
    }
    Ok(ClassifyOptions {
        language,
        numbers,
        config_path,
        json,
    })
}

fn parse_operands_options(args: Vec<String>) -> Result<OperandsOptions, CliAppError> {
    let mut numbers = Vec::new();
    let mut json = false;
    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            _ if is_flag(&arg) => return Err(CliAppError::Usage(usage())),
            _ => numbers.push(arg),
        }
    }
    if numbers.is_empty() {
        return Err(CliAppError::Usage(usage()));
    }
    Ok(OperandsOptions { numbers, json })
}

fn parse_resolve_options(args: Vec<String>) -> Result<ResolveOptions, CliAppError> {
    let mut input = None;
    let mut strict = false;
    let mut config_path = PathBuf::from(DEFAULT_CONFIG);
    let mut json = false;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--strict" => strict = true,
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--json" => json = true,
            _ if is_flag(&arg) => return Err(CliAppError::Usage(usage())),
            _ if input.is_none() => input = Some(arg),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    let input = input.ok_or_else(|| CliAppError::Usage(usage()))?;
    Ok(ResolveOptions {
        input,
        strict,
        config_path,
        json,
    })
}

fn parse_languages_options(args: Vec<String>) -> Result<LanguagesOptions, CliAppError> {
    let mut config_path = PathBuf::from(DEFAULT_CONFIG);
    let mut json = false;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => config_path = PathBuf::from(next_value("--config", &mut iter)?),
            "--json" => json = true,
            _ => return Err(CliAppError::Usage(usage())),
        }
    }
    Ok(LanguagesOptions { config_path, json })
}

fn next_value(flag: &str, iter: &mut impl Iterator<Item = String>) -> Result<String, CliAppError> {
    iter.next()
        .ok_or_else(|| CliAppError::Usage(format!("{flag} requires a value\n\n{}", usage())))
}

fn usage() -> String {
    "usage: plurality classify --lang <tag> <number>... [--config <path>] [--json]\n       plurality operands <number>... [--json]\n       plurality resolve <input> [--strict] [--config <path>] [--json]\n       plurality languages [--config <path>] [--json]".to_string()
}
