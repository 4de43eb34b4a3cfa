use alloc::string::String;

use crate::{CoreError, CoreResult};

/// Trims surrounding whitespace and rewrites `_` separators to `-`.
///
/// Case is preserved: identifiers match case-sensitively.
pub fn normalize_identifier(input: &str) -> String {
    input.trim().replace('_', "-")
}

/// Checks that `id` can name a language definition: a lowercase primary
/// language subtag, optionally followed by dash-separated subtags such as a
/// region (`pt-BR`, `sr-Latn`).
pub fn validate_identifier(id: &str) -> CoreResult<()> {
    if id.is_empty() {
        return Err(CoreError::InvalidInput("language identifier is empty"));
    }

    for (idx, part) in id.split('-').enumerate() {
        if part.is_empty() {
            return Err(CoreError::InvalidInput("language identifier has empty subtag"));
        }
        if idx == 0 {
            if !(2..=8).contains(&part.len()) || !part.bytes().all(|b| b.is_ascii_lowercase()) {
                return Err(CoreError::InvalidInput("invalid language subtag"));
            }
            continue;
        }
        if part.len() > 8 || !part.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(CoreError::InvalidInput("invalid subtag"));
        }
    }
    Ok(())
}

/// `id` followed by each prefix obtained by cutting at the last dash:
/// `pt-BR-x` yields `pt-BR-x`, `pt-BR`, `pt`.
pub fn fallback_chain(id: &str) -> impl Iterator<Item = &str> {
    core::iter::successors(Some(id), |current| {
        let current = *current;
        current.rfind('-').map(|idx| &current[..idx])
    })
}
