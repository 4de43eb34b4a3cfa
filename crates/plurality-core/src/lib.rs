#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod builtin;
mod category;
mod error;
mod language;
mod language_id;
mod operands;
mod rules;
mod tag_scan;

pub use builtin::builtin_languages;
pub use category::{CategorySet, PluralCategory};
pub use error::{CoreError, CoreResult};
pub use language::{LanguageDefinition, classify};
pub use language_id::{fallback_chain, normalize_identifier, validate_identifier};
pub use operands::{NumericInput, Operands, PositionalDecimal};
pub use rules::PluralRule;
pub use tag_scan::{Candidates, scan_candidates};
