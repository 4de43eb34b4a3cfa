#![forbid(unsafe_code)]

mod config;
mod error;
mod registry;
mod resolver;

pub use crate::config::{LanguageEntry, RegistryConfig, load_config, load_config_or_default};
pub use crate::error::{RuntimeError, RuntimeResult};
pub use crate::registry::{LanguageRegistry, LookupTrace};
pub use crate::resolver::{ResolveTrace, TagResolver};
pub use plurality_core::{
    CategorySet, CoreError, LanguageDefinition, NumericInput, Operands, PluralCategory,
    PluralRule,
};
