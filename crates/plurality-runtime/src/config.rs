use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use plurality_core::{
    CategorySet, LanguageDefinition, PluralCategory, PluralRule, fallback_chain,
    normalize_identifier,
};
use serde::Deserialize;
use tracing::info;

use crate::error::{RuntimeError, RuntimeResult};
use crate::registry::LanguageRegistry;

/// Registry setup read from `plurality.toml` (or a `.json` file).
///
/// ```toml
/// builtin = true
///
/// [[language]]
/// id = "pt-AO"
/// name = "Angolan Portuguese"
/// rule = "italian"
///
/// [aliases]
/// "nb-NO" = "nb"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_builtin")]
    pub builtin: bool,
    #[serde(default)]
    pub language: Vec<LanguageEntry>,
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageEntry {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub rule: String,
    /// Defaults to the categories of `rule`.
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

fn default_builtin() -> bool {
    true
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            builtin: default_builtin(),
            language: Vec::new(),
            aliases: BTreeMap::new(),
        }
    }
}

impl LanguageEntry {
    pub fn to_definition(&self) -> RuntimeResult<LanguageDefinition> {
        let rule: PluralRule = self
            .rule
            .parse()
            .map_err(|_| RuntimeError::UnknownRule(self.rule.clone()))?;
        let categories = match &self.categories {
            Some(names) => names
                .iter()
                .map(|name| name.parse::<PluralCategory>())
                .collect::<Result<CategorySet, _>>()?,
            None => rule.categories(),
        };
        let definition = LanguageDefinition::new(self.id.as_str(), categories, rule)?;
        Ok(match &self.name {
            Some(name) => definition.with_name(name.as_str()),
            None => definition,
        })
    }
}

impl RegistryConfig {
    pub fn build_registry(&self) -> RuntimeResult<LanguageRegistry> {
        let registry = if self.builtin {
            LanguageRegistry::with_builtin()
        } else {
            LanguageRegistry::new()
        };
        self.apply(&registry)?;
        Ok(registry)
    }

    /// Registers the configured languages in file order, then the aliases.
    ///
    /// Everything is resolved against a staged copy of `registry` first; on
    /// error the registry is left untouched. An alias may target another
    /// alias regardless of key order.
    pub fn apply(&self, registry: &LanguageRegistry) -> RuntimeResult<()> {
        let mut staged: BTreeMap<String, Arc<LanguageDefinition>> = registry
            .languages()
            .into_iter()
            .map(|language| (language.id().to_string(), language))
            .collect();
        let mut additions = Vec::with_capacity(self.language.len() + self.aliases.len());
        for entry in &self.language {
            let definition = entry.to_definition()?;
            staged.insert(definition.id().to_string(), Arc::new(definition.clone()));
            additions.push(definition);
        }

        let mut unresolved: BTreeSet<&str> = self.aliases.keys().map(String::as_str).collect();
        while !unresolved.is_empty() {
            let mut progressed = false;
            for (alias, target) in &self.aliases {
                if !unresolved.contains(alias.as_str()) {
                    continue;
                }
                let Some(language) = resolve_alias_target(alias, target, &staged, &unresolved)
                else {
                    continue;
                };
                let definition = language.renamed(alias.as_str())?;
                staged.insert(alias.clone(), Arc::new(definition.clone()));
                additions.push(definition);
                unresolved.remove(alias.as_str());
                progressed = true;
            }
            if !progressed {
                let target = self
                    .aliases
                    .iter()
                    .find(|(alias, _)| unresolved.contains(alias.as_str()))
                    .map_or_else(String::new, |(_, target)| target.clone());
                return Err(RuntimeError::NotFound(target));
            }
        }

        registry.register_all(additions);
        info!(
            languages = self.language.len(),
            aliases = self.aliases.len(),
            "applied registry config"
        );
        Ok(())
    }
}

// `None` while the target (or a more specific prefix of it) is an alias that
// is not staged yet, or when nothing staged matches.
fn resolve_alias_target(
    alias: &str,
    target: &str,
    staged: &BTreeMap<String, Arc<LanguageDefinition>>,
    unresolved: &BTreeSet<&str>,
) -> Option<Arc<LanguageDefinition>> {
    let normalized = normalize_identifier(target);
    for candidate in fallback_chain(&normalized) {
        if candidate != alias && unresolved.contains(candidate) {
            return None;
        }
        if let Some(language) = staged.get(candidate) {
            return Some(Arc::clone(language));
        }
    }
    None
}

pub fn load_config(path: &Path) -> RuntimeResult<RegistryConfig> {
    let contents = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(serde_json::from_str(&contents)?)
    } else {
        Ok(toml::from_str(&contents)?)
    }
}

pub fn load_config_or_default(path: &Path) -> RuntimeResult<RegistryConfig> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(RegistryConfig::default())
    }
}
