use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use plurality_core::{
    LanguageDefinition, NumericInput, PluralCategory, builtin_languages, fallback_chain,
    normalize_identifier,
};
use tracing::debug;

use crate::error::{RuntimeError, RuntimeResult};
use crate::resolver::TagResolver;

/// Identifier → language definition map shared by a process or a test.
///
/// Writers are serialized by the lock; readers share it. Definitions are
/// handed out as `Arc` snapshots, so a definition obtained before a
/// re-registration stays intact for its holder.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: RwLock<BTreeMap<String, Arc<LanguageDefinition>>>,
}

/// Outcome of [`LanguageRegistry::lookup_with_trace`].
#[derive(Clone, Debug)]
pub struct LookupTrace {
    pub selected: Option<Arc<LanguageDefinition>>,
    pub attempts: Vec<String>,
}

impl LanguageRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            languages: RwLock::new(BTreeMap::new()),
        }
    }

    /// A registry holding every built-in language.
    pub fn with_builtin() -> Self {
        let languages = builtin_languages()
            .map(|language| (language.id().to_string(), Arc::new(language)))
            .collect();
        Self {
            languages: RwLock::new(languages),
        }
    }

    /// Inserts `definition` under its identifier, replacing and returning any
    /// previous definition.
    #[doc(alias = "register_language")]
    pub fn register(&self, definition: LanguageDefinition) -> Option<Arc<LanguageDefinition>> {
        let definition = Arc::new(definition);
        let previous = self
            .languages
            .write()
            .insert(definition.id().to_string(), Arc::clone(&definition));
        debug!(
            language = definition.id(),
            rule = definition.rule().name(),
            replaced = previous.is_some(),
            "registered language"
        );
        previous
    }

    /// Registers every definition under one write lock, so readers see either
    /// none or all of them. Returns how many replaced an existing definition.
    pub fn register_all(&self, definitions: impl IntoIterator<Item = LanguageDefinition>) -> usize {
        let mut languages = self.languages.write();
        let mut replaced = 0;
        for definition in definitions {
            let previous = languages.insert(definition.id().to_string(), Arc::new(definition));
            replaced += usize::from(previous.is_some());
        }
        debug!(replaced, "registered language batch");
        replaced
    }

    /// Finds the definition for `identifier`, falling back to shorter
    /// prefixes (`pt-BR-x`, `pt-BR`, `pt`). Surrounding whitespace is ignored
    /// and `_` is read as `-`; matching is case-sensitive.
    #[doc(alias = "resolve_language")]
    pub fn lookup(&self, identifier: &str) -> Option<Arc<LanguageDefinition>> {
        let normalized = normalize_identifier(identifier);
        let languages = self.languages.read();
        fallback_chain(&normalized).find_map(|candidate| languages.get(candidate).cloned())
    }

    pub fn lookup_with_trace(&self, identifier: &str) -> LookupTrace {
        let normalized = normalize_identifier(identifier);
        let languages = self.languages.read();
        let mut attempts = Vec::new();
        for candidate in fallback_chain(&normalized) {
            attempts.push(candidate.to_string());
            if let Some(found) = languages.get(candidate) {
                return LookupTrace {
                    selected: Some(Arc::clone(found)),
                    attempts,
                };
            }
        }
        LookupTrace {
            selected: None,
            attempts,
        }
    }

    /// [`LanguageRegistry::lookup`] with a miss reported as `NotFound`.
    pub fn resolve(&self, identifier: &str) -> RuntimeResult<Arc<LanguageDefinition>> {
        self.lookup(identifier)
            .ok_or_else(|| RuntimeError::NotFound(identifier.to_string()))
    }

    pub fn classify<'a>(
        &self,
        identifier: &str,
        number: impl Into<NumericInput<'a>>,
    ) -> RuntimeResult<PluralCategory> {
        let language = self.resolve(identifier)?;
        Ok(language.classify(number)?)
    }

    pub fn resolver(&self) -> TagResolver<'_> {
        TagResolver::new(self)
    }

    pub fn identifiers(&self) -> Vec<String> {
        self.languages.read().keys().cloned().collect()
    }

    /// Snapshot of every definition, ordered by identifier.
    pub fn languages(&self) -> Vec<Arc<LanguageDefinition>> {
        self.languages.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.languages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.read().is_empty()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::LanguageRegistry;
    use crate::RuntimeError;
    use plurality_core::PluralCategory::{Few, Many, One, Other, Zero};
    use plurality_core::{CoreError, LanguageDefinition, Operands, PluralCategory, PluralRule};

    fn definition(id: &str, rule: PluralRule) -> LanguageDefinition {
        LanguageDefinition::with_rule(id, rule).expect("definition")
    }

    #[test]
    fn new_registry_is_empty() {
        let registry = LanguageRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.lookup("en").is_none());
    }

    #[test]
    fn builtin_registry_knows_common_languages() {
        let registry = LanguageRegistry::default();
        for id in ["en", "fr", "ar", "zh", "pt", "pt-PT", "ru"] {
            assert!(registry.lookup(id).is_some(), "{id}");
        }
        assert_eq!(registry.len(), registry.identifiers().len());
    }

    #[test]
    fn lookup_falls_back_through_ancestors() {
        let registry = LanguageRegistry::new();
        registry.register(definition("pt", PluralRule::Portuguese));
        let found = registry.lookup("pt-BR-nonstandard").expect("pt");
        assert_eq!(found.id(), "pt");

        registry.register(definition("pt-BR", PluralRule::Portuguese));
        let trace = registry.lookup_with_trace("pt-BR-nonstandard");
        assert_eq!(trace.attempts, ["pt-BR-nonstandard", "pt-BR"]);
        assert_eq!(trace.selected.expect("pt-BR").id(), "pt-BR");
    }

    #[test]
    fn lookup_normalizes_separators_and_whitespace() {
        let registry = LanguageRegistry::with_builtin();
        assert_eq!(registry.lookup(" pt_PT ").expect("pt-PT").id(), "pt-PT");
        assert_eq!(registry.lookup("en_US").expect("en").id(), "en");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = LanguageRegistry::with_builtin();
        assert!(registry.lookup("EN").is_none());
        assert_eq!(registry.lookup("pt-pt").expect("pt").id(), "pt");
    }

    #[test]
    fn trace_records_every_attempt_on_miss() {
        let registry = LanguageRegistry::with_builtin();
        let trace = registry.lookup_with_trace("xx-yy-zz");
        assert!(trace.selected.is_none());
        assert_eq!(trace.attempts, ["xx-yy-zz", "xx-yy", "xx"]);
    }

    #[test]
    fn classify_reports_not_found() {
        let registry = LanguageRegistry::with_builtin();
        let err = registry.classify("xx-yy-zz", 1).expect_err("unknown language");
        assert!(matches!(err, RuntimeError::NotFound(id) if id == "xx-yy-zz"));
    }

    #[test]
    fn classify_reports_invalid_number() {
        let registry = LanguageRegistry::with_builtin();
        let err = registry.classify("en", "12.3.4").expect_err("malformed number");
        assert!(matches!(err, RuntimeError::Core(CoreError::InvalidNumber(_))));
    }

    #[test]
    fn classify_uses_language_rules() {
        let registry = LanguageRegistry::with_builtin();
        assert_eq!(registry.classify("ar", 0).expect("ar"), Zero);
        assert_eq!(registry.classify("ar", 111).expect("ar"), Many);
        assert_eq!(registry.classify("ar", "103").expect("ar"), Few);
        assert_eq!(registry.classify("en-GB", 1).expect("en"), One);
        assert_eq!(registry.classify("ja", 1).expect("ja"), Other);
        assert_eq!(registry.classify("lt", 0.5f64).expect("lt"), Many);
    }

    #[test]
    fn registration_overwrites_previous_definition() {
        let registry = LanguageRegistry::with_builtin();
        let before = registry.resolve("en").expect("en");
        assert_eq!(registry.classify("en", 1).expect("en"), One);

        let previous = registry.register(definition("en", PluralRule::NoPlural));
        assert_eq!(previous.expect("previous").rule().name(), "one-integer");
        assert_eq!(registry.classify("en", 1).expect("en"), Other);
        assert!(!registry.resolve("en").expect("en").categories().contains(One));

        // Snapshots taken earlier keep the old behaviour.
        assert_eq!(before.classify(1).expect("snapshot"), One);
    }

    #[test]
    fn register_all_counts_replacements() {
        let registry = LanguageRegistry::with_builtin();
        let before = registry.len();
        let replaced = registry.register_all([
            definition("en", PluralRule::NoPlural),
            definition("xx", PluralRule::Polish),
        ]);
        assert_eq!(replaced, 1);
        assert_eq!(registry.len(), before + 1);
        assert_eq!(registry.classify("en", 1).expect("en"), Other);
        assert_eq!(registry.classify("xx", 5).expect("xx"), Many);
    }

    #[test]
    fn custom_rules_can_be_registered() {
        fn even_odd(ops: &Operands) -> PluralCategory {
            if ops.v == 0 && ops.i % 2 == 0 { Few } else { Other }
        }
        let registry = LanguageRegistry::new();
        registry.register(definition("xx", PluralRule::Custom(even_odd)));
        assert_eq!(registry.classify("xx-YY", 4).expect("xx"), Few);
        assert_eq!(registry.classify("xx", 3).expect("xx"), Other);
    }

    #[test]
    fn registries_are_independent() {
        let first = LanguageRegistry::with_builtin();
        let second = LanguageRegistry::with_builtin();
        first.register(definition("en", PluralRule::NoPlural));
        assert_eq!(second.classify("en", 1).expect("en"), One);
    }

    #[test]
    fn concurrent_readers_see_whole_definitions() {
        let registry = Arc::new(LanguageRegistry::with_builtin());
        thread::scope(|scope| {
            for _ in 0..4 {
                let registry = Arc::clone(&registry);
                scope.spawn(move || {
                    for _ in 0..200 {
                        let category = registry.classify("en", 1).expect("classify");
                        assert!(category == One || category == Other);
                    }
                });
            }
            let registry = Arc::clone(&registry);
            scope.spawn(move || {
                for round in 0..50 {
                    let rule = if round % 2 == 0 {
                        PluralRule::NoPlural
                    } else {
                        PluralRule::OneInteger
                    };
                    registry.register(definition("en", rule));
                }
            });
        });
        assert_eq!(registry.classify("en", 1).expect("en"), One);
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LanguageRegistry>();
    }
}
