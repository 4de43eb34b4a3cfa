use std::sync::Arc;

use plurality_core::{LanguageDefinition, scan_candidates};

use crate::error::{RuntimeError, RuntimeResult};
use crate::registry::LanguageRegistry;

/// Finds the first registered language named in a language tag,
/// Accept-Language header or file name.
#[derive(Clone, Copy, Debug)]
pub struct TagResolver<'r> {
    registry: &'r LanguageRegistry,
}

#[derive(Clone, Debug)]
pub struct ResolveTrace {
    pub selected: Option<Arc<LanguageDefinition>>,
    pub candidates: Vec<String>,
}

impl<'r> TagResolver<'r> {
    pub fn new(registry: &'r LanguageRegistry) -> Self {
        Self { registry }
    }

    /// First candidate of `input` that the registry resolves, candidates
    /// after it are not looked up.
    pub fn parse(&self, input: &str) -> Option<Arc<LanguageDefinition>> {
        scan_candidates(input).find_map(|candidate| self.registry.lookup(candidate))
    }

    pub fn parse_with_trace(&self, input: &str) -> ResolveTrace {
        let mut candidates = Vec::new();
        for candidate in scan_candidates(input) {
            candidates.push(candidate.to_string());
            if let Some(selected) = self.registry.lookup(candidate) {
                return ResolveTrace {
                    selected: Some(selected),
                    candidates,
                };
            }
        }
        ResolveTrace {
            selected: None,
            candidates,
        }
    }

    /// Strict variant of [`TagResolver::parse`] for settings that cannot run
    /// without a language, such as fixed startup configuration.
    pub fn must_parse(&self, input: &str) -> RuntimeResult<Arc<LanguageDefinition>> {
        self.parse(input)
            .ok_or_else(|| RuntimeError::ParseFailure(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::TagResolver;
    use crate::{LanguageRegistry, RuntimeError};
    use plurality_core::{LanguageDefinition, PluralRule};

    #[test]
    fn parses_plain_tags() {
        let registry = LanguageRegistry::with_builtin();
        let resolver = TagResolver::new(&registry);
        assert_eq!(resolver.parse("en").expect("en").id(), "en");
        assert_eq!(resolver.parse(" pt_BR ").expect("pt").id(), "pt");
        assert_eq!(resolver.parse("zh-Hant-TW").expect("zh").id(), "zh");
    }

    #[test]
    fn accept_language_tries_first_tag_first() {
        let registry = LanguageRegistry::with_builtin();
        let trace = registry.resolver().parse_with_trace("en-US,fr;q=0.9");
        assert_eq!(trace.candidates, ["en-US"]);
        assert_eq!(trace.selected.expect("en").id(), "en");
    }

    #[test]
    fn later_candidates_are_tried_on_failure() {
        let registry = LanguageRegistry::with_builtin();
        let trace = registry.resolver().parse_with_trace("xx-YY,fr;q=0.9");
        assert_eq!(trace.candidates, ["xx-YY", "fr"]);
        assert_eq!(trace.selected.expect("fr").id(), "fr");
    }

    #[test]
    fn parses_file_names() {
        let registry = LanguageRegistry::with_builtin();
        let resolver = registry.resolver();
        assert_eq!(resolver.parse("locales/de-DE.all.json").expect("de").id(), "de");
        assert_eq!(resolver.parse(r"C:\translations\ar.json").expect("ar").id(), "ar");
        assert_eq!(resolver.parse("en-US.flat.yaml").expect("en").id(), "en");
    }

    #[test]
    fn directory_names_are_not_candidates() {
        let registry = LanguageRegistry::with_builtin();
        let resolver = registry.resolver();
        assert!(resolver.parse("fr/messages.json").is_none());
        assert!(resolver.parse("locales/en").is_none());
    }

    #[test]
    fn unknown_input_yields_none() {
        let registry = LanguageRegistry::with_builtin();
        let trace = registry.resolver().parse_with_trace("klingon;q=1");
        assert!(trace.selected.is_none());
        assert_eq!(trace.candidates, ["klingon"]);
    }

    #[test]
    fn must_parse_fails_with_parse_failure() {
        let registry = LanguageRegistry::with_builtin();
        let err = registry
            .resolver()
            .must_parse("xx-yy-zz")
            .expect_err("unknown language should fail");
        assert!(matches!(err, RuntimeError::ParseFailure(input) if input == "xx-yy-zz"));
        assert_eq!(
            registry.resolver().must_parse("ru-RU").expect("ru").id(),
            "ru"
        );
    }

    #[test]
    fn resolution_follows_registrations() {
        let registry = LanguageRegistry::new();
        let resolver = registry.resolver();
        assert!(resolver.parse("tlh").is_none());
        registry.register(LanguageDefinition::with_rule("tlh", PluralRule::NoPlural).expect("tlh"));
        assert_eq!(resolver.parse("tlh-x-qaak").expect("tlh").id(), "tlh");
    }
}
