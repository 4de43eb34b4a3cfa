use alloc::string::String;
use core::fmt;

use crate::language_id::validate_identifier;
use crate::{CategorySet, CoreResult, NumericInput, Operands, PluralCategory, PluralRule};

/// A written language and its CLDR plural rule.
///
/// Identifiers follow RFC 5646 in the form the registry matches on: a
/// lowercase ISO 639 language code, optionally followed by a dash and a region
/// (`en`, `pt-PT`).
#[derive(Clone, Debug)]
pub struct LanguageDefinition {
    id: String,
    name: String,
    categories: CategorySet,
    rule: PluralRule,
}

impl LanguageDefinition {
    pub fn new(id: impl Into<String>, categories: CategorySet, rule: PluralRule) -> CoreResult<Self> {
        let id = id.into();
        validate_identifier(&id)?;
        Ok(Self::from_parts(
            id.clone(),
            id,
            categories.with(PluralCategory::Other),
            rule,
        ))
    }

    /// A definition whose declared categories are those of `rule`.
    pub fn with_rule(id: impl Into<String>, rule: PluralRule) -> CoreResult<Self> {
        Self::new(id, rule.categories(), rule)
    }

    pub(crate) fn from_parts(
        id: String,
        name: String,
        categories: CategorySet,
        rule: PluralRule,
    ) -> Self {
        Self {
            id,
            name,
            categories,
            rule,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Copy of this definition registered under another identifier.
    pub fn renamed(&self, id: impl Into<String>) -> CoreResult<Self> {
        let id = id.into();
        validate_identifier(&id)?;
        Ok(Self {
            id,
            ..self.clone()
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn categories(&self) -> CategorySet {
        self.categories
    }

    pub fn rule(&self) -> PluralRule {
        self.rule
    }

    /// Category of `ops`; a category the language does not declare is
    /// reported as `other`.
    pub fn category_for(&self, ops: &Operands) -> PluralCategory {
        let category = self.rule.categorize(ops);
        if self.categories.contains(category) {
            category
        } else {
            PluralCategory::Other
        }
    }

    pub fn classify<'a>(&self, number: impl Into<NumericInput<'a>>) -> CoreResult<PluralCategory> {
        let ops = Operands::from_input(number)?;
        Ok(self.category_for(&ops))
    }
}

impl fmt::Display for LanguageDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Plural category of `number` in `language`.
pub fn classify<'a>(
    language: &LanguageDefinition,
    number: impl Into<NumericInput<'a>>,
) -> CoreResult<PluralCategory> {
    language.classify(number)
}
