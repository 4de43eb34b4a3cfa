use alloc::string::String;

use crate::{LanguageDefinition, PluralRule};

// Alphabetical by identifier.
const BUILTIN_LANGUAGES: &[(&str, &str, PluralRule)] = &[
    ("am", "Amharic", PluralRule::Hindi),
    ("ar", "Arabic", PluralRule::Arabic),
    ("az", "Azerbaijani", PluralRule::OneExact),
    ("be", "Belarusian", PluralRule::Belarusian),
    ("bg", "Bulgarian", PluralRule::OneExact),
    ("bn", "Bangla", PluralRule::Hindi),
    ("bs", "Bosnian", PluralRule::SerboCroatian),
    ("ca", "Catalan", PluralRule::Italian),
    ("cs", "Czech", PluralRule::Czech),
    ("cy", "Welsh", PluralRule::Welsh),
    ("da", "Danish", PluralRule::Danish),
    ("de", "German", PluralRule::OneInteger),
    ("el", "Greek", PluralRule::OneExact),
    ("en", "English", PluralRule::OneInteger),
    ("es", "Spanish", PluralRule::Spanish),
    ("et", "Estonian", PluralRule::OneInteger),
    ("eu", "Basque", PluralRule::OneExact),
    ("fa", "Persian", PluralRule::Hindi),
    ("fi", "Finnish", PluralRule::OneInteger),
    ("fil", "Filipino", PluralRule::Filipino),
    ("fr", "French", PluralRule::French),
    ("fy", "Western Frisian", PluralRule::OneInteger),
    ("ga", "Irish", PluralRule::Irish),
    ("gl", "Galician", PluralRule::OneInteger),
    ("gu", "Gujarati", PluralRule::Hindi),
    ("he", "Hebrew", PluralRule::Hebrew),
    ("hi", "Hindi", PluralRule::Hindi),
    ("hr", "Croatian", PluralRule::SerboCroatian),
    ("hu", "Hungarian", PluralRule::OneExact),
    ("id", "Indonesian", PluralRule::NoPlural),
    ("is", "Icelandic", PluralRule::Icelandic),
    ("it", "Italian", PluralRule::Italian),
    ("ja", "Japanese", PluralRule::NoPlural),
    ("ka", "Georgian", PluralRule::OneExact),
    ("kn", "Kannada", PluralRule::Hindi),
    ("ko", "Korean", PluralRule::NoPlural),
    ("lo", "Lao", PluralRule::NoPlural),
    ("lt", "Lithuanian", PluralRule::Lithuanian),
    ("lv", "Latvian", PluralRule::Latvian),
    ("ml", "Malayalam", PluralRule::OneExact),
    ("ms", "Malay", PluralRule::NoPlural),
    ("my", "Burmese", PluralRule::NoPlural),
    ("nb", "Norwegian Bokmål", PluralRule::OneExact),
    ("nl", "Dutch", PluralRule::OneInteger),
    ("nn", "Norwegian Nynorsk", PluralRule::OneExact),
    ("no", "Norwegian", PluralRule::OneExact),
    ("pl", "Polish", PluralRule::Polish),
    // Brazilian usage; CLDR files it under the bare language code.
    ("pt", "Portuguese", PluralRule::Portuguese),
    ("pt-PT", "European Portuguese", PluralRule::Italian),
    ("ro", "Romanian", PluralRule::Romanian),
    ("ru", "Russian", PluralRule::EastSlavic),
    ("sk", "Slovak", PluralRule::Czech),
    ("sl", "Slovenian", PluralRule::Slovenian),
    ("sr", "Serbian", PluralRule::SerboCroatian),
    ("sv", "Swedish", PluralRule::OneInteger),
    ("sw", "Swahili", PluralRule::OneInteger),
    ("ta", "Tamil", PluralRule::OneExact),
    ("te", "Telugu", PluralRule::OneExact),
    ("th", "Thai", PluralRule::NoPlural),
    ("tl", "Tagalog", PluralRule::Filipino),
    ("tr", "Turkish", PluralRule::OneExact),
    ("uk", "Ukrainian", PluralRule::EastSlavic),
    ("ur", "Urdu", PluralRule::OneInteger),
    ("vi", "Vietnamese", PluralRule::NoPlural),
    // Simplified and Traditional share one rule.
    ("zh", "Chinese", PluralRule::NoPlural),
    ("zu", "Zulu", PluralRule::Hindi),
];

/// Definitions for every language with built-in CLDR rules.
pub fn builtin_languages() -> impl Iterator<Item = LanguageDefinition> {
    BUILTIN_LANGUAGES.iter().map(|(id, name, rule)| {
        LanguageDefinition::from_parts(
            String::from(*id),
            String::from(*name),
            rule.categories(),
            *rule,
        )
    })
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::builtin_languages;
    use crate::PluralCategory::{Few, Many, One, Other, Two, Zero};
    use crate::language_id::validate_identifier;
    use crate::{LanguageDefinition, Operands, PluralCategory};

    fn find(id: &str) -> LanguageDefinition {
        builtin_languages()
            .find(|language| language.id() == id)
            .expect("builtin language")
    }

    #[test]
    fn identifiers_are_valid_and_sorted() {
        let ids: Vec<String> = builtin_languages()
            .map(|language| String::from(language.id()))
            .collect();
        for id in &ids {
            validate_identifier(id).expect("valid identifier");
        }
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn declared_sets_cover_classification() {
        let samples = [
            "0", "1", "2", "3", "5", "6", "7", "11", "12", "21", "22", "101", "102", "103", "111",
            "1000000", "0.0", "0.1", "1.0", "1.5", "2.50", "10.11",
        ];
        for language in builtin_languages() {
            for sample in samples {
                let category = language.classify(sample).expect("classify");
                assert!(
                    language.categories().contains(category),
                    "{} {sample} -> {category}",
                    language.id()
                );
            }
        }
    }

    #[test]
    fn arabic_boundaries() {
        let arabic = find("ar");
        let cases: [(u64, PluralCategory); 6] =
            [(0, Zero), (1, One), (2, Two), (103, Few), (111, Many), (102, Other)];
        for (value, expected) in cases {
            let ops = Operands::from_integer(value);
            assert_eq!(arabic.category_for(&ops), expected, "{value}");
        }
    }

    #[test]
    fn european_and_default_portuguese_differ() {
        assert_eq!(find("pt").classify(0).expect("pt"), One);
        assert_eq!(find("pt-PT").classify(0).expect("pt-PT"), Other);
    }

    #[test]
    fn east_asian_languages_have_no_plural() {
        for id in ["ja", "ko", "zh"] {
            let language = find(id);
            assert_eq!(language.categories().len(), 1);
            assert_eq!(language.classify(1).expect("classify"), Other);
        }
    }

    #[test]
    fn names_are_english() {
        assert_eq!(find("de").name(), "German");
        assert_eq!(find("nb").name(), "Norwegian Bokmål");
    }
}
