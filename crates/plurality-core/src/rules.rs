//! CLDR cardinal plural rules.
//!
//! One [`PluralRule`] case per rule family. Each family function evaluates the
//! CLDR conditions in the order CLDR lists the categories and falls through to
//! `other`. The compact exponent operands `c`/`e` are always `0` here.

use core::fmt;
use core::str::FromStr;

use crate::PluralCategory::{Few, Many, One, Other, Two, Zero};
use crate::{CategorySet, CoreError, CoreResult, Operands, PluralCategory};

#[derive(Clone, Copy)]
pub enum PluralRule {
    /// ja, ko, zh, ...
    NoPlural,
    /// `one: i = 1 and v = 0` (en, de, nl, ...)
    OneInteger,
    /// `one: n = 1` (bg, el, hu, tr, ...)
    OneExact,
    Danish,
    Icelandic,
    /// `one: i = 0 or n = 1` (hi, bn, fa, ...)
    Hindi,
    French,
    Portuguese,
    Spanish,
    /// it, ca, pt-PT
    Italian,
    /// cs, sk
    Czech,
    Polish,
    /// ru, uk
    EastSlavic,
    Belarusian,
    /// hr, sr, bs
    SerboCroatian,
    Slovenian,
    Lithuanian,
    Latvian,
    Romanian,
    Arabic,
    Hebrew,
    Welsh,
    Irish,
    /// fil, tl
    Filipino,
    /// A rule supplied at registration time.
    Custom(fn(&Operands) -> PluralCategory),
}

const NAMED_RULES: [(&str, PluralRule); 24] = [
    ("no-plural", PluralRule::NoPlural),
    ("one-integer", PluralRule::OneInteger),
    ("one-exact", PluralRule::OneExact),
    ("danish", PluralRule::Danish),
    ("icelandic", PluralRule::Icelandic),
    ("hindi", PluralRule::Hindi),
    ("french", PluralRule::French),
    ("portuguese", PluralRule::Portuguese),
    ("spanish", PluralRule::Spanish),
    ("italian", PluralRule::Italian),
    ("czech", PluralRule::Czech),
    ("polish", PluralRule::Polish),
    ("east-slavic", PluralRule::EastSlavic),
    ("belarusian", PluralRule::Belarusian),
    ("serbo-croatian", PluralRule::SerboCroatian),
    ("slovenian", PluralRule::Slovenian),
    ("lithuanian", PluralRule::Lithuanian),
    ("latvian", PluralRule::Latvian),
    ("romanian", PluralRule::Romanian),
    ("arabic", PluralRule::Arabic),
    ("hebrew", PluralRule::Hebrew),
    ("welsh", PluralRule::Welsh),
    ("irish", PluralRule::Irish),
    ("filipino", PluralRule::Filipino),
];

impl PluralRule {
    /// Every built-in rule with the name configuration files use for it.
    pub fn named() -> impl Iterator<Item = (&'static str, PluralRule)> {
        NAMED_RULES.into_iter()
    }

    pub fn categorize(self, ops: &Operands) -> PluralCategory {
        match self {
            PluralRule::NoPlural => Other,
            PluralRule::OneInteger => one_integer(ops),
            PluralRule::OneExact => one_exact(ops),
            PluralRule::Danish => danish(ops),
            PluralRule::Icelandic => icelandic(ops),
            PluralRule::Hindi => hindi(ops),
            PluralRule::French | PluralRule::Portuguese => zero_or_one_integer(ops),
            PluralRule::Spanish => spanish(ops),
            PluralRule::Italian => italian(ops),
            PluralRule::Czech => czech(ops),
            PluralRule::Polish => polish(ops),
            PluralRule::EastSlavic => east_slavic(ops),
            PluralRule::Belarusian => belarusian(ops),
            PluralRule::SerboCroatian => serbo_croatian(ops),
            PluralRule::Slovenian => slovenian(ops),
            PluralRule::Lithuanian => lithuanian(ops),
            PluralRule::Latvian => latvian(ops),
            PluralRule::Romanian => romanian(ops),
            PluralRule::Arabic => arabic(ops),
            PluralRule::Hebrew => hebrew(ops),
            PluralRule::Welsh => welsh(ops),
            PluralRule::Irish => irish(ops),
            PluralRule::Filipino => filipino(ops),
            PluralRule::Custom(rule) => rule(ops),
        }
    }

    /// Categories the rule can produce. Custom rules are opaque and report
    /// the full set.
    pub fn categories(self) -> CategorySet {
        match self {
            PluralRule::NoPlural => CategorySet::new(),
            PluralRule::OneInteger
            | PluralRule::OneExact
            | PluralRule::Danish
            | PluralRule::Icelandic
            | PluralRule::Hindi
            | PluralRule::Filipino => CategorySet::of(&[One]),
            PluralRule::French
            | PluralRule::Portuguese
            | PluralRule::Spanish
            | PluralRule::Italian => CategorySet::of(&[One, Many]),
            PluralRule::Czech
            | PluralRule::Polish
            | PluralRule::EastSlavic
            | PluralRule::Belarusian
            | PluralRule::Lithuanian => CategorySet::of(&[One, Few, Many]),
            PluralRule::SerboCroatian | PluralRule::Romanian => CategorySet::of(&[One, Few]),
            PluralRule::Slovenian => CategorySet::of(&[One, Two, Few]),
            PluralRule::Latvian => CategorySet::of(&[Zero, One]),
            PluralRule::Hebrew => CategorySet::of(&[One, Two]),
            PluralRule::Irish => CategorySet::of(&[One, Two, Few, Many]),
            PluralRule::Arabic | PluralRule::Welsh | PluralRule::Custom(_) => {
                CategorySet::of(&PluralCategory::ALL)
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PluralRule::Custom(_) => "custom",
            builtin => NAMED_RULES
                .iter()
                .find(|(_, rule)| rule.same_family(builtin))
                .map_or("custom", |(name, _)| *name),
        }
    }

    fn same_family(self, other: PluralRule) -> bool {
        match (self, other) {
            (PluralRule::Custom(_), _) | (_, PluralRule::Custom(_)) => false,
            _ => core::mem::discriminant(&self) == core::mem::discriminant(&other),
        }
    }
}

impl fmt::Debug for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluralRule::Custom(_) => f.write_str("PluralRule::Custom(..)"),
            builtin => write!(f, "PluralRule({})", builtin.name()),
        }
    }
}

impl FromStr for PluralRule {
    type Err = CoreError;

    fn from_str(value: &str) -> CoreResult<Self> {
        let value = value.trim();
        NAMED_RULES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(value))
            .map(|(_, rule)| *rule)
            .ok_or(CoreError::InvalidInput("unknown plural rule"))
    }
}

fn in_range(value: u64, low: u64, high: u64) -> bool {
    (low..=high).contains(&value)
}

/// `e = 0 and i != 0 and i % 1000000 = 0 and v = 0`
fn millions(ops: &Operands) -> bool {
    ops.i != 0 && ops.i % 1_000_000 == 0 && ops.v == 0
}

fn one_integer(ops: &Operands) -> PluralCategory {
    if ops.i == 1 && ops.v == 0 { One } else { Other }
}

fn one_exact(ops: &Operands) -> PluralCategory {
    if ops.n_equals(1) { One } else { Other }
}

fn danish(ops: &Operands) -> PluralCategory {
    if ops.n_equals(1) || (ops.t != 0 && ops.i <= 1) {
        One
    } else {
        Other
    }
}

fn icelandic(ops: &Operands) -> PluralCategory {
    if (ops.t == 0 && ops.i % 10 == 1 && ops.i % 100 != 11)
        || (ops.t % 10 == 1 && ops.t % 100 != 11)
    {
        One
    } else {
        Other
    }
}

fn hindi(ops: &Operands) -> PluralCategory {
    if ops.i == 0 || ops.n_equals(1) { One } else { Other }
}

fn zero_or_one_integer(ops: &Operands) -> PluralCategory {
    if ops.i <= 1 {
        One
    } else if millions(ops) {
        Many
    } else {
        Other
    }
}

fn spanish(ops: &Operands) -> PluralCategory {
    if ops.n_equals(1) {
        One
    } else if millions(ops) {
        Many
    } else {
        Other
    }
}

fn italian(ops: &Operands) -> PluralCategory {
    if ops.i == 1 && ops.v == 0 {
        One
    } else if millions(ops) {
        Many
    } else {
        Other
    }
}

fn czech(ops: &Operands) -> PluralCategory {
    if ops.i == 1 && ops.v == 0 {
        One
    } else if in_range(ops.i, 2, 4) && ops.v == 0 {
        Few
    } else if ops.v != 0 {
        Many
    } else {
        Other
    }
}

fn polish(ops: &Operands) -> PluralCategory {
    let i10 = ops.i % 10;
    let i100 = ops.i % 100;
    if ops.i == 1 && ops.v == 0 {
        One
    } else if ops.v == 0 && in_range(i10, 2, 4) && !in_range(i100, 12, 14) {
        Few
    } else if (ops.v == 0 && ops.i != 1 && in_range(i10, 0, 1))
        || (ops.v == 0 && in_range(i10, 5, 9))
        || (ops.v == 0 && in_range(i100, 12, 14))
    {
        Many
    } else {
        Other
    }
}

fn east_slavic(ops: &Operands) -> PluralCategory {
    let i10 = ops.i % 10;
    let i100 = ops.i % 100;
    if ops.v != 0 {
        Other
    } else if i10 == 1 && i100 != 11 {
        One
    } else if in_range(i10, 2, 4) && !in_range(i100, 12, 14) {
        Few
    } else if i10 == 0 || in_range(i10, 5, 9) || in_range(i100, 11, 14) {
        Many
    } else {
        Other
    }
}

fn belarusian(ops: &Operands) -> PluralCategory {
    let (Some(n10), Some(n100)) = (ops.n_mod(10), ops.n_mod(100)) else {
        return Other;
    };
    if n10 == 1 && n100 != 11 {
        One
    } else if in_range(n10, 2, 4) && !in_range(n100, 12, 14) {
        Few
    } else if n10 == 0 || in_range(n10, 5, 9) || in_range(n100, 11, 14) {
        Many
    } else {
        Other
    }
}

fn serbo_croatian(ops: &Operands) -> PluralCategory {
    let (i10, i100) = (ops.i % 10, ops.i % 100);
    let (f10, f100) = (ops.f % 10, ops.f % 100);
    if (ops.v == 0 && i10 == 1 && i100 != 11) || (f10 == 1 && f100 != 11) {
        One
    } else if (ops.v == 0 && in_range(i10, 2, 4) && !in_range(i100, 12, 14))
        || (in_range(f10, 2, 4) && !in_range(f100, 12, 14))
    {
        Few
    } else {
        Other
    }
}

fn slovenian(ops: &Operands) -> PluralCategory {
    if ops.v != 0 {
        return Few;
    }
    match ops.i % 100 {
        1 => One,
        2 => Two,
        3 | 4 => Few,
        _ => Other,
    }
}

fn lithuanian(ops: &Operands) -> PluralCategory {
    let n10 = ops.n_mod(10);
    let teen = ops.n_mod(100).is_some_and(|n100| in_range(n100, 11, 19));
    if n10 == Some(1) && !teen {
        One
    } else if n10.is_some_and(|n10| in_range(n10, 2, 9)) && !teen {
        Few
    } else if ops.f != 0 {
        Many
    } else {
        Other
    }
}

fn latvian(ops: &Operands) -> PluralCategory {
    let n10 = ops.n_mod(10);
    let n100 = ops.n_mod(100);
    let (f10, f100) = (ops.f % 10, ops.f % 100);
    if n10 == Some(0)
        || n100.is_some_and(|n100| in_range(n100, 11, 19))
        || (ops.v == 2 && in_range(f100, 11, 19))
    {
        Zero
    } else if (n10 == Some(1) && n100 != Some(11))
        || (ops.v == 2 && f10 == 1 && f100 != 11)
        || (ops.v != 2 && f10 == 1)
    {
        One
    } else {
        Other
    }
}

fn romanian(ops: &Operands) -> PluralCategory {
    if ops.i == 1 && ops.v == 0 {
        One
    } else if ops.v != 0
        || ops.n_equals(0)
        || (!ops.n_equals(1) && ops.n_mod(100).is_some_and(|n100| in_range(n100, 1, 19)))
    {
        Few
    } else {
        Other
    }
}

fn arabic(ops: &Operands) -> PluralCategory {
    if ops.n_equals(0) {
        Zero
    } else if ops.n_equals(1) {
        One
    } else if ops.n_equals(2) {
        Two
    } else {
        match ops.n_mod(100) {
            Some(3..=10) => Few,
            Some(11..=99) => Many,
            _ => Other,
        }
    }
}

fn hebrew(ops: &Operands) -> PluralCategory {
    if (ops.i == 1 && ops.v == 0) || (ops.i == 0 && ops.v != 0) {
        One
    } else if ops.i == 2 && ops.v == 0 {
        Two
    } else {
        Other
    }
}

fn welsh(ops: &Operands) -> PluralCategory {
    if ops.t != 0 {
        return Other;
    }
    match ops.i {
        0 => Zero,
        1 => One,
        2 => Two,
        3 => Few,
        6 => Many,
        _ => Other,
    }
}

fn irish(ops: &Operands) -> PluralCategory {
    if ops.t != 0 {
        return Other;
    }
    match ops.i {
        1 => One,
        2 => Two,
        3..=6 => Few,
        7..=10 => Many,
        _ => Other,
    }
}

fn filipino(ops: &Operands) -> PluralCategory {
    if (ops.v == 0 && in_range(ops.i, 1, 3))
        || (ops.v == 0 && !matches!(ops.i % 10, 4 | 6 | 9))
        || (ops.v != 0 && !matches!(ops.f % 10, 4 | 6 | 9))
    {
        One
    } else {
        Other
    }
}
