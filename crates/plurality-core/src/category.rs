use core::fmt;
use core::str::FromStr;

use crate::{CoreError, CoreResult};

/// CLDR plural category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PluralCategory {
    type Err = CoreError;

    fn from_str(value: &str) -> CoreResult<Self> {
        PluralCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or(CoreError::InvalidInput("unknown plural category"))
    }
}

/// The categories a language distinguishes.
///
/// `other` is the catch-all of every CLDR rule set, so [`CategorySet::new`]
/// and [`CategorySet::of`] always include it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategorySet(u8);

impl CategorySet {
    pub const EMPTY: CategorySet = CategorySet(0);

    pub const fn new() -> Self {
        CategorySet(PluralCategory::Other.bit())
    }

    pub const fn of(categories: &[PluralCategory]) -> Self {
        let mut set = CategorySet::new();
        let mut idx = 0;
        while idx < categories.len() {
            set = set.with(categories[idx]);
            idx += 1;
        }
        set
    }

    pub const fn with(self, category: PluralCategory) -> Self {
        CategorySet(self.0 | category.bit())
    }

    pub fn insert(&mut self, category: PluralCategory) -> bool {
        let added = !self.contains(category);
        self.0 |= category.bit();
        added
    }

    pub const fn contains(self, category: PluralCategory) -> bool {
        self.0 & category.bit() != 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_subset(self, other: CategorySet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterates members in CLDR order (`zero` first, `other` last).
    pub fn iter(self) -> impl Iterator<Item = PluralCategory> {
        PluralCategory::ALL
            .into_iter()
            .filter(move |category| self.contains(*category))
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<PluralCategory> for CategorySet {
    fn from_iter<I: IntoIterator<Item = PluralCategory>>(iter: I) -> Self {
        let mut set = CategorySet::new();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

impl fmt::Debug for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, category) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            f.write_str(category.as_str())?;
        }
        Ok(())
    }
}
