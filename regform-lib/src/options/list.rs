//! Ordered option lists.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Country names in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionList {
    names: Vec<String>,
}

impl OptionList {
    /// Sort `names` ascending with [`locale_cmp`].
    pub fn sorted(mut names: Vec<String>) -> Self {
        names.sort_by(|a, b| locale_cmp(a, b));
        Self { names }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Base letters only: decomposed, accents dropped, lowercased.
fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare strings the way a human reader expects in a list.
///
/// Accents and case only break ties, so "Åland Islands" sorts among the A's
/// and "Côte d'Ivoire" next to "Costa Rica".
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}
