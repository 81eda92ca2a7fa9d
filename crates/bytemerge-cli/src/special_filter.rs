use std::collections::BTreeSet;

use bytemerge::spanning::SpecialTokenSet;

/// Allow/deny special word arg group.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SpecialFilterArgs {
    /// Allow a special word in the input (repeatable).
    #[clap(long = "allow-special", value_name = "WORD")]
    pub allow: Vec<String>,

    /// Allow every registered special word.
    #[clap(long = "allow-all-special")]
    pub allow_all: bool,

    /// Reject input containing this special word (repeatable).
    #[clap(long = "disallow-special", value_name = "WORD")]
    pub disallow: Vec<String>,
}

impl SpecialFilterArgs {
    /// The allowed special words.
    pub fn allowed(&self) -> SpecialFilter {
        if self.allow_all {
            SpecialFilter::All
        } else {
            SpecialFilter::Only(self.allow.iter().cloned().collect())
        }
    }

    /// The disallowed special words.
    pub fn disallowed(&self) -> SpecialFilter {
        SpecialFilter::Only(self.disallow.iter().cloned().collect())
    }
}

/// A command-line special word set.
#[derive(Debug, Clone, PartialEq)]
pub enum SpecialFilter {
    /// Every special word.
    All,

    /// Only the listed special words.
    Only(BTreeSet<String>),
}

impl SpecialTokenSet for SpecialFilter {
    fn contains_special(
        &self,
        word: &str,
    ) -> bool {
        match self {
            Self::All => true,
            Self::Only(words) => words.contains(word),
        }
    }
}
