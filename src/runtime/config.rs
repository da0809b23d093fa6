use crate::lang::splitting::{SplitRules, SplitWord};
use std::path::PathBuf;

/// The word that, followed by a reference, includes another source.
pub const DEFAULT_INCLUDE_WORD: &str = "-include";

/// The prefix that turns a single word into an include, as in `@other.cfg`.
pub const DEFAULT_INCLUDE_PREFIX: char = '@';

/// How deep includes may nest before the reader gives up.
pub const DEFAULT_MAX_INCLUDE_DEPTH: usize = 64;

/// Settings for a word reader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Word that triggers an include of the following word.  `None` disables it.
    pub include_word: Option<String>,

    /// Prefix that triggers an include of the rest of the word.  `None` disables it.
    pub include_prefix: Option<char>,

    /// How lines are broken into words.
    pub rules: SplitRules,

    /// Directories tried, in order, for relative include paths that don't exist relative to the
    /// including source.
    pub search_paths: Vec<PathBuf>,

    /// Maximum number of includes in effect at once.
    pub max_include_depth: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        ReaderConfig {
            include_word: Some(DEFAULT_INCLUDE_WORD.to_string()),
            include_prefix: Some(DEFAULT_INCLUDE_PREFIX),
            rules: SplitRules::default(),
            search_paths: Vec::new(),
            max_include_depth: DEFAULT_MAX_INCLUDE_DEPTH,
        }
    }
}

impl ReaderConfig {
    pub fn with_include_word(mut self, word: Option<String>) -> Self {
        self.include_word = word;
        self
    }

    pub fn with_include_prefix(mut self, prefix: Option<char>) -> Self {
        self.include_prefix = prefix;
        self
    }

    pub fn with_rules(mut self, rules: SplitRules) -> Self {
        self.rules = rules;
        self
    }

    /// Append a directory to the search path list.
    pub fn with_search_path(mut self, directory: impl Into<PathBuf>) -> Self {
        self.search_paths.push(directory.into());
        self
    }

    pub fn with_max_include_depth(mut self, depth: usize) -> Self {
        self.max_include_depth = depth;
        self
    }

    /// If the word is an include directive, the reference it carries.  `Some(None)` means the
    /// reference is the next word.
    ///
    /// A quoted include word is literal.  The prefix only counts when it isn't quoted itself, so
    /// the reference after it may be quoted to hold spaces.
    pub(crate) fn include_reference<'a>(&self, word: &'a SplitWord) -> Option<Option<&'a str>> {
        if !word.quoted && self.include_word.as_deref() == Some(word.text.as_str()) {
            return Some(None);
        }

        match self.include_prefix {
            Some(prefix) if !word.quoted_start => word
                .text
                .strip_prefix(prefix)
                .filter(|rest| !rest.is_empty())
                .map(Some),
            _ => None,
        }
    }
}
