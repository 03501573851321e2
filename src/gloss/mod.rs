#[cfg(feature = "pinyin")]
pub mod pinyin;

use std::borrow::Cow;

use rustc_hash::FxHashMap;

/// A source of ruby glosses (small phonetic text placed above a character).
pub trait Glosser: Send + Sync {
    /// Returns the gloss for `ch`, if any.
    fn gloss(&self, ch: char) -> Option<Cow<'_, str>>;
}

/// A fixed character to gloss mapping. Empty for languages without ruby.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlossTable {
    entries: FxHashMap<char, String>,
}

impl GlossTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, ch: char) -> Option<&str> {
        self.entries.get(&ch).map(String::as_str)
    }

    pub fn insert(&mut self, ch: char, gloss: impl Into<String>) {
        self.entries.insert(ch, gloss.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(char, S)> for GlossTable {
    fn from_iter<I: IntoIterator<Item = (char, S)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(ch, gloss)| (ch, gloss.into()))
                .collect(),
        }
    }
}

impl Glosser for GlossTable {
    fn gloss(&self, ch: char) -> Option<Cow<'_, str>> {
        self.get(ch).map(Cow::Borrowed)
    }
}
