//! Localized book content and the persisted language choice.

mod languages;
pub mod store;

pub use languages::DEFAULT_LANGUAGE;
use tracing::{debug, warn};

use crate::{book::Page, gloss::GlossTable, layout::RenderRequest};
use store::PreferenceStore;

/// Preference key holding the selected language code.
pub const LANGUAGE_KEY: &str = "bookLanguage";

/// Labels for the reader's on-screen controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
    pub prev: &'static str,
    pub next: &'static str,
    pub sound_on: &'static str,
    pub sound_off: &'static str,
    pub language: &'static str,
}

/// A page caption, optionally with an explicit two-line layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caption {
    pub text: &'static str,
    pub lines: Option<[&'static str; 2]>,
}

impl Caption {
    pub const EMPTY: Caption = Caption::single("");

    pub const fn single(text: &'static str) -> Self {
        Self { text, lines: None }
    }

    pub const fn split(text: &'static str, lines: [&'static str; 2]) -> Self {
        Self {
            text,
            lines: Some(lines),
        }
    }

    pub fn request(&self, anchor: f64) -> RenderRequest<'static> {
        RenderRequest::new(self.text)
            .with_lines(self.lines)
            .with_anchor(anchor)
    }
}

/// Everything the book needs for one language.
#[derive(Debug, Clone)]
pub struct LanguageEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    pub ui: UiLabels,
    /// Cover, pages 1 to 5, back cover.
    pub captions: [Caption; 7],
    pub glosses: GlossTable,
}

impl LanguageEntry {
    pub fn caption(&self, page: Page) -> &Caption {
        &self.captions[page.index()]
    }
}

/// The supported languages plus the reader's current choice.
pub struct LanguageTable {
    entries: Vec<LanguageEntry>,
    store: Box<dyn PreferenceStore>,
    current: usize,
}

impl LanguageTable {
    /// Builds the table from the built-in languages, restoring the saved
    /// choice from `store` when it names a known language.
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self::with_entries(languages::builtin(), store)
    }

    fn with_entries(entries: Vec<LanguageEntry>, store: Box<dyn PreferenceStore>) -> Self {
        let default = entries
            .iter()
            .position(|e| e.code == DEFAULT_LANGUAGE)
            .unwrap_or(0);

        let saved = store.get(LANGUAGE_KEY);
        let current = saved
            .as_deref()
            .and_then(|code| entries.iter().position(|e| e.code == code))
            .unwrap_or(default);

        debug!(
            "Language {} (saved: {:?})",
            entries[current].code,
            saved.as_deref()
        );

        Self {
            entries,
            store,
            current,
        }
    }

    pub fn languages(&self) -> impl Iterator<Item = &LanguageEntry> {
        self.entries.iter()
    }

    pub fn current_language(&self) -> &str {
        self.entries[self.current].code
    }

    /// Selects and persists `code`. Returns `false`, changing nothing, when
    /// the language is unknown.
    pub fn set_language(&mut self, code: &str) -> bool {
        let Some(index) = self.position(code) else {
            return false;
        };

        self.current = index;

        if let Err(e) = self.store.set(LANGUAGE_KEY, code) {
            warn!("Failed to save language preference: {e:#}");
        }

        true
    }

    /// Entry for `code`, or the current language when `None`. Unknown codes
    /// resolve to the default language.
    pub fn language_data(&self, code: Option<&str>) -> &LanguageEntry {
        let index = match code {
            Some(code) => self.position(code).unwrap_or_else(|| self.default_index()),
            None => self.current,
        };

        &self.entries[index]
    }

    /// Gloss of `ch` in language `code`, if that language defines one.
    pub fn lookup_gloss(&self, code: &str, ch: char) -> Option<&str> {
        self.position(code)
            .and_then(|index| self.entries[index].glosses.get(ch))
    }

    fn position(&self, code: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.code == code)
    }

    fn default_index(&self) -> usize {
        self.position(DEFAULT_LANGUAGE).unwrap_or(0)
    }
}
