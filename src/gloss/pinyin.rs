use std::borrow::Cow;

use ::pinyin::ToPinyin;

use super::Glosser;
use crate::script::is_glossable;

/// Glosses every hanzi with its toned pinyin reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinGlosser;

impl Glosser for PinyinGlosser {
    fn gloss(&self, ch: char) -> Option<Cow<'_, str>> {
        if !is_glossable(ch) {
            return None;
        }

        ch.to_pinyin().map(|p| Cow::Borrowed(p.with_tone()))
    }
}
