use crate::{gloss::Glosser, script::is_glossable};

/// Extra horizontal space (in pixels) after a glossed ideograph, so adjacent
/// glosses do not collide.
pub const GLOSS_SPACING: f64 = 3.0;

/// One layout unit: a glossed ideograph or a plain character.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub text: String,
    pub gloss: Option<String>,
    /// Space added after this segment, on top of its measured advance.
    pub spacing: f64,
}

impl Segment {
    pub fn plain(ch: char) -> Self {
        Self {
            text: ch.to_string(),
            gloss: None,
            spacing: 0.0,
        }
    }

    pub fn glossed(ch: char, gloss: impl Into<String>) -> Self {
        Self {
            text: ch.to_string(),
            gloss: Some(gloss.into()),
            spacing: GLOSS_SPACING,
        }
    }

    pub fn is_glossed(&self) -> bool {
        self.gloss.is_some()
    }
}

/// Splits `text` into one segment per `char`, attaching glosses to the
/// ideographs `glosser` knows.
pub fn segment(text: &str, glosser: &dyn Glosser) -> Vec<Segment> {
    text.chars()
        .map(|ch| {
            let gloss = if is_glossable(ch) {
                glosser.gloss(ch)
            } else {
                None
            };

            match gloss {
                Some(gloss) => Segment::glossed(ch, gloss),
                None => Segment::plain(ch),
            }
        })
        .collect()
}
