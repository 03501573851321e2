use anyhow::{Result, anyhow};
use kurbo::{BezPath, Point};
use skrifa::{
    FontRef, GlyphId, MetadataProvider,
    instance::{LocationRef, Size},
    outline::DrawSettings,
    raw::FileRef,
};
use tracing::debug;

use crate::pen::PathPen;

/// Font metrics and outlines at a pixel size.
///
/// Captions are measured and drawn through the same implementation, so the
/// centring computed from [`Typeface::advance`] matches the ink laid down by
/// [`Typeface::outline`].
pub trait Typeface: Send + Sync {
    /// Sum of horizontal advances of `text` at `size` pixels.
    fn advance(&self, text: &str, size: f64) -> f64;

    /// Outline of `text` at `size` pixels, pen starting at `origin` on the
    /// baseline, on a y-down canvas.
    fn outline(&self, text: &str, size: f64, origin: Point) -> BezPath;
}

/// A scalable font read with skrifa.
pub struct OutlineFont<'a> {
    font: FontRef<'a>,
}

impl<'a> OutlineFont<'a> {
    pub fn new(font: FontRef<'a>) -> Self {
        Self { font }
    }

    /// Loads the first font of a font file or collection.
    pub fn from_data(data: &'a [u8]) -> Result<Self> {
        let file = FileRef::new(data).map_err(|e| anyhow!("Failed to parse font file: {:?}", e))?;

        let font = file
            .fonts()
            .next()
            .ok_or_else(|| anyhow!("No fonts found in font file"))?
            .map_err(|e| anyhow!("Failed to load first font: {:?}", e))?;

        Ok(Self::new(font))
    }

    fn glyph_id(&self, ch: char) -> GlyphId {
        self.font.charmap().map(ch).unwrap_or(GlyphId::NOTDEF)
    }
}

impl Typeface for OutlineFont<'_> {
    fn advance(&self, text: &str, size: f64) -> f64 {
        let metrics = self
            .font
            .glyph_metrics(Size::new(size as f32), LocationRef::default());

        text.chars()
            .map(|ch| metrics.advance_width(self.glyph_id(ch)).unwrap_or(0.0) as f64)
            .sum()
    }

    fn outline(&self, text: &str, size: f64, origin: Point) -> BezPath {
        let px = Size::new(size as f32);
        let metrics = self.font.glyph_metrics(px, LocationRef::default());
        let outlines = self.font.outline_glyphs();

        let mut path = BezPath::new();
        let mut x = origin.x;

        for ch in text.chars() {
            let gid = self.glyph_id(ch);

            if let Some(glyph) = outlines.get(gid) {
                let mut pen = PathPen::at_baseline(Point::new(x, origin.y));

                match glyph.draw(DrawSettings::unhinted(px, LocationRef::default()), &mut pen) {
                    Ok(_) => {
                        for el in pen.path.elements() {
                            path.push(*el);
                        }
                    }
                    Err(e) => debug!("Skipping outline for {ch:?}: {e:?}"),
                }
            }

            x += metrics.advance_width(gid).unwrap_or(0.0) as f64;
        }

        path
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use kurbo::{BezPath, Point, Rect, Shape};

    use super::Typeface;

    /// Draws every visible character as a solid box. Wide scripts advance a
    /// full em, ASCII half an em.
    pub struct BoxFace;

    impl BoxFace {
        pub fn char_advance(ch: char, size: f64) -> f64 {
            if ch.is_ascii() { size / 2.0 } else { size }
        }
    }

    impl Typeface for BoxFace {
        fn advance(&self, text: &str, size: f64) -> f64 {
            text.chars().map(|ch| Self::char_advance(ch, size)).sum()
        }

        fn outline(&self, text: &str, size: f64, origin: Point) -> BezPath {
            let mut path = BezPath::new();
            let mut x = origin.x;

            for ch in text.chars() {
                let advance = Self::char_advance(ch, size);

                if !ch.is_whitespace() {
                    let inset = size * 0.1;
                    let rect = Rect::new(x + inset, origin.y - size * 0.7, x + advance - inset, origin.y);

                    for el in rect.path_elements(0.1) {
                        path.push(el);
                    }
                }

                x += advance;
            }

            path
        }
    }
}
