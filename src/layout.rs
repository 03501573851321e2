use crate::{
    font::Typeface,
    gloss::Glosser,
    segment::{Segment, segment},
    style::{CaptionStyle, DEFAULT_ANCHOR},
};

/// What to write on a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest<'a> {
    pub caption: &'a str,
    /// Explicit two-line layout. When absent the caption is one line.
    pub lines: Option<[&'a str; 2]>,
    /// Vertical anchor as a fraction of page height.
    pub anchor: f64,
}

impl<'a> RenderRequest<'a> {
    pub fn new(caption: &'a str) -> Self {
        Self {
            caption,
            lines: None,
            anchor: DEFAULT_ANCHOR,
        }
    }

    pub fn with_lines(mut self, lines: Option<[&'a str; 2]>) -> Self {
        self.lines = lines;
        self
    }

    pub fn with_anchor(mut self, anchor: f64) -> Self {
        self.anchor = anchor;
        self
    }

    /// Text of each line to draw. Nothing for an empty caption.
    pub fn line_texts(&self) -> Vec<&'a str> {
        if self.caption.is_empty() {
            return Vec::new();
        }

        match self.lines {
            Some(lines) => lines.to_vec(),
            None => vec![self.caption],
        }
    }
}

/// A measured line, ready to paint left to right from `start_x`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutLine {
    pub segments: Vec<Segment>,
    pub total_width: f64,
    pub start_x: f64,
    pub baseline: f64,
}

/// Measures `segments` and centres them horizontally on the canvas.
pub fn compose_line(
    segments: Vec<Segment>,
    face: &dyn Typeface,
    size: f64,
    canvas_width: f64,
    baseline: f64,
) -> LayoutLine {
    let total_width = segments
        .iter()
        .map(|s| face.advance(&s.text, size) + s.spacing)
        .sum::<f64>();

    LayoutLine {
        segments,
        total_width,
        start_x: canvas_width / 2.0 - total_width / 2.0,
        baseline,
    }
}

/// Lays out every line of a caption on a `width` x `height` canvas.
pub fn layout_caption(
    request: &RenderRequest<'_>,
    glosser: &dyn Glosser,
    face: &dyn Typeface,
    style: &CaptionStyle,
    width: f64,
    height: f64,
) -> Vec<LayoutLine> {
    let texts = request.line_texts();
    let baselines = style.baselines(height * request.anchor, texts.len());

    texts
        .into_iter()
        .zip(baselines)
        .map(|(text, baseline)| {
            compose_line(segment(text, glosser), face, style.base_size, width, baseline)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{font::testing::BoxFace, gloss::GlossTable};

    fn japanese() -> GlossTable {
        [('友', "とも"), ('達', "だち"), ('笑', "わら")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_compose_line_centres() {
        let segments = segment("友達と", &japanese());
        let line = compose_line(segments, &BoxFace, 30.0, 800.0, 0.0);

        // three full-width glyphs plus two gloss gaps
        assert_eq!(line.total_width, 96.0);
        assert_eq!(line.start_x, 400.0 - 48.0);
    }

    #[test]
    fn test_empty_line() {
        let line = compose_line(Vec::new(), &BoxFace, 30.0, 800.0, 0.0);

        assert_eq!(line.total_width, 0.0);
        assert_eq!(line.start_x, 400.0);
    }

    #[test]
    fn test_wide_lines_start_off_canvas() {
        let text = "あ".repeat(40);
        let line = compose_line(segment(&text, &GlossTable::new()), &BoxFace, 30.0, 800.0, 0.0);

        assert_eq!(line.total_width, 1200.0);
        assert_eq!(line.start_x, -200.0);
    }

    #[test]
    fn test_width_never_shrinks() {
        let table = japanese();
        let text = "友達と笑ってab c。";
        let mut previous = 0.0;

        for end in text.char_indices().map(|(i, c)| i + c.len_utf8()) {
            let line = compose_line(segment(&text[..end], &table), &BoxFace, 30.0, 800.0, 0.0);

            assert!(line.total_width >= previous);
            previous = line.total_width;
        }
    }

    #[test]
    fn test_empty_caption_has_no_lines() {
        let request = RenderRequest::new("");
        let lines = layout_caption(
            &request,
            &japanese(),
            &BoxFace,
            &CaptionStyle::default(),
            800.0,
            1000.0,
        );

        assert!(lines.is_empty());
    }

    #[test]
    fn test_single_line_caption() {
        let request = RenderRequest::new("友達と笑って過ごした楽しい一日。");
        let lines = layout_caption(
            &request,
            &japanese(),
            &BoxFace,
            &CaptionStyle::default(),
            800.0,
            1000.0,
        );

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].baseline, 860.0);
    }

    #[test]
    fn test_two_line_caption() {
        let request = RenderRequest::new("ab")
            .with_lines(Some(["a", "b"]))
            .with_anchor(0.5);
        let lines = layout_caption(
            &request,
            &japanese(),
            &BoxFace,
            &CaptionStyle::default(),
            800.0,
            1000.0,
        );

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].segments, vec![Segment::plain('a')]);
        assert_eq!(lines[1].segments, vec![Segment::plain('b')]);
        assert_eq!(lines[0].baseline, 470.0);
        assert_eq!(lines[1].baseline, 530.0);
    }

    #[test]
    fn test_line_overrides_ignored_for_empty_caption() {
        let request = RenderRequest::new("").with_lines(Some(["a", "b"]));

        assert!(request.line_texts().is_empty());
    }
}
