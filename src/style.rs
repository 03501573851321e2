use anyhow::{Result, bail};
use tiny_skia::Color;

/// Default vertical anchor, as a fraction of page height.
pub const DEFAULT_ANCHOR: f64 = 0.85;

/// Base text size the default geometry is tuned for.
const REFERENCE_SIZE: f64 = 30.0;

/// Checks that `anchor` lies on the page.
pub fn validate_anchor(anchor: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&anchor) {
        bail!("Anchor must be between 0 and 1, got {}", anchor);
    }

    Ok(anchor)
}

/// Fixed geometry and colors of a caption, in pixels relative to the anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionStyle {
    /// Base text size.
    pub base_size: f64,
    /// Ruby text size.
    pub gloss_size: f64,
    /// Stroke width added around base glyphs to embolden them. Glosses are
    /// never stroked.
    pub embolden: f64,
    /// Distance from a line's baseline up to its glosses' baseline.
    pub gloss_rise: f64,
    /// Panel top edge, measured upward from the anchor.
    pub panel_above: f64,
    pub panel_height: f64,
    /// Baseline of a lone line, measured downward from the anchor.
    pub single_line_drop: f64,
    /// Distance between baselines when a caption spans several lines.
    pub line_pitch: f64,
    pub panel_color: Color,
    pub text_color: Color,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            base_size: 30.0,
            gloss_size: 15.0,
            embolden: 1.0,
            gloss_rise: 35.0,
            panel_above: 60.0,
            panel_height: 140.0,
            single_line_drop: 10.0,
            line_pitch: 60.0,
            panel_color: Color::from_rgba8(255, 255, 255, 217),
            text_color: Color::BLACK,
        }
    }
}

impl CaptionStyle {
    /// The default geometry scaled so the base text is `base_size` pixels.
    pub fn at_base_size(base_size: f64) -> Self {
        let ratio = base_size / REFERENCE_SIZE;
        let default = Self::default();

        Self {
            base_size,
            gloss_size: default.gloss_size * ratio,
            embolden: default.embolden * ratio,
            gloss_rise: default.gloss_rise * ratio,
            panel_above: default.panel_above * ratio,
            panel_height: default.panel_height * ratio,
            single_line_drop: default.single_line_drop * ratio,
            line_pitch: default.line_pitch * ratio,
            ..default
        }
    }

    /// Baselines for `count` lines around `anchor`. Several lines are spread
    /// evenly and centred on the anchor.
    pub fn baselines(&self, anchor: f64, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![anchor + self.single_line_drop],
            n => {
                let middle = (n - 1) as f64 / 2.0;

                (0..n)
                    .map(|i| anchor + (i as f64 - middle) * self.line_pitch)
                    .collect()
            }
        }
    }
}
