use std::path::Path;

use anyhow::{Context, Result, anyhow};
use image::{ImageReader, Rgba, RgbaImage};
use kurbo::{BezPath, PathEl, Point};
use tiny_skia::{
    Color, ColorU8, FillRule, LineJoin, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform,
};
use tracing::debug;

use crate::{
    font::Typeface,
    gloss::Glosser,
    layout::{LayoutLine, RenderRequest, layout_caption},
    style::CaptionStyle,
};

/// Decodes a page image into RGBA.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .with_context(|| format!("Failed to open page image: {:?}", path))?
        .decode()
        .with_context(|| format!("Failed to decode page image: {:?}", path))?;

    Ok(image.to_rgba8())
}

/// Paints captions onto page images.
pub struct CaptionRenderer<'f> {
    base_face: &'f dyn Typeface,
    gloss_face: &'f dyn Typeface,
    style: CaptionStyle,
}

impl<'f> CaptionRenderer<'f> {
    pub fn new(base_face: &'f dyn Typeface, gloss_face: &'f dyn Typeface, style: CaptionStyle) -> Self {
        Self {
            base_face,
            gloss_face,
            style,
        }
    }

    pub fn style(&self) -> &CaptionStyle {
        &self.style
    }

    /// Loads the image at `path`, then renders `request` onto it.
    pub fn render_file(
        &self,
        path: &Path,
        request: &RenderRequest<'_>,
        glosser: &dyn Glosser,
    ) -> Result<RgbaImage> {
        let base = load_image(path)?;

        self.render(&base, request, glosser)
    }

    /// Returns a copy of `base` with the caption painted on it. The result has
    /// the same dimensions as `base`.
    pub fn render(
        &self,
        base: &RgbaImage,
        request: &RenderRequest<'_>,
        glosser: &dyn Glosser,
    ) -> Result<RgbaImage> {
        let (width, height) = base.dimensions();

        let lines = layout_caption(
            request,
            glosser,
            self.base_face,
            &self.style,
            width as f64,
            height as f64,
        );

        // No panel on captionless pages such as the covers.
        if lines.is_empty() {
            debug!("Empty caption, keeping base image as is");
            return Ok(base.clone());
        }

        let mut canvas = to_pixmap(base)?;

        self.paint_panel(&mut canvas, height as f64 * request.anchor);

        for line in &lines {
            self.paint_line(&mut canvas, line);
        }

        debug!(
            "Rendered {} caption line(s) on a {}x{} page",
            lines.len(),
            width,
            height
        );

        Ok(to_image(&canvas, base))
    }

    fn paint_panel(&self, canvas: &mut Pixmap, anchor: f64) {
        let rect = Rect::from_xywh(
            0.0,
            (anchor - self.style.panel_above) as f32,
            canvas.width() as f32,
            self.style.panel_height as f32,
        );

        if let Some(rect) = rect {
            canvas.fill_rect(rect, &paint(self.style.panel_color), Transform::identity(), None);
        }
    }

    fn paint_line(&self, canvas: &mut Pixmap, line: &LayoutLine) {
        let base_size = self.style.base_size;
        let gloss_size = self.style.gloss_size;
        let gloss_baseline = line.baseline - self.style.gloss_rise;

        let mut base_ink = BezPath::new();
        let mut gloss_ink = BezPath::new();
        let mut x = line.start_x;

        for segment in &line.segments {
            let width = self.base_face.advance(&segment.text, base_size);

            append(
                &mut base_ink,
                &self
                    .base_face
                    .outline(&segment.text, base_size, Point::new(x, line.baseline)),
            );

            if let Some(gloss) = &segment.gloss {
                let gloss_width = self.gloss_face.advance(gloss, gloss_size);
                let center_x = x + width / 2.0;

                append(
                    &mut gloss_ink,
                    &self.gloss_face.outline(
                        gloss,
                        gloss_size,
                        Point::new(center_x - gloss_width / 2.0, gloss_baseline),
                    ),
                );
            }

            x += width + segment.spacing;
        }

        let ink = paint(self.style.text_color);

        if let Some(path) = to_skia_path(&base_ink) {
            canvas.fill_path(&path, &ink, FillRule::Winding, Transform::identity(), None);

            // Base text is drawn heavier than its ruby, even from one face.
            if self.style.embolden > 0.0 {
                let stroke = Stroke {
                    width: self.style.embolden as f32,
                    line_join: LineJoin::Round,
                    ..Stroke::default()
                };

                canvas.stroke_path(&path, &ink, &stroke, Transform::identity(), None);
            }
        }

        if let Some(path) = to_skia_path(&gloss_ink) {
            canvas.fill_path(&path, &ink, FillRule::Winding, Transform::identity(), None);
        }
    }
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;
    paint
}

fn append(dst: &mut BezPath, src: &BezPath) {
    for el in src.elements() {
        dst.push(*el);
    }
}

fn to_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();

    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => {
                builder.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32)
            }
            PathEl::CurveTo(p1, p2, p3) => builder.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }

    builder.finish()
}

fn to_pixmap(image: &RgbaImage) -> Result<Pixmap> {
    let (width, height) = image.dimensions();
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| anyhow!("Cannot paint on a {}x{} image", width, height))?;

    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }

    Ok(pixmap)
}

/// Copies painted pixels of `pixmap` over `base`. Pixels nothing was drawn on
/// keep their exact base value, which a premultiplied round trip would lose
/// for translucent pixels.
fn to_image(pixmap: &Pixmap, base: &RgbaImage) -> RgbaImage {
    let mut image = base.clone();

    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let [r, g, b, a] = dst.0;

        if ColorU8::from_rgba(r, g, b, a).premultiply() != *src {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
    }

    image
}
