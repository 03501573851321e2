use kurbo::{Affine, BezPath, Point};
use skrifa::outline::OutlinePen;

/// Collects glyph outlines into a [`BezPath`], mapping every point through
/// `transform` on the way in.
///
/// Fonts draw with y pointing up; canvases have y pointing down. The transform
/// used for captions flips y and moves the glyph origin onto the baseline.
pub struct PathPen {
    pub path: BezPath,
    transform: Affine,
}

impl PathPen {
    pub fn new(transform: Affine) -> Self {
        Self {
            path: BezPath::new(),
            transform,
        }
    }

    /// A pen placing the glyph origin at `origin` on a y-down canvas.
    pub fn at_baseline(origin: Point) -> Self {
        Self::new(Affine::translate(origin.to_vec2()) * Affine::FLIP_Y)
    }

    fn map(&self, x: f32, y: f32) -> Point {
        self.transform * Point::new(x as f64, y as f64)
    }
}

impl OutlinePen for PathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let (c, p) = (self.map(cx0, cy0), self.map(x, y));
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (c0, c1, p) = (self.map(cx0, cy0), self.map(cx1, cy1), self.map(x, y));
        self.path.curve_to(c0, c1, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}
