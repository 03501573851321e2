use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::RgbaImage;
use rayon::prelude::*;
use tracing::debug;

use crate::{gloss::Glosser, i18n::LanguageEntry, render::CaptionRenderer};

/// Every printed side of the book, front to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Cover,
    Page1,
    Page2,
    Page3,
    Page4,
    Page5,
    BackCover,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Cover,
        Page::Page1,
        Page::Page2,
        Page::Page3,
        Page::Page4,
        Page::Page5,
        Page::BackCover,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Page::Cover => "cover",
            Page::Page1 => "page1",
            Page::Page2 => "page2",
            Page::Page3 => "page3",
            Page::Page4 => "page4",
            Page::Page5 => "page5",
            Page::BackCover => "backcover",
        }
    }

    /// Where the page's artwork lives inside `images_dir`.
    pub fn image_path(self, images_dir: &Path) -> PathBuf {
        images_dir.join(format!("{}.jpg", self.name()))
    }
}

/// One physical leaf: the texture on each face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sheet {
    pub front: Page,
    pub back: Page,
}

/// The leaves of the book in binding order. The cover shows the same art on
/// both faces.
pub const SHEETS: [Sheet; 4] = [
    Sheet {
        front: Page::Cover,
        back: Page::Cover,
    },
    Sheet {
        front: Page::Page1,
        back: Page::Page2,
    },
    Sheet {
        front: Page::Page3,
        back: Page::Page4,
    },
    Sheet {
        front: Page::Page5,
        back: Page::BackCover,
    },
];

/// A finished page texture.
pub struct PageTexture {
    pub page: Page,
    pub image: RgbaImage,
}

impl PageTexture {
    /// Writes the texture as `<out_dir>/<page>.png`.
    pub fn save(&self, out_dir: &Path) -> Result<PathBuf> {
        let path = out_dir.join(format!("{}.png", self.page.name()));

        self.image
            .save(&path)
            .with_context(|| format!("Failed to write texture: {:?}", path))?;

        Ok(path)
    }
}

/// Renders every page of `entry` from the artwork in `images_dir`.
///
/// Pages render in parallel; the result is in [`Page::ALL`] order.
/// `on_page` is called as each page finishes.
pub fn render_pages(
    renderer: &CaptionRenderer<'_>,
    entry: &LanguageEntry,
    glosser: &dyn Glosser,
    images_dir: &Path,
    anchor: f64,
    on_page: impl Fn(Page) + Sync,
) -> Result<Vec<PageTexture>> {
    Page::ALL
        .into_par_iter()
        .map(|page| -> Result<PageTexture> {
            let path = page.image_path(images_dir);
            let request = entry.caption(page).request(anchor);

            let image = renderer
                .render_file(&path, &request, glosser)
                .with_context(|| format!("Failed to render {} ({})", page.name(), entry.code))?;

            debug!("Rendered {} from {:?}", page.name(), path);
            on_page(page);

            Ok(PageTexture { page, image })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use image::Rgba;

    use super::*;
    use crate::{
        font::testing::BoxFace,
        i18n::{LanguageTable, store::MemoryStore},
        style::{CaptionStyle, DEFAULT_ANCHOR},
    };

    const ART: Rgba<u8> = Rgba([40, 160, 90, 255]);

    fn write_artwork(dir: &Path) -> Result<()> {
        for page in Page::ALL {
            RgbaImage::from_pixel(400, 300, ART).save_with_format(
                page.image_path(dir),
                image::ImageFormat::Png,
            )?;
        }

        Ok(())
    }

    #[test]
    fn test_sheets_cover_every_page() {
        let mut faces: Vec<Page> = SHEETS
            .iter()
            .flat_map(|s| [s.front, s.back])
            .filter(|p| *p != Page::Cover)
            .collect();
        faces.push(Page::Cover);
        faces.sort_by_key(|p| p.index());

        assert_eq!(faces, Page::ALL);
    }

    #[test]
    fn test_page_paths() {
        let dir = Path::new("images");

        assert_eq!(Page::Cover.image_path(dir), dir.join("cover.jpg"));
        assert_eq!(Page::Page3.image_path(dir), dir.join("page3.jpg"));
        assert_eq!(Page::BackCover.image_path(dir), dir.join("backcover.jpg"));
    }

    #[test]
    fn test_render_pages_in_order() -> Result<()> {
        let dir = tempfile::tempdir()?;
        write_artwork(dir.path())?;

        let table = LanguageTable::new(Box::new(MemoryStore::new()));
        let entry = table.language_data(Some("ja"));
        let renderer = CaptionRenderer::new(&BoxFace, &BoxFace, CaptionStyle::default());
        let done = AtomicUsize::new(0);

        let textures = render_pages(
            &renderer,
            entry,
            &entry.glosses,
            dir.path(),
            DEFAULT_ANCHOR,
            |_| {
                done.fetch_add(1, Ordering::Relaxed);
            },
        )?;

        assert_eq!(done.load(Ordering::Relaxed), 7);

        let pages: Vec<Page> = textures.iter().map(|t| t.page).collect();
        assert_eq!(pages, Page::ALL);

        for texture in &textures {
            assert_eq!(texture.image.dimensions(), (400, 300));

            let untouched = texture.image.pixels().all(|px| *px == ART);
            let captioned = !entry.caption(texture.page).text.is_empty();
            assert_eq!(untouched, !captioned);
        }

        let out = tempfile::tempdir()?;
        let path = textures[1].save(out.path())?;
        assert_eq!(path, out.path().join("page1.png"));
        assert!(path.is_file());

        Ok(())
    }

    #[test]
    fn test_missing_artwork_fails() {
        let table = LanguageTable::new(Box::new(MemoryStore::new()));
        let entry = table.language_data(None);
        let renderer = CaptionRenderer::new(&BoxFace, &BoxFace, CaptionStyle::default());

        let result = render_pages(
            &renderer,
            entry,
            &entry.glosses,
            Path::new("/nonexistent"),
            DEFAULT_ANCHOR,
            |_| {},
        );

        assert!(result.is_err());
    }
}
