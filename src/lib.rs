pub mod book;
pub mod font;
pub mod gloss;
pub mod i18n;
pub mod layout;
pub mod pen;
pub mod render;
pub mod script;
pub mod segment;
pub mod style;

pub use book::{Page, PageTexture, SHEETS, Sheet, render_pages};
pub use font::{OutlineFont, Typeface};
pub use gloss::{GlossTable, Glosser};
pub use i18n::{Caption, LanguageEntry, LanguageTable, UiLabels};
pub use layout::{LayoutLine, RenderRequest, compose_line, layout_caption};
pub use render::{CaptionRenderer, load_image};
pub use script::is_glossable;
pub use segment::{Segment, segment};
pub use style::{CaptionStyle, DEFAULT_ANCHOR, validate_anchor};
