use std::{fs, path::PathBuf, str::FromStr};

use clap::{Args, Parser, Subcommand};
use ehon::{
    CaptionRenderer, CaptionStyle, DEFAULT_ANCHOR, GlossTable, Glosser, LanguageTable,
    OutlineFont, Typeface, i18n::store::FileStore, render_pages, validate_anchor,
};
use indicatif::ProgressStyle;
use miette::{Error, IntoDiagnostic, Result, WrapErr, miette};
use tracing::{info, info_span};
use tracing_indicatif::{IndicatifLayer, span_ext::IndicatifSpanExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Directory holding the saved language preference. Defaults to the
    /// platform config directory.
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page texture of the book.
    Render(RenderArgs),
    /// List the available languages.
    Languages,
    /// Select and save the book language.
    SetLanguage {
        /// Language code, e.g. 'ja' or 'en'
        code: String,
    },
}

#[derive(Args)]
struct RenderArgs {
    /// Directory with cover.jpg, page1.jpg .. page5.jpg and backcover.jpg
    #[arg(long, default_value = "images")]
    images: PathBuf,

    /// Output directory for the PNG textures
    #[arg(short, long)]
    out_dir: PathBuf,

    /// Font file for caption text (a bold face reads best)
    #[arg(long)]
    font: PathBuf,

    /// Optional font file for ruby text. Defaults to --font.
    #[arg(long)]
    gloss_font: Option<PathBuf>,

    /// Language to render. Defaults to the saved language.
    #[arg(long)]
    lang: Option<String>,

    /// Ruby source: 'table' (the language's own glosses), 'pinyin' or 'none'.
    #[arg(long, default_value = "table")]
    ruby: String,

    /// Vertical caption anchor as a fraction of page height, from 0 to 1.
    #[arg(long, default_value_t = DEFAULT_ANCHOR)]
    anchor: f64,

    /// Caption text size in pixels. Ruby size, ruby height, panel and line
    /// spacing scale with it.
    #[arg(long, default_value_t = 30.0)]
    base_size: f64,

    /// Ruby text size in pixels. Defaults to half of --base-size.
    #[arg(long)]
    gloss_size: Option<f64>,
}

pub enum Ruby {
    Table,
    #[cfg(feature = "pinyin")]
    Pinyin,
    None,
}

impl FromStr for Ruby {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Ruby::Table),
            #[cfg(feature = "pinyin")]
            "pinyin" => Ok(Ruby::Pinyin),
            "none" => Ok(Ruby::None),
            other => Err(miette!("Unknown ruby argument: {}", other)),
        }
    }
}

fn main() -> Result<()> {
    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ehon=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();

    let cli = Cli::parse();

    let store = match &cli.state_dir {
        Some(dir) => FileStore::new(dir),
        None => FileStore::in_config_dir(),
    };
    let mut languages = LanguageTable::new(Box::new(store));

    match cli.command {
        Command::Render(args) => render(&args, &languages),
        Command::Languages => {
            let current = languages.current_language().to_string();

            for entry in languages.languages() {
                let marker = if entry.code == current { "*" } else { " " };
                println!("{} {} {} {}", marker, entry.code, entry.flag, entry.name);
            }

            Ok(())
        }
        Command::SetLanguage { code } => {
            if !languages.set_language(&code) {
                return Err(miette!("Unknown language: {}", code));
            }

            info!("Language set to {}", code);

            Ok(())
        }
    }
}

fn render(args: &RenderArgs, languages: &LanguageTable) -> Result<()> {
    let ruby = Ruby::from_str(&args.ruby)
        .wrap_err_with(|| miette!("Failed to parse --ruby argument: {}", &args.ruby))?;

    let anchor = validate_anchor(args.anchor).map_err(|e| miette!("Invalid --anchor: {e:#}"))?;

    let entry = languages.language_data(args.lang.as_deref());

    if let Some(lang) = &args.lang {
        if lang != entry.code {
            tracing::warn!("Unknown language {:?}, using {}", lang, entry.code);
        }
    }

    let font_data = fs::read(&args.font)
        .into_diagnostic()
        .wrap_err_with(|| miette!("Failed to read font file: {:?}", args.font))?;
    let base_font = OutlineFont::from_data(&font_data).map_err(|e| miette!("{e:#}"))?;

    let gloss_font_data = match &args.gloss_font {
        Some(path) => Some(
            fs::read(path)
                .into_diagnostic()
                .wrap_err_with(|| miette!("Failed to read ruby font file: {:?}", path))?,
        ),
        None => None,
    };
    let gloss_font = match &gloss_font_data {
        Some(data) => Some(OutlineFont::from_data(data).map_err(|e| miette!("{e:#}"))?),
        None => None,
    };
    let gloss_face: &dyn Typeface = match &gloss_font {
        Some(font) => font,
        None => &base_font,
    };

    let no_glosses = GlossTable::new();
    let glosser: &dyn Glosser = match ruby {
        Ruby::Table => &entry.glosses,
        #[cfg(feature = "pinyin")]
        Ruby::Pinyin => &ehon::gloss::pinyin::PinyinGlosser,
        Ruby::None => &no_glosses,
    };

    let mut style = CaptionStyle::at_base_size(args.base_size);
    if let Some(gloss_size) = args.gloss_size {
        style.gloss_size = gloss_size;
    }
    let renderer = CaptionRenderer::new(&base_font, gloss_face, style);

    if !args.out_dir.exists() {
        fs::create_dir_all(&args.out_dir)
            .into_diagnostic()
            .wrap_err_with(|| miette!("Failed to create out-dir: {:?}", args.out_dir))?;
    }

    info!(
        "Rendering {} ({}) from {:?} -> {:?}...",
        entry.name, entry.code, args.images, args.out_dir
    );

    let pages_span = info_span!("render_pages");
    pages_span.pb_set_style(
        &ProgressStyle::with_template(
            "{msg} [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise}]",
        )
        .into_diagnostic()?,
    );
    pages_span.pb_set_length(ehon::Page::ALL.len() as u64);
    pages_span.pb_set_message("Rendering pages");

    let pages_span_enter = pages_span.enter();

    let textures = render_pages(
        &renderer,
        entry,
        glosser,
        &args.images,
        anchor,
        |_| pages_span.pb_inc(1),
    )
    .map_err(|e| miette!("{e:#}"))?;

    drop(pages_span_enter);
    drop(pages_span);

    for texture in &textures {
        let path = texture.save(&args.out_dir).map_err(|e| miette!("{e:#}"))?;
        info!("Wrote {:?}", path);
    }

    info!("Done rendering {} pages.", textures.len());

    Ok(())
}
