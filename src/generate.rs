//! Asset generation.
//!
//! [`LogoGenerator`] owns the decoded source logo and turns the
//! [`catalog`](crate::catalog) plans into files through an
//! [`AssetBackend`]. Generation is strictly sequential: categories run in
//! [`Category::ALL`] order, files in plan order, and the first failure aborts
//! the run. There is no partial-success bookkeeping; a failed run is simply
//! re-run.
//!
//! ```text
//! logo.png ──load──▶ RgbaImage ──plan──▶ [AssetPlan] ──render──▶ backend ──▶ files
//! ```

use crate::catalog::{AssetKind, AssetPlan, Category, GenerateOptions, plan_category};
use crate::config::{FaviconConfig, StyleConfig};
use crate::imaging::{
    AssetBackend, BackendError, Descriptor, FsBackend, TitleFont, compose_social_card,
    font_sources, load_image, resize, resolve_font,
};
use image::RgbaImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Source image not found: {}", .0.display())]
    MissingSourceFile(PathBuf),
    #[error("Failed to decode {}: {source}", path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: BackendError,
    },
}

/// A file that was written, with its size on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    pub category: Category,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Generates the full asset catalog from one source logo.
///
/// The source is decoded once, normalized to RGBA, and never mutated.
#[derive(Debug)]
pub struct LogoGenerator {
    source: RgbaImage,
    output_dir: PathBuf,
    options: GenerateOptions,
    style: StyleConfig,
    font: TitleFont,
}

impl LogoGenerator {
    /// Load the logo at `input`.
    ///
    /// Fails with [`GenerateError::MissingSourceFile`] before any decoding if
    /// the path does not exist.
    pub fn open(
        input: &Path,
        output_dir: impl Into<PathBuf>,
        options: GenerateOptions,
        style: StyleConfig,
    ) -> Result<Self, GenerateError> {
        if !input.exists() {
            return Err(GenerateError::MissingSourceFile(input.to_path_buf()));
        }
        let image = load_image(input).map_err(|source| GenerateError::UnreadableSource {
            path: input.to_path_buf(),
            source,
        })?;
        log::debug!(
            "Loaded {} ({}x{})",
            input.display(),
            image.width(),
            image.height()
        );
        Ok(Self::from_image(image.to_rgba8(), output_dir, options, style))
    }

    /// Build a generator around an already decoded logo.
    pub fn from_image(
        source: RgbaImage,
        output_dir: impl Into<PathBuf>,
        options: GenerateOptions,
        style: StyleConfig,
    ) -> Self {
        let font = resolve_font(&font_sources(&style.social.font_paths));
        Self {
            source,
            output_dir: output_dir.into(),
            options,
            style,
            font,
        }
    }

    pub fn source(&self) -> &RgbaImage {
        &self.source
    }

    /// Render one raster variant of the source.
    pub fn resize(&self, descriptor: &Descriptor) -> RgbaImage {
        resize(&self.source, descriptor)
    }

    /// Render a share card with the configured title and colors.
    pub fn social_card(&self, width: u32, height: u32) -> image::RgbImage {
        compose_social_card(
            &self.source,
            &self.font,
            &self.style.social.card_style(),
            (width, height),
            &self.style.social.title,
        )
    }

    /// Render and write every file of one category.
    pub fn generate_category(
        &self,
        backend: &impl AssetBackend,
        category: Category,
    ) -> Result<Vec<GeneratedAsset>, GenerateError> {
        log::debug!("Generating {category}");
        plan_category(category, &self.options, &self.style)
            .iter()
            .map(|plan| self.write_plan(backend, plan))
            .collect()
    }

    /// Run every category in order. The first failure aborts the rest.
    pub fn generate_all(
        &self,
        backend: &impl AssetBackend,
    ) -> Result<Vec<GeneratedAsset>, GenerateError> {
        let mut assets = Vec::new();
        for category in Category::ALL {
            assets.extend(self.generate_category(backend, category)?);
        }
        Ok(assets)
    }

    fn write_plan(
        &self,
        backend: &impl AssetBackend,
        plan: &AssetPlan,
    ) -> Result<GeneratedAsset, GenerateError> {
        let path = self.output_dir.join(plan.relative_path());
        let written = match &plan.kind {
            AssetKind::Png(descriptor) => backend.write_png(&path, &self.resize(descriptor)),
            AssetKind::Icon(descriptors) => {
                let frames: Vec<RgbaImage> = descriptors.iter().map(|d| self.resize(d)).collect();
                backend.write_ico(&path, &frames)
            }
            AssetKind::Svg => backend.write_svg(&path, &favicon_svg(&self.style.favicon)),
            AssetKind::SocialCard { width, height } => backend.write_jpeg(
                &path,
                &self.social_card(*width, *height),
                self.style.social.jpeg_quality(),
            ),
        };
        let bytes = written.map_err(|source| GenerateError::WriteFailure {
            path: path.clone(),
            source,
        })?;
        Ok(GeneratedAsset {
            category: plan.category,
            path,
            bytes,
        })
    }
}

/// Generate the whole catalog for `input` into `output_dir` on disk.
pub fn generate(
    input: &Path,
    output_dir: &Path,
    options: GenerateOptions,
    style: StyleConfig,
) -> Result<Vec<GeneratedAsset>, GenerateError> {
    let generator = LogoGenerator::open(input, output_dir, options, style)?;
    generator.generate_all(&FsBackend::new())
}

/// The static SVG favicon: a rounded tile with a centered glyph.
///
/// Not derived from the source image; meant as a starting point for a
/// hand-made vector favicon.
pub fn favicon_svg(style: &FaviconConfig) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32">
  <rect width="32" height="32" fill="{background}" rx="6"/>
  <text x="16" y="20" text-anchor="middle" fill="white" font-family="Arial" font-size="20">{glyph}</text>
  <style>
    @media (prefers-color-scheme: dark) {{
      rect {{ fill: {dark}; }}
    }}
  </style>
</svg>
"#,
        background = style.background,
        dark = style.dark_background,
        glyph = escape_xml(&style.glyph),
    )
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
