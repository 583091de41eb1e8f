//! The fixed catalog of generated assets.
//!
//! Every output file is planned here from static size tables before any
//! pixel work happens. A plan is pure data: category, file name and what to
//! render. The generator turns plans into files; tests can enumerate the
//! whole output tree without touching an image.
//!
//! ## Output Structure
//!
//! ```text
//! <output>/
//! ├── favicon/    favicon-{16,32,48}x{..}.png, favicon.ico, favicon.svg
//! ├── header/     logo-{32,40,64}[-rounded|-circle].png,
//! │               logo-high-res[-rounded|-circle].png (256px)
//! ├── social/     opengraph-1200x630.jpg, twitter-1200x600.jpg
//! ├── app-icons/  icon-{128,192,256,512}[-rounded|-bg-rounded|-circle].png
//! └── brand/      logo-{100,200,400}[-rounded|-circle].png
//! ```

use crate::config::StyleConfig;
use crate::imaging::Descriptor;
use std::fmt;
use std::path::PathBuf;

pub const FAVICON_SIZES: [u32; 3] = [16, 32, 48];
pub const HEADER_SIZES: [u32; 3] = [32, 40, 64];
/// Edge of the header variants meant for vector tracing.
pub const HEADER_HIGH_RES: u32 = 256;
pub const SOCIAL_CARDS: [(&str, u32, u32); 2] =
    [("opengraph", 1200, 630), ("twitter", 1200, 600)];
pub const APP_ICON_SIZES: [u32; 4] = [128, 192, 256, 512];
pub const BRAND_SIZES: [u32; 3] = [100, 200, 400];

/// One of the five asset groups, each written to its own subdirectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Favicon,
    Header,
    Social,
    AppIcons,
    Brand,
}

impl Category {
    /// Generation order.
    pub const ALL: [Category; 5] = [
        Category::Favicon,
        Category::Header,
        Category::Social,
        Category::AppIcons,
        Category::Brand,
    ];

    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Favicon => "favicon",
            Category::Header => "header",
            Category::Social => "social",
            Category::AppIcons => "app-icons",
            Category::Brand => "brand",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Which optional variants to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    pub rounded: bool,
    pub circle: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            rounded: true,
            circle: true,
        }
    }
}

/// What to render for one output file.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetKind {
    /// A single PNG.
    Png(Descriptor),
    /// One ICO file bundling a raster per descriptor.
    Icon(Vec<Descriptor>),
    /// The static SVG favicon template.
    Svg,
    /// A JPEG share card.
    SocialCard { width: u32, height: u32 },
}

/// One planned output file.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPlan {
    pub category: Category,
    pub file_name: String,
    pub kind: AssetKind,
}

impl AssetPlan {
    fn new(category: Category, file_name: String, kind: AssetKind) -> Self {
        Self {
            category,
            file_name,
            kind,
        }
    }

    /// Path relative to the output root: `<category>/<file_name>`.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.category.dir_name()).join(&self.file_name)
    }
}

/// Header corner radius: a sixth of the edge.
pub fn header_radius(size: u32) -> u32 {
    size / 6
}

/// iOS-style app icon corner radius, 22.22% of the edge.
pub fn app_icon_radius(size: u32) -> u32 {
    (size as f64 * 0.2222) as u32
}

/// Brand asset corner radius: an eighth of the edge.
pub fn brand_radius(size: u32) -> u32 {
    size / 8
}

/// Plan every file of one category.
pub fn plan_category(
    category: Category,
    options: &GenerateOptions,
    style: &StyleConfig,
) -> Vec<AssetPlan> {
    match category {
        Category::Favicon => plan_favicons(),
        Category::Header => plan_header(options),
        Category::Social => plan_social(),
        Category::AppIcons => plan_app_icons(options, style),
        Category::Brand => plan_brand(options),
    }
}

/// Plan every file of every category, in generation order.
pub fn plan_all(options: &GenerateOptions, style: &StyleConfig) -> Vec<AssetPlan> {
    Category::ALL
        .iter()
        .flat_map(|&c| plan_category(c, options, style))
        .collect()
}

fn plan_favicons() -> Vec<AssetPlan> {
    let category = Category::Favicon;
    let mut plans: Vec<AssetPlan> = FAVICON_SIZES
        .iter()
        .map(|&size| {
            AssetPlan::new(
                category,
                format!("favicon-{size}x{size}.png"),
                AssetKind::Png(Descriptor::square(size)),
            )
        })
        .collect();
    plans.push(AssetPlan::new(
        category,
        "favicon.ico".to_string(),
        AssetKind::Icon(FAVICON_SIZES.iter().map(|&s| Descriptor::square(s)).collect()),
    ));
    plans.push(AssetPlan::new(
        category,
        "favicon.svg".to_string(),
        AssetKind::Svg,
    ));
    plans
}

/// Plain, rounded and circle variants under one file-name stem.
///
/// The rounded and circle variants are subject to `options`.
fn shaped_variants(
    category: Category,
    stem: &str,
    size: u32,
    radius: u32,
    options: &GenerateOptions,
) -> Vec<AssetPlan> {
    let base = Descriptor::square(size);
    let mut plans = vec![AssetPlan::new(
        category,
        format!("{stem}.png"),
        AssetKind::Png(base),
    )];
    if options.rounded {
        plans.push(AssetPlan::new(
            category,
            format!("{stem}-rounded.png"),
            AssetKind::Png(base.rounded(radius)),
        ));
    }
    if options.circle {
        plans.push(AssetPlan::new(
            category,
            format!("{stem}-circle.png"),
            AssetKind::Png(base.circle()),
        ));
    }
    plans
}

fn plan_header(options: &GenerateOptions) -> Vec<AssetPlan> {
    let category = Category::Header;
    let mut plans: Vec<AssetPlan> = HEADER_SIZES
        .iter()
        .flat_map(|&size| {
            shaped_variants(
                category,
                &format!("logo-{size}"),
                size,
                header_radius(size),
                options,
            )
        })
        .collect();

    // Tracing sources are always produced in every shape.
    plans.extend(shaped_variants(
        category,
        "logo-high-res",
        HEADER_HIGH_RES,
        header_radius(HEADER_HIGH_RES),
        &GenerateOptions::default(),
    ));
    plans
}

fn plan_social() -> Vec<AssetPlan> {
    SOCIAL_CARDS
        .iter()
        .map(|&(name, width, height)| {
            AssetPlan::new(
                Category::Social,
                format!("{name}-{width}x{height}.jpg"),
                AssetKind::SocialCard { width, height },
            )
        })
        .collect()
}

fn plan_app_icons(options: &GenerateOptions, style: &StyleConfig) -> Vec<AssetPlan> {
    let category = Category::AppIcons;
    let background = style.app_icons.background.rgba();
    let mut plans = Vec::new();

    for size in APP_ICON_SIZES {
        let base = Descriptor::square(size);
        let radius = app_icon_radius(size);
        plans.push(AssetPlan::new(
            category,
            format!("icon-{size}.png"),
            AssetKind::Png(base),
        ));
        if options.rounded {
            plans.push(AssetPlan::new(
                category,
                format!("icon-{size}-rounded.png"),
                AssetKind::Png(base.rounded(radius)),
            ));
            plans.push(AssetPlan::new(
                category,
                format!("icon-{size}-bg-rounded.png"),
                AssetKind::Png(base.with_background(background).rounded(radius)),
            ));
        }
        if options.circle {
            plans.push(AssetPlan::new(
                category,
                format!("icon-{size}-circle.png"),
                AssetKind::Png(base.circle()),
            ));
        }
    }
    plans
}

fn plan_brand(options: &GenerateOptions) -> Vec<AssetPlan> {
    BRAND_SIZES
        .iter()
        .flat_map(|&size| {
            shaped_variants(
                Category::Brand,
                &format!("logo-{size}"),
                size,
                brand_radius(size),
                options,
            )
        })
        .collect()
}
