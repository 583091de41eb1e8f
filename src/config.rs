//! Style configuration module.
//!
//! Handles loading, validating, and merging an optional style file. Stock
//! defaults reproduce the stock brand look; a user file only needs the keys it
//! wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [social]
//! title = "Describe Music"      # Text drawn next to the logo on share cards
//! gradient_top = "#4338ca"      # First scanline of the card background
//! gradient_bottom = "#6366f1"   # Last scanline of the card background
//! quality = 90                  # JPEG quality (1-100)
//! font_size = 60.0              # Title height in pixels
//! font_paths = ["/System/Library/Fonts/Arial.ttf", ...]
//!
//! [app_icons]
//! background = "#4338ca"        # Fill for icon-N-bg-rounded.png
//!
//! [favicon]
//! background = "#4338ca"        # favicon.svg tile color
//! dark_background = "#6366f1"   # tile color under prefers-color-scheme: dark
//! glyph = "🎧"                  # Character centered on the tile
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{CardStyle, Quality};
use image::{Rgb, Rgba};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// An opaque `#rrggbb` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub [u8; 3]);

impl HexColor {
    pub fn rgb(self) -> Rgb<u8> {
        Rgb(self.0)
    }

    pub fn rgba(self) -> Rgba<u8> {
        let [r, g, b] = self.0;
        Rgba([r, g, b, 255])
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let hex = value
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| format!("invalid color {value:?}, expected #rrggbb"))?;
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// Style configuration loaded from a TOML file.
///
/// All fields have defaults. User files need only specify the values they
/// want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Share card settings.
    pub social: SocialConfig,
    /// App icon settings.
    pub app_icons: AppIconsConfig,
    /// Static SVG favicon template settings.
    pub favicon: FaviconConfig,
}

impl StyleConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.social.quality) {
            return Err(ConfigError::Validation(
                "social.quality must be 1-100".into(),
            ));
        }
        if !(self.social.font_size.is_finite() && self.social.font_size > 0.0) {
            return Err(ConfigError::Validation(
                "social.font_size must be a positive number".into(),
            ));
        }
        if self.favicon.glyph.is_empty() {
            return Err(ConfigError::Validation(
                "favicon.glyph must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Share card settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialConfig {
    /// Title drawn to the right of the logo.
    pub title: String,
    /// Color of the top scanline.
    pub gradient_top: HexColor,
    /// Color of the bottom scanline.
    pub gradient_bottom: HexColor,
    /// JPEG encoding quality (1 = worst, 100 = best).
    pub quality: u32,
    /// Title height in pixels.
    pub font_size: f32,
    /// Font files tried in order; the built-in bitmap font is the final fallback.
    pub font_paths: Vec<String>,
}

impl SocialConfig {
    pub fn card_style(&self) -> CardStyle {
        CardStyle {
            gradient_top: self.gradient_top.rgb(),
            gradient_bottom: self.gradient_bottom.rgb(),
            font_size: self.font_size,
            ..CardStyle::default()
        }
    }

    pub fn jpeg_quality(&self) -> Quality {
        Quality::new(self.quality)
    }
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            title: "Describe Music".to_string(),
            gradient_top: HexColor([0x43, 0x38, 0xca]),
            gradient_bottom: HexColor([0x63, 0x66, 0xf1]),
            quality: 90,
            font_size: 60.0,
            font_paths: default_font_paths(),
        }
    }
}

/// Common locations of a plain sans-serif font on macOS, Linux and Windows.
pub fn default_font_paths() -> Vec<String> {
    [
        "/System/Library/Fonts/Arial.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/Library/Fonts/Arial.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

/// App icon settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppIconsConfig {
    /// Opaque fill behind the logo in the `-bg-rounded` variants.
    pub background: HexColor,
}

impl Default for AppIconsConfig {
    fn default() -> Self {
        Self {
            background: HexColor([0x43, 0x38, 0xca]),
        }
    }
}

/// Static SVG favicon template settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FaviconConfig {
    /// Tile color.
    pub background: HexColor,
    /// Tile color when the browser prefers a dark color scheme.
    pub dark_background: HexColor,
    /// Text centered on the tile.
    pub glyph: String,
}

impl Default for FaviconConfig {
    fn default() -> Self {
        Self {
            background: HexColor([0x43, 0x38, 0xca]),
            dark_background: HexColor([0x63, 0x66, 0xf1]),
            glyph: "🎧".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(StyleConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<StyleConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: StyleConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the style file at `path`, or the stock defaults when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<StyleConfig, ConfigError> {
    let overlay = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            Some(toml::from_str::<toml::Value>(&content)?)
        }
        None => None,
    };
    resolve_config(overlay)
}

/// Returns a fully-commented stock style file with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Logo Forge Style Configuration
# ==============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Pass the file with: logo-forge generate logo.png --config style.toml
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Social share cards (opengraph-1200x630.jpg, twitter-1200x600.jpg)
# ---------------------------------------------------------------------------
[social]
# Text drawn to the right of the logo.
title = "Describe Music"

# Vertical background gradient, top scanline to bottom scanline.
gradient_top = "#4338ca"
gradient_bottom = "#6366f1"

# JPEG encoding quality (1 = worst, 100 = best).
quality = 90

# Title height in pixels.
font_size = 60.0

# Font files tried in order. When none can be loaded a built-in bitmap
# font is used, so a missing font never fails the run.
font_paths = [
    "/System/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    'C:\Windows\Fonts\arial.ttf',
]

# ---------------------------------------------------------------------------
# App icons
# ---------------------------------------------------------------------------
[app_icons]
# Opaque fill behind the logo in icon-N-bg-rounded.png.
background = "#4338ca"

# ---------------------------------------------------------------------------
# SVG favicon template (favicon/favicon.svg)
# ---------------------------------------------------------------------------
[favicon]
# Tile color, and the tile color under prefers-color-scheme: dark.
background = "#4338ca"
dark_background = "#6366f1"

# Character centered on the tile.
glyph = "🎧"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(content: &str) -> Result<StyleConfig, ConfigError> {
        resolve_config(Some(toml::from_str(content)?))
    }

    // =========================================================================
    // Defaults
    // =========================================================================

    #[test]
    fn default_config_matches_stock_brand() {
        let config = StyleConfig::default();
        assert_eq!(config.social.title, "Describe Music");
        assert_eq!(config.social.gradient_top.rgb(), Rgb([67, 56, 202]));
        assert_eq!(config.social.gradient_bottom.rgb(), Rgb([99, 102, 241]));
        assert_eq!(config.social.quality, 90);
        assert_eq!(config.app_icons.background.rgba(), Rgba([67, 56, 202, 255]));
        assert_eq!(config.favicon.glyph, "🎧");
    }

    #[test]
    fn default_card_style_matches_card_defaults() {
        assert_eq!(StyleConfig::default().social.card_style(), CardStyle::default());
    }

    #[test]
    fn validate_default_config_passes() {
        assert!(StyleConfig::default().validate().is_ok());
    }

    // =========================================================================
    // HexColor
    // =========================================================================

    #[test]
    fn hex_color_parses_both_cases() {
        assert_eq!(
            HexColor::try_from("#4338CA".to_string()).unwrap(),
            HexColor([67, 56, 202])
        );
        assert_eq!(
            HexColor::try_from("#0a0b0c".to_string()).unwrap(),
            HexColor([10, 11, 12])
        );
    }

    #[test]
    fn hex_color_rejects_malformed() {
        for bad in ["4338ca", "#4338c", "#4338cag", "#ggg000", "", "#"] {
            assert!(HexColor::try_from(bad.to_string()).is_err(), "{bad}");
        }
    }

    #[test]
    fn hex_color_displays_lowercase() {
        assert_eq!(HexColor([67, 56, 202]).to_string(), "#4338ca");
    }

    // =========================================================================
    // Parsing and merging
    // =========================================================================

    #[test]
    fn parse_partial_config() {
        let config = parse(
            r##"
[social]
title = "Acme"
"##,
        )
        .unwrap();
        assert_eq!(config.social.title, "Acme");
        // Other fields preserved from defaults
        assert_eq!(config.social.quality, 90);
        assert_eq!(config.favicon.glyph, "🎧");
    }

    #[test]
    fn parse_colors() {
        let config = parse(
            r##"
[social]
gradient_top = "#000000"
gradient_bottom = "#ffffff"

[app_icons]
background = "#102030"
"##,
        )
        .unwrap();
        assert_eq!(config.social.gradient_top, HexColor([0, 0, 0]));
        assert_eq!(config.social.gradient_bottom, HexColor([255, 255, 255]));
        assert_eq!(config.app_icons.background, HexColor([16, 32, 48]));
    }

    #[test]
    fn invalid_color_rejected() {
        let result = parse(
            r##"
[favicon]
background = "purple"
"##,
        );
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let result = parse(
            r#"
[social]
titel = "Typo"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_section_rejected() {
        let result = parse(
            r#"
[banner]
size = 3
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("b = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(1));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_replaces_arrays() {
        let base: toml::Value = toml::from_str("paths = ['a', 'b']").unwrap();
        let overlay: toml::Value = toml::from_str("paths = []").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("paths").unwrap().as_array().unwrap().len(), 0);
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn validate_quality_bounds() {
        let mut config = StyleConfig::default();
        config.social.quality = 100;
        assert!(config.validate().is_ok());
        config.social.quality = 1;
        assert!(config.validate().is_ok());

        config.social.quality = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("quality"));
        config.social.quality = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_font_size() {
        let mut config = StyleConfig::default();
        config.social.font_size = 0.0;
        assert!(config.validate().is_err());
        config.social.font_size = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_empty_glyph() {
        let mut config = StyleConfig::default();
        config.favicon.glyph.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // load_config
    // =========================================================================

    #[test]
    fn load_config_without_file_is_default() {
        let config = load_config(None).unwrap();
        assert_eq!(config.social.title, "Describe Music");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("style.toml");
        fs::write(
            &path,
            r##"
[social]
quality = 75
font_paths = []
"##,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.social.quality, 75);
        assert!(config.social.font_paths.is_empty());
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("style.toml");
        fs::write(&path, "[social]\nquality = 200\n").unwrap();

        let result = load_config(Some(&path));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn load_config_missing_file_is_io_error() {
        let result = load_config(Some(Path::new("/nonexistent/style.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("style.toml");
        fs::write(&path, "this is not [valid toml").unwrap();
        assert!(matches!(load_config(Some(&path)), Err(ConfigError::Toml(_))));
    }

    // =========================================================================
    // stock_config_toml
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: StyleConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = StyleConfig::default();
        assert_eq!(config.social.title, defaults.social.title);
        assert_eq!(config.social.gradient_top, defaults.social.gradient_top);
        assert_eq!(config.social.gradient_bottom, defaults.social.gradient_bottom);
        assert_eq!(config.social.font_paths, defaults.social.font_paths);
        assert_eq!(config.app_icons.background, defaults.app_icons.background);
        assert_eq!(config.favicon.dark_background, defaults.favicon.dark_background);
        assert_eq!(config.favicon.glyph, defaults.favicon.glyph);
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        assert!(content.contains("[social]"));
        assert!(content.contains("[app_icons]"));
        assert!(content.contains("[favicon]"));
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value().unwrap();
        assert!(val.get("social").is_some());
        assert!(val.get("app_icons").is_some());
        assert!(val.get("favicon").is_some());
    }
}
