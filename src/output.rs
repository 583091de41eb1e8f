//! CLI output formatting.
//!
//! After a successful run the CLI prints every written file grouped by
//! category directory, with its size on disk:
//!
//! ```text
//! favicon/
//!     favicon-16x16.png (412B)
//!     favicon.ico (5.1KB)
//! social/
//!     opengraph-1200x630.jpg (48.3KB)
//!
//! Generated 44 files in public/images/logo
//! ```
//!
//! Each `format_*` function returns `Vec<String>` for testability and has a
//! `print_*` wrapper that writes to stdout. Format functions are pure: no
//! I/O, no side effects.

use crate::catalog::Category;
use crate::generate::GeneratedAsset;
use std::path::Path;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Human-readable size: bytes below 1KiB, one-decimal KB below 1MiB, else MB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{}B", bytes)
    } else if bytes < MIB {
        format!("{:.1}KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1}MB", bytes as f64 / MIB as f64)
    }
}

/// Format the generation summary.
///
/// Assets are listed in the order given; a category header is emitted
/// whenever the category changes.
pub fn format_generate_output(assets: &[GeneratedAsset], output_dir: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Option<Category> = None;

    for asset in assets {
        if current != Some(asset.category) {
            lines.push(format!("{}/", asset.category.dir_name()));
            current = Some(asset.category);
        }
        let name = asset
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| asset.path.display().to_string());
        lines.push(format!(
            "{}{} ({})",
            indent(1),
            name,
            format_file_size(asset.bytes)
        ));
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    let noun = if assets.len() == 1 { "file" } else { "files" };
    lines.push(format!(
        "Generated {} {} in {}",
        assets.len(),
        noun,
        output_dir.display()
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(assets: &[GeneratedAsset], output_dir: &Path) {
    for line in format_generate_output(assets, output_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
