//! Console and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use posekit_converter::GeneratedFile;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable progress lines
    #[default]
    Text,
    /// A single JSON document on stdout
    Json,
}

/// Row of the generated-files table.
#[derive(Tabled)]
struct FileRow {
    #[tabled(rename = "File")]
    name: String,
    #[tabled(rename = "Size")]
    size: String,
}

/// Print the output directory listing.
pub fn print_generated_files(files: &[GeneratedFile]) {
    if files.is_empty() {
        print_warning("Output directory is empty");
        return;
    }

    println!("📄 Generated files:");
    let rows: Vec<FileRow> = files
        .iter()
        .map(|f| FileRow {
            name: if f.is_dir {
                format!("{}/", f.name)
            } else {
                f.name.clone()
            },
            size: if f.is_dir {
                "-".to_string()
            } else {
                format_bytes(f.size_bytes)
            },
        })
        .collect();
    println!("{}", Table::new(rows));
}

/// Print any serializable value as pretty JSON.
pub fn print_json<T: Serialize>(item: &T) {
    let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
    println!("{}", json);
}

/// Print the startup banner
pub fn print_banner() {
    println!("🚀 TensorFlow Lite to TensorFlow.js Converter");
    println!("{}", "=".repeat(50));
}

/// Print a progress message
pub fn print_progress(emoji: &str, msg: &str) {
    println!("{} {}", emoji, msg);
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✅ {}", msg);
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠️  {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("❌ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<20} {}", format!("{}:", key), value);
}

/// Human-readable byte count.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
