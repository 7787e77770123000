use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use serde::Serialize;

use fileformat::{BatchSummary, Category, DetectOptions, DetectResult, FormatInfo, MAX_HEADER_SIZE};

#[derive(Parser)]
#[command(name = "fileformat")]
#[command(version)]
#[command(about = "Identify file formats from their magic bytes", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect the format of one or more files
    Detect {
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Bytes to read from the start of each file
        #[arg(long, default_value_t = MAX_HEADER_SIZE)]
        max_header: usize,

        /// Read only a short header (skips TAR and ZIP content checks)
        #[arg(long, conflicts_with = "max_header")]
        quick: bool,

        /// Detect files one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// List supported formats
    List {
        /// Only formats of this category (image, document, ebook, ...)
        #[arg(short, long)]
        category: Option<String>,
    },
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        if self.debug {
            tracing::Level::TRACE
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }
}

pub fn detect_options(max_header: usize, quick: bool, sequential: bool) -> DetectOptions {
    let options = if quick {
        DetectOptions::quick()
    } else {
        DetectOptions::new().with_max_header_size(max_header)
    };
    if sequential { options.sequential() } else { options }
}

pub fn parse_category(name: Option<&str>) -> Result<Option<Category>> {
    match name {
        None => Ok(None),
        Some(name) => fileformat::catalog::find_category(name)
            .map(Some)
            .ok_or_else(|| anyhow!("unknown category '{}'", name)),
    }
}

pub fn summarize(results: &[(PathBuf, DetectResult)]) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for (_, result) in results {
        if result.is_valid() {
            summary.record(result.format());
        } else {
            summary.record_unreadable();
        }
    }
    summary
}

pub fn render_table(results: &[(PathBuf, DetectResult)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<40}{:<12}{:<12}MIME Type", "File", "Format", "Category");
    let _ = writeln!(out, "{}", "-".repeat(80));

    for (path, result) in results {
        let info = result.format().info();
        let mime = match result.error() {
            Some(err) => format!("error: {}", err),
            None => info.mime_type.to_string(),
        };
        let _ = writeln!(
            out,
            "{:<40}{:<12}{:<12}{}",
            path.display(),
            info.name,
            info.category,
            mime
        );
    }
    out
}

pub fn render_summary(summary: &BatchSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== Statistics ===");
    let _ = writeln!(out, "Total files: {}", summary.total);
    let _ = writeln!(out, "Recognized:  {}", summary.recognized);
    let _ = writeln!(out, "Unknown:     {}", summary.unknown);
    if summary.unreadable > 0 {
        let _ = writeln!(out, "Unreadable:  {}", summary.unreadable);
    }
    for (category, count) in summary.categories() {
        let _ = writeln!(out, "  {:<12}{}", category.name(), count);
    }
    out
}

pub fn render_catalog<'a>(formats: impl Iterator<Item = &'a FormatInfo>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<10}{:<12}{:<8}MIME Type", "Format", "Category", "Ext");
    let _ = writeln!(out, "{}", "-".repeat(80));
    for info in formats {
        let _ = writeln!(
            out,
            "{:<10}{:<12}{:<8}{}",
            info.name, info.category, info.extension, info.mime_type
        );
    }
    out
}

#[derive(Serialize)]
struct Row<'a> {
    path: &'a Path,
    #[serde(flatten)]
    info: &'static FormatInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct Report<'a> {
    files: Vec<Row<'a>>,
    summary: &'a BatchSummary,
}

pub fn render_json(results: &[(PathBuf, DetectResult)], summary: &BatchSummary) -> Result<String> {
    let files = results
        .iter()
        .map(|(path, result)| Row {
            path,
            info: result.format().info(),
            error: result.error().map(|err| err.to_string()),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&Report { files, summary })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fileformat::{DetectError, Format};

    fn sample() -> Vec<(PathBuf, DetectResult)> {
        vec![
            (PathBuf::from("a.png"), DetectResult::detected(Format::Png)),
            (PathBuf::from("b.bin"), DetectResult::detected(Format::Unknown)),
            (
                PathBuf::from("missing"),
                DetectResult::failed(DetectError::NotFound(PathBuf::from("missing"))),
            ),
        ]
    }

    #[test]
    fn cli_parses_detect() {
        let cli = Cli::try_parse_from(["fileformat", "-v", "detect", "a", "b", "--json"]).unwrap();
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);
        match cli.command {
            Commands::Detect { paths, json, .. } => {
                assert_eq!(paths.len(), 2);
                assert!(json);
            }
            Commands::List { .. } => panic!("expected detect"),
        }
    }

    #[test]
    fn quick_conflicts_with_max_header() {
        let parsed =
            Cli::try_parse_from(["fileformat", "detect", "a", "--quick", "--max-header", "10"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn options_from_flags() {
        assert_eq!(detect_options(100, false, false).max_header_size, 100);
        assert_eq!(detect_options(MAX_HEADER_SIZE, true, false), DetectOptions::quick());
        assert!(!detect_options(MAX_HEADER_SIZE, false, true).parallel);
    }

    #[test]
    fn unknown_category_is_an_error() {
        assert!(parse_category(Some("spreadsheet")).is_err());
        assert_eq!(parse_category(Some("Media")).unwrap(), Some(Category::Media));
        assert_eq!(parse_category(None).unwrap(), None);
    }

    #[test]
    fn summary_counts_unreadable() {
        let summary = summarize(&sample());
        assert_eq!(summary.total, 3);
        assert_eq!(summary.recognized, 1);
        assert_eq!(summary.unknown, 2);
        assert_eq!(summary.unreadable, 1);
    }

    #[test]
    fn table_reports_errors() {
        let table = render_table(&sample());
        assert!(table.contains("a.png"));
        assert!(table.contains("image/png"));
        assert!(table.contains("error: File not found"));
    }

    #[test]
    fn json_has_rows_and_summary() {
        let results = sample();
        let json = render_json(&results, &summarize(&results)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["files"][0]["name"], "PNG");
        assert_eq!(value["files"][0]["category"], "image");
        assert!(value["files"][2]["error"].is_string());
        assert_eq!(value["summary"]["recognized"], 1);
    }
}
