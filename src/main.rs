mod cli;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands};
use fileformat::FileDetector;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Detect {
            paths,
            json,
            max_header,
            quick,
            sequential,
        } => {
            let options = cli::detect_options(max_header, quick, sequential);
            let detector = FileDetector::new(options);
            let results = detector.detect_batch_checked(&paths);
            let summary = cli::summarize(&results);

            if json {
                let report = cli::render_json(&results, &summary)
                    .context("Failed to render JSON report")?;
                println!("{}", report);
            } else {
                print!("{}", cli::render_table(&results));
                print!("{}", cli::render_summary(&summary));
            }
        }
        Commands::List { category } => {
            let category = cli::parse_category(category.as_deref())
                .context("Invalid --category")?;
            let formats = fileformat::catalog::all()
                .skip(1)
                .filter(|info| category.is_none_or(|c| info.category == c));
            print!("{}", cli::render_catalog(formats));
        }
    }

    Ok(())
}
