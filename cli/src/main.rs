//! lexpdf CLI - extract text, tables and NC codes from legislative PDFs.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use lexpdf::{ContentExtractor, ExtractOptions, ExtractedContent, ExtractionStatus};

#[derive(Parser)]
#[command(name = "lexpdf")]
#[command(version)]
#[command(about = "Extract text, tables and customs codes from EU legislative PDFs", long_about = None)]
struct Cli {
    /// Input PDF file(s)
    #[arg(value_name = "FILE", required = true)]
    inputs: Vec<PathBuf>,

    /// Print the full result as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pretty: bool,

    /// Skip table detection
    #[arg(long)]
    no_tables: bool,

    /// Skip the NC-code pipeline
    #[arg(long)]
    no_nc_codes: bool,

    /// Size ceiling in MB; larger files are skipped
    #[arg(long, value_name = "MB", default_value_t = 30.0)]
    max_size_mb: f64,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let options = ExtractOptions::new()
        .with_tables(!cli.no_tables)
        .with_nc_codes(!cli.no_nc_codes)
        .with_max_file_size_mb(cli.max_size_mb);
    let extractor = ContentExtractor::with_options(options);

    let mut any_error = false;
    for input in &cli.inputs {
        let content = extractor.extract(input);
        if content.status == ExtractionStatus::Error {
            any_error = true;
        }

        if cli.json {
            match content.to_json(cli.pretty) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    log::error!("cannot serialize result for {}: {}", input.display(), e);
                    any_error = true;
                }
            }
        } else {
            print_summary(&content);
        }
    }

    if any_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_summary(content: &ExtractedContent) {
    match content.status {
        ExtractionStatus::Success => {
            println!("{}", content.source_path);
            println!("  pages:    {}", content.page_count);
            println!("  tables:   {}", content.tables.len());
            println!("  NC codes: {}", content.nc_codes.len());
            for code in &content.nc_codes {
                println!(
                    "    {} (page {}, confidence {:.2})",
                    code.code, code.page, code.confidence
                );
            }
            if let Some(ref title) = content.document_info.full_title {
                println!("  title:    {}", title);
            }
            if let Some(ref celex) = content.document_info.celex_number {
                println!("  celex:    {}", celex);
            }
        }
        ExtractionStatus::Skipped => {
            println!(
                "{}: skipped ({})",
                content.source_path,
                content.error.as_deref().unwrap_or("no reason recorded")
            );
        }
        ExtractionStatus::Error => {
            eprintln!(
                "{}: error ({})",
                content.source_path,
                content.error.as_deref().unwrap_or("no reason recorded")
            );
        }
    }
}
