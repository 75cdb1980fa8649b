//! Command-line interface for the splitter.

use std::path::{Path, PathBuf};

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{Result, SplitError};
use crate::splitter::split_document;

/// Lohnsplit - Split a DATEV payroll PDF into per-employee documents.
#[derive(Parser)]
#[command(name = "lohnsplit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input payroll PDF
    pub input: PathBuf,

    /// Output directory (default: current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    split_command(&cli.input, &cli.output)
}

/// Execute the split command.
fn split_command(input: &Path, output: &Path) -> Result<()> {
    // Validate the input path before touching the output directory
    if !input.is_file() {
        return Err(SplitError::InputNotFound(input.display().to_string()));
    }

    println!(
        "{} {} into {}",
        style("Splitting").bold(),
        style(input.display()).cyan(),
        style(output.display()).green()
    );
    println!();

    // Create progress spinner
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );

    pb.set_message("Classifying pages...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let manifest = match split_document(input, output) {
        Ok(manifest) => manifest,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!("  Pages: {}", manifest.page_count);
    println!(
        "  Employees: {}",
        style(manifest.personnel_documents.len()).green()
    );
    for document in &manifest.personnel_documents {
        println!(
            "    {} ({})",
            document.file,
            style(&document.employee_name).cyan()
        );
    }
    println!("  Company documents: {}", manifest.company_documents.len());
    for document in &manifest.company_documents {
        println!("    {}", document.file);
    }
    println!("  SEPA rows: {}", manifest.sepa_rows);

    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output.display()
    );

    Ok(())
}
