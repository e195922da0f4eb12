//! tabella CLI - monthly PDF report to spreadsheet converter

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use tabella::{discover, extract_table, resolve_template, Converter, Outcome};

#[derive(Parser)]
#[command(name = "tabella")]
#[command(version)]
#[command(about = "Convert monthly PDF reports into pre-formatted xlsx templates", long_about = None)]
struct Cli {
    #[command(flatten)]
    batch: BatchArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct BatchArgs {
    /// Directory containing <MONTH>_<YEAR>.pdf reports
    #[arg(long, short = 'i', env = "TABELLA_INPUT_DIR", default_value = "data", value_name = "DIR")]
    input: PathBuf,

    /// Directory containing <MONTH> <YEAR-1>.xlsx templates
    #[arg(long, short = 't', env = "TABELLA_TEMPLATE_DIR", default_value = "templates", value_name = "DIR")]
    templates: PathBuf,

    /// Directory for <MONTH> <YEAR>.xlsx outputs (created if absent)
    #[arg(long, short = 'o', env = "TABELLA_OUTPUT_DIR", default_value = "output", value_name = "DIR")]
    output: PathBuf,

    /// 1-indexed sheet row where extracted data starts
    #[arg(long, env = "TABELLA_START_ROW", default_value_t = tabella::DEFAULT_START_ROW)]
    start_row: u32,

    /// 1-indexed sheet column where extracted data starts
    #[arg(long, env = "TABELLA_START_COLUMN", default_value_t = tabella::DEFAULT_START_COLUMN)]
    start_column: u32,

    /// Skip months whose output file already exists instead of overwriting
    #[arg(long)]
    skip_existing: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the table from one PDF and print it as JSON
    Extract {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// List the monthly reports discovered in a directory
    List {
        /// Input directory
        #[arg(value_name = "DIR", default_value = "data")]
        input: PathBuf,

        /// Also show which template each report would use
        #[arg(long, value_name = "DIR")]
        templates: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Extract { file, compact }) => cmd_extract(&file, compact),
        Some(Commands::List { input, templates }) => cmd_list(&input, templates.as_deref()),
        None => cmd_run(&cli.batch),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_run(args: &BatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(&args.output)?;

    let converter = Converter::new(&args.input, &args.templates, &args.output)
        .with_start_row(args.start_row)
        .with_start_column(args.start_column)
        .with_skip_existing(args.skip_existing);

    let documents = converter.documents()?;
    if documents.is_empty() {
        println!(
            "{} no monthly reports found in {}",
            "Warning:".yellow(),
            args.input.display()
        );
        return Ok(());
    }

    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut reports = Vec::with_capacity(documents.len());
    for document in &documents {
        pb.set_message(format!("{} {}", document.month, document.year));
        reports.push(converter.process(document));
        pb.inc(1);
    }
    pb.finish_with_message("done");
    let summary = tabella::BatchSummary { reports };

    println!();
    for report in &summary.reports {
        let label = format!("{} {}", report.document.month, report.document.year);
        match &report.outcome {
            Outcome::Converted { output, rows } => {
                println!(
                    "  {} {} ({} rows) -> {}",
                    "✓".green(),
                    label,
                    rows,
                    output.display()
                );
            }
            Outcome::Skipped { output } => {
                println!(
                    "  {} {} (exists) -> {}",
                    "-".yellow(),
                    label,
                    output.display()
                );
            }
            Outcome::Failed { error } => {
                println!("  {} {}: {}", "✗".red(), label, error);
            }
        }
    }

    println!(
        "\n{} {} converted, {} skipped, {} failed",
        "Done!".green().bold(),
        summary.converted(),
        summary.skipped(),
        summary.failed()
    );

    if !summary.is_success() {
        return Err(format!(
            "{} of {} documents failed",
            summary.failed(),
            summary.reports.len()
        )
        .into());
    }
    Ok(())
}

fn cmd_extract(file: &Path, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let table = extract_table(file)?;

    let json = if compact {
        serde_json::to_string(&table)?
    } else {
        serde_json::to_string_pretty(&table)?
    };
    println!("{}", json);

    eprintln!(
        "{} {} rows, widest row {} cells",
        "Extracted:".green(),
        table.row_count(),
        table.max_cell_count()
    );
    Ok(())
}

fn cmd_list(input: &Path, templates: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let documents = discover(input)?;

    if documents.is_empty() {
        println!("no monthly reports found in {}", input.display());
        return Ok(());
    }

    for document in &documents {
        let label = format!("{} {}", document.month, document.year);
        match templates {
            Some(template_dir) => match resolve_template(document, template_dir) {
                Ok(template) => println!(
                    "  {} -> {} ({:?})",
                    label.bold(),
                    template.path.display(),
                    template.kind
                ),
                Err(e) => println!("  {} -> {}", label.bold(), e.to_string().red()),
            },
            None => println!("  {} ({})", label.bold(), document.path.display()),
        }
    }

    println!("\n{} reports", documents.len());
    Ok(())
}
