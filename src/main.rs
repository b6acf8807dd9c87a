use clap::{Parser, Subcommand};
use std::path::PathBuf;

use bookstore_ledger::config::LedgerConfig;
use bookstore_ledger::{extract, import, report};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Payment report, anonymized export and import for the bookstore ledger"
)]
struct Args {
    /// Path to config file (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the book table's columns, payment status counts and a few sample rows
    Report {
        /// Path to the ledger SQLite database
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Export students and books to JSON with students replaced by random codes
    Extract {
        /// Path to the ledger SQLite database
        #[arg(long)]
        db: Option<PathBuf>,

        /// Where to write the JSON document (overwritten)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Load an extracted JSON document into a fresh database
    Import {
        /// Extracted JSON document
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Target SQLite database (students and books tables are recreated)
        #[arg(short, long)]
        target: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => LedgerConfig::load(path)?,
        None => LedgerConfig::default(),
    };

    match args.command {
        Command::Report { db } => {
            let db_path = config.db_path(db);
            report::run(&db_path, &mut std::io::stdout().lock())?;
        }
        Command::Extract { db, output } => {
            let db_path = config.db_path(db);
            let output_path = config.output_path(output);
            extract::extract_data(&db_path, &output_path, rand::thread_rng())?;
            println!("Data extracted successfully to {}", output_path.display());
        }
        Command::Import { input, target } => {
            let input_path = config.output_path(input);
            let target_path = config.import_target_path(target);
            let data = import::read_document(&input_path)?;
            let summary = import::import_document(&data, &target_path)?;
            println!(
                "Imported {} students and {} books into {} ({} books skipped)",
                summary.students,
                summary.books,
                target_path.display(),
                summary.skipped_books
            );
        }
    }

    Ok(())
}
