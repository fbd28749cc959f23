// src/cli.rs
use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use clap::{Args, Parser, Subcommand};

use crate::{
    analytics::Summary,
    config::{
        consts::LOG_FILE,
        options::{ExportFormat, ExportOptions, ExtractOptions},
    },
    error::{Error, Result},
    core::dates::parse_month,
    extract::Extractor,
    file,
    metric::parse_metric,
    progress::Progress,
    table::{Order, Table},
};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Username extraction and metric tools for outreach exports")]
pub struct Cli {
    /// Log level for the debug log (.store/debug.log)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pull usernames out of pasted creator text
    Extract(ExtractArgs),
    /// Parse metric strings like 1.2M, $40.4K or 4.6%
    Metric {
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Sort a table by the metric value of one column
    Sort {
        input: PathBuf,
        #[arg(short, long)]
        column: String,
        #[arg(long)]
        desc: bool,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Drop rows repeating a value already seen in a column
    Dedup {
        input: PathBuf,
        #[arg(short, long)]
        column: String,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Keep rows whose column contains a value (case-insensitive)
    Filter {
        input: PathBuf,
        #[arg(short, long)]
        column: String,
        #[arg(short = 'v', long)]
        value: String,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// List the months in a date column, or keep only the chosen months
    Months {
        input: PathBuf,
        #[arg(short, long)]
        column: String,
        /// Month to keep (repeatable); lists available months when omitted
        #[arg(short = 'm', long = "month", value_name = "YYYY-MM", value_parser = parse_month_arg)]
        months: Vec<String>,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Split a table into outreach_part_N.csv files
    Split {
        input: PathBuf,
        #[arg(short, long, default_value_t = crate::config::consts::DEFAULT_BATCH_SIZE)]
        size: usize,
        #[arg(long, default_value = "out/batches")]
        out_dir: PathBuf,
    },
    /// Headline numbers for a creator/video export
    Summary { input: PathBuf },
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Text file to read; stdin when omitted or "-"
    pub input: Option<PathBuf>,
    /// Write usernames to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    #[arg(long, default_value = "csv", value_parser = parse_format)]
    pub format: ExportFormat,
    /// Print the debug trace to stderr
    #[arg(long)]
    pub trace: bool,
    /// Also trace every token the fallback strategy drops
    #[arg(long)]
    pub trace_rejections: bool,
    /// Extra noise word to ignore (repeatable)
    #[arg(long = "deny", value_name = "WORD")]
    pub deny: Vec<String>,
}

fn parse_format(s: &str) -> std::result::Result<ExportFormat, String> {
    ExportFormat::parse(s).ok_or_else(|| format!("unknown format: {s} (csv|tsv)"))
}

fn parse_month_arg(s: &str) -> std::result::Result<String, String> {
    parse_month(s).ok_or_else(|| format!("not a YYYY-MM month: {s}"))
}

/// Prints one line per written batch.
struct StderrProgress;
impl Progress for StderrProgress {
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn item_done(&mut self, number: usize, path: &Path) {
        eprintln!("Part {number} → {}", path.display());
    }
}

pub fn run(cli: Cli) -> Result<()> {
    crate::log::init(Path::new(LOG_FILE), &cli.log_level)?;
    logd!("CLI: {:?}", cli.command);

    match cli.command {
        Command::Extract(args) => extract(args),
        Command::Metric { values } => {
            for v in &values {
                println!("{}", parse_metric(v));
            }
            Ok(())
        }
        Command::Sort { input, column, desc, out } => {
            let mut table = read(&input)?;
            let col = table.require_column(&column)?;
            table.sort_by_metric(col, if desc { Order::Descending } else { Order::Ascending });
            emit(&table, &input, out.as_deref())
        }
        Command::Dedup { input, column, out } => {
            let mut table = read(&input)?;
            let col = table.require_column(&column)?;
            let removed = table.dedup_by(col);
            eprintln!("Removed {removed} duplicate(s).");
            emit(&table, &input, out.as_deref())
        }
        Command::Filter { input, column, value, out } => {
            let mut table = read(&input)?;
            let col = table.require_column(&column)?;
            let removed = table.filter_contains(col, &value);
            eprintln!("Filter matched {} row(s), removed {removed}.", table.row_count());
            emit(&table, &input, out.as_deref())
        }
        Command::Months { input, column, months, out } => {
            let mut table = read(&input)?;
            let col = table.require_column(&column)?;
            if months.is_empty() {
                for m in table.months(col) {
                    println!("{m}");
                }
                return Ok(());
            }
            table.filter_months(col, &months)?;
            eprintln!("Filtered to {} row(s).", table.row_count());
            emit(&table, &input, out.as_deref())
        }
        Command::Split { input, size, out_dir } => {
            let table = read(&input)?;
            let batches = table.batches(size)?;
            let written = file::write_batches(&out_dir, &batches, Some(&mut StderrProgress))?;
            println!("Wrote {} file(s) to {}", written.len(), out_dir.display());
            Ok(())
        }
        Command::Summary { input } => {
            let table = read(&input)?;
            print_summary(&Summary::compute(&table));
            Ok(())
        }
    }
}

fn extract(args: ExtractArgs) -> Result<()> {
    let text = read_text(args.input.as_deref())?;
    let opts = ExtractOptions::default()
        .with_denied(args.deny)
        .with_rejection_trace(args.trace_rejections);

    let result = Extractor::new(&opts).extract(&text);

    if args.trace {
        for line in &result.debug_trace {
            eprintln!("{line}");
        }
    }

    match args.out {
        Some(path) => {
            let mut export = ExportOptions::default();
            export.format = args.format;
            export.set_path(&path.to_string_lossy());
            let written = file::write_export(&export, &Table::from_usernames(&result.usernames))?;
            println!("Wrote {} username(s) to {}", result.usernames.len(), written.display());
        }
        None => {
            for name in &result.usernames {
                println!("{name}");
            }
        }
    }

    if result.usernames.is_empty() {
        eprintln!("No valid usernames found.");
    }
    Ok(())
}

fn read_text(path: Option<&Path>) -> Result<String> {
    let text = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    if text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(text)
}

fn read(path: &Path) -> Result<Table> {
    file::read_table(path, file::delimiter_for(path))
}

/// Write to `out` when given, else print to stdout in the input's format.
fn emit(table: &Table, input: &Path, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            file::write_table(path, table, true, file::delimiter_for(path))?;
            println!("Wrote {} row(s) to {}", table.row_count(), path.display());
        }
        None => print!("{}", crate::csv::to_delimited(table, true, file::delimiter_for(input))),
    }
    Ok(())
}

fn print_summary(s: &Summary) {
    println!("Mode:                    {:?}", s.mode);
    println!("Total videos:            {}", s.total_videos);
    println!("Creators >= 3 videos:    {}", s.creators_with_some_videos);
    println!("Creators >= 10 videos:   {}", s.creators_with_many_videos);
    if let (Some(hi), Some(lo)) = (s.creators_high_gmv, s.creators_low_gmv) {
        println!("Creators >= $1K GMV:     {hi}");
        println!("Creators >= $100 GMV:    {lo}");
    }
    if let Some(n) = s.total_likes { println!("Total likes:             {n}"); }
    if let Some(n) = s.total_orders { println!("Total orders:            {n}"); }
    if let Some(n) = s.viral_videos { println!("Videos >= 10k views:     {n}"); }
}
