use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zengin::{
    apply_totals, compute_result, read_document, reconcile, validate_document, DecodeOptions,
    EncodingMode, LineBreak, RecordKind,
};

#[derive(Debug, Parser)]
#[command(name = "zengin", version, about = "Inspect and validate Zengin transfer files")]
struct Args {
    /// Path to the Zengin file
    file: PathBuf,

    /// Character encoding of the records
    #[arg(long, value_enum, default_value_t = EncodingMode::Jis)]
    encoding: EncodingMode,

    /// Recompute trailer totals before writing
    #[arg(long)]
    apply_totals: bool,

    /// Write the re-encoded document to this path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Line break for --output
    #[arg(long, value_enum, default_value_t = LineBreak::CrLf)]
    line_break: LineBreak,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zengin=info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();

    let options = DecodeOptions { encoding: args.encoding };
    let mut document = read_document(&args.file, &options)
        .with_context(|| format!("reading {}", args.file.display()))?;

    println!("File: {}", args.file.display());
    println!("{}", "=".repeat(60));
    for (i, row) in document.rows.iter().enumerate() {
        let kind = RecordKind::from_row(row.as_slice());
        let encoding = document.encodings.get(i).map(|e| e.name()).unwrap_or("-");
        println!("  {:>4}. [{}] {:<6} {}", i + 1, encoding, kind.title(), row.join("|"));
    }

    if !document.errors.is_empty() {
        println!("\nDecode diagnostics:");
        for error in &document.errors {
            println!("  {}", error);
        }
    }

    let report = validate_document(&document.rows);
    if report.is_valid() {
        println!("\nValidation: OK");
    } else {
        println!("\nValidation: {} errors", report.error_count());
        for (row, field, message) in report.errors() {
            let name = zengin::get_record_type(document.rows[row].as_slice())
                .get(field)
                .map(|d| d.name)
                .unwrap_or("?");
            println!("  row {} field {} ({}): {}", row + 1, field, name, message);
        }
    }

    println!("\nTotals:");
    for (i, record) in compute_result(&document.rows)?.iter().enumerate() {
        println!("  group {}: {}", i + 1, record);
    }
    for mismatch in reconcile(&document.rows)? {
        println!(
            "  row {}: trailer states {:?}, computed {}",
            mismatch.row_index + 1,
            mismatch.stated.map(|s| s.to_string()),
            mismatch.computed
        );
    }

    if let Some(output) = &args.output {
        if args.apply_totals {
            let updated = apply_totals(&mut document.rows)?;
            println!("\nUpdated {} trailer rows", updated);
        }
        let written = document
            .write_file(output, args.line_break)
            .with_context(|| format!("writing {}", output.display()))?;
        println!("\nWrote {} bytes to {}", written, output.display());
    }

    Ok(())
}
