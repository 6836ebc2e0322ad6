//! RNA FASTA extraction CLI
//!
//! Usage: featuretab_extract <input_dir> <output_dir>
//!
//! Every `.csv` feature table in `<input_dir>` is written to
//! `<output_dir>/<name>.fasta`, one record per row: header `>{contig} ({end})`
//! and bases 6-21 of `sequence` with T replaced by U.
//!
//! Example: featuretab_extract ./tables ./fasta

use env_logger::Env;
use featuretab::RnaWindow;
use featuretab::app::extractor::extract_dir;
use std::env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("featuretab_extract", String::as_str);

    if args.len() != 3 {
        eprintln!("Usage: {} <input_dir> <output_dir>", program);
        std::process::exit(1);
    }

    let input_dir = &args[1];
    let output_dir = &args[2];

    let report = match extract_dir(input_dir, output_dir, &RnaWindow::default()) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error extracting tables from {}: {}", input_dir, e);
            std::process::exit(1);
        }
    };

    for file in &report.files {
        println!(
            "{} -> {} ({} records)",
            file.input.display(),
            file.output.display(),
            file.records
        );
    }
    println!(
        "Done! Wrote {} records from {} table(s) to {}",
        report.total_records(),
        report.files.len(),
        output_dir
    );
}
