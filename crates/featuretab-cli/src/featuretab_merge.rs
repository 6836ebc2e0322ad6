//! Feature table merge CLI
//!
//! Usage: featuretab_merge <file1> <file2> <output>
//!
//! Writes every row of both tables with a `source` column (1, 2, B1, B2),
//! sorted by `end`.
//!
//! Example: featuretab_merge sample1.csv sample2.csv union.csv

use env_logger::Env;
use featuretab::app::merger::merge_files;
use std::env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("featuretab_merge", String::as_str);

    if args.len() != 4 {
        eprintln!("Usage: {} <file1> <file2> <output>", program);
        std::process::exit(1);
    }

    let (file1, file2, output) = (&args[1], &args[2], &args[3]);

    match merge_files(file1, file2, output) {
        Ok(_) => println!("Union file saved as {}", output),
        Err(e) => {
            eprintln!("Error merging {} and {}: {}", file1, file2, e);
            std::process::exit(1);
        }
    }
}
