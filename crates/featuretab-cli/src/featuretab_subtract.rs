//! Feature table subtraction CLI
//!
//! Usage: featuretab_subtract <input1> <input2> <output>
//!
//! Writes the rows of `<input2>` whose (contig, start, end, strand) key does
//! not occur in `<input1>`.
//!
//! Example: featuretab_subtract control.csv treated.csv treated_only.csv

use env_logger::Env;
use featuretab::app::subtractor::subtract_files;
use std::env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("featuretab_subtract", String::as_str);

    if args.len() != 4 {
        eprintln!("Usage: {} <input1> <input2> <output>", program);
        std::process::exit(1);
    }

    let (input1, input2, output) = (&args[1], &args[2], &args[3]);

    match subtract_files(input1, input2, output) {
        Ok(summary) => {
            println!("Removed {} shared row(s), kept {}.", summary.removed, summary.kept);
            println!("Filtered file saved as {}", output);
        }
        Err(e) => {
            eprintln!("Error subtracting {} from {}: {}", input1, input2, e);
            std::process::exit(1);
        }
    }
}
