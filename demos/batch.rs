//! Validating a list of part numbers read from stdin, one per line.
//!
//! Run with: cargo run --example batch < parts.csv

use std::error::Error;
use std::io;
use toyota_part_number::{batch, ParseOptions};

fn main() -> Result<(), Box<dyn Error>> {
    let report = batch::validate_reader(io::stdin().lock(), ParseOptions::permissive())?;

    for part in &report.valid {
        println!("Valid: {part}");
    }
    for line in &report.invalid {
        println!("Invalid part number: {line}");
    }

    println!("\nTotal part numbers: {}", report.total);
    println!("Valid part numbers: {}", report.valid_count());
    println!("Invalid part numbers: {}", report.invalid_count());

    Ok(())
}
