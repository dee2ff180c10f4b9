//! Parsing and formatting a part number.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use toyota_part_number::PartNumber;

fn main() -> Result<(), Box<dyn Error>> {
    let part: PartNumber = "90915-yzzj3-01".parse()?;

    println!("Category:   {}", part.category());
    println!("Usage code: {}", part.usage_code());
    println!("Suffix:     {}", part.suffix());
    println!("Hyphenated: {part}");
    println!("Compact:    {part:#}");

    match PartNumber::parse("12345-12345-") {
        Ok(part) => println!("Unexpectedly valid: {part}"),
        Err(e) => println!("Rejected: {e}"),
    }

    Ok(())
}
