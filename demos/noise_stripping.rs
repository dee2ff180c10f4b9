//! Strict versus permissive parsing of noisy input.
//!
//! Run with: cargo run --example noise_stripping

use toyota_part_number::{try_parse_with_options, ParseOptions};

fn main() {
    let inputs = ["12345 12345", "90915.YZZJ3.01", "1234\u{0444}5-12345", "12345-12345-#"];

    for input in inputs {
        let strict = try_parse_with_options(input, ParseOptions::new());
        let permissive = try_parse_with_options(input, ParseOptions::permissive());

        println!("{input:?}");
        println!("  strict:     {}", describe(strict.as_ref()));
        println!("  permissive: {}\n", describe(permissive.as_ref()));
    }
}

fn describe(part: Option<&toyota_part_number::PartNumber>) -> String {
    part.map_or_else(|| "invalid".to_string(), ToString::to_string)
}
