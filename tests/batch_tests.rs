use std::io::{BufReader, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use toyota_part_number::{batch, parse, Error, ParseOptions};

const FIXTURE: &str = "\
90915-YZZJ3
04152YZZA1

90915-10003
  90915-YZZJ3-01  
12345 12345
1234\u{0444}5-12345
";

fn gzip_compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

#[test]
fn test_validate_plain_lines() {
    let report = batch::validate_reader(FIXTURE.as_bytes(), ParseOptions::permissive()).unwrap();

    println!("Total part numbers: {}", report.total);
    println!("Valid part numbers: {}", report.valid_count());
    println!("Invalid part numbers: {}", report.invalid_count());

    assert_eq!(report.total, 6);
    assert!(report.is_clean(), "invalid: {:?}", report.invalid);
    assert_eq!(report.valid[3], parse("90915YZZJ301").unwrap());
}

#[test]
fn test_strict_mode_reports_noisy_lines() {
    let report = batch::validate_lines(FIXTURE.lines(), ParseOptions::new());

    assert_eq!(report.valid_count(), 4);
    assert_eq!(
        report.invalid,
        vec!["12345 12345".to_string(), "1234\u{0444}5-12345".to_string()]
    );
}

#[test]
fn test_validate_gzip_stream() {
    let compressed = gzip_compress(FIXTURE.as_bytes());
    let reader = BufReader::new(GzDecoder::new(compressed.as_slice()));

    let report = batch::validate_reader(reader, ParseOptions::permissive()).unwrap();
    assert_eq!(report.total, 6);
    assert!(report.is_clean());
}

#[test]
fn test_corrupt_gzip_stream_is_io_error() {
    let mut compressed = gzip_compress(FIXTURE.as_bytes());
    compressed.truncate(compressed.len() / 2);
    let reader = BufReader::new(GzDecoder::new(compressed.as_slice()));

    let result = batch::validate_reader(reader, ParseOptions::permissive());
    assert!(matches!(result, Err(Error::Io(_))));
}
