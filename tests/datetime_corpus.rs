//! Fixture corpus for datetime interpretation.
//!
//! Every entry in datetime_corpus.json encodes the same instant
//! (July 31 2023 13:30:00 UTC) in a different textual shape; every shape
//! must format to the identical literal string for each display format,
//! regardless of how it was encoded.

use serde::Deserialize;

use fieldfmt::{format_field_value, FieldFormat, FieldType};

#[derive(Debug, Deserialize)]
struct Corpus {
    #[allow(dead_code)]
    description: String,
    datetime_inputs: Vec<String>,
    time_inputs: Vec<String>,
}

fn load_corpus() -> Corpus {
    let json = include_str!("fixtures/datetime_corpus.json");
    serde_json::from_str(json).unwrap()
}

fn assert_all(inputs: &[String], field_type: FieldType, format: FieldFormat, expected: &str) {
    for input in inputs {
        let formatted = format_field_value(Some(input), field_type, format, 0);
        assert_eq!(
            formatted, expected,
            "input {:?} under {:?} produced {:?}, expected {:?}",
            input, format, formatted, expected
        );
    }
}

#[test]
fn test_corpus_datetime_formats() {
    let corpus = load_corpus();
    assert_all(
        &corpus.datetime_inputs,
        FieldType::Datetime,
        FieldFormat::YyyyMmDdHhMmSs,
        "2023-07-31 01:30:00",
    );
    assert_all(
        &corpus.datetime_inputs,
        FieldType::Datetime,
        FieldFormat::MmDdYyyyHhMmSs,
        "07/31/2023 01:30:00",
    );
}

#[test]
fn test_corpus_time_formats_from_datetimes() {
    let corpus = load_corpus();
    assert_all(&corpus.datetime_inputs, FieldType::Time, FieldFormat::HhMm, "01:30");
    assert_all(&corpus.datetime_inputs, FieldType::Time, FieldFormat::HhMm24, "13:30");
    assert_all(&corpus.datetime_inputs, FieldType::Time, FieldFormat::HhMmSs, "01:30:00");
    assert_all(&corpus.datetime_inputs, FieldType::Time, FieldFormat::HhMmSs24, "13:30:00");
}

#[test]
fn test_corpus_time_only_inputs() {
    let corpus = load_corpus();
    assert_all(&corpus.time_inputs, FieldType::Time, FieldFormat::HhMm, "01:30");
    assert_all(&corpus.time_inputs, FieldType::Time, FieldFormat::HhMm24, "13:30");
    assert_all(&corpus.time_inputs, FieldType::Time, FieldFormat::HhMmSs, "01:30:00");
    assert_all(&corpus.time_inputs, FieldType::Time, FieldFormat::HhMmSs24, "13:30:00");
}
