use fieldfmt::{format_field_value, FieldFormat, FieldType};

fn fmt(value: &str, format: FieldFormat) -> String {
    format_field_value(Some(value), FieldType::Date, format, 0)
}

#[test]
fn test_format_dd_mmm() {
    assert_eq!(fmt("2023-01-05", FieldFormat::DdMmm), "5 Jan");
    assert_eq!(fmt("2023-06-15", FieldFormat::DdMmm), "15 Jun");
    assert_eq!(fmt("2023-12-25", FieldFormat::DdMmm), "25 Dec");
}

#[test]
fn test_format_dd_mmm_yyyy() {
    assert_eq!(fmt("2023-01-05", FieldFormat::DdMmmYyyy), "5 Jan 2023");
    assert_eq!(fmt("2023-06-15", FieldFormat::DdMmmYyyy), "15 Jun 2023");
    assert_eq!(fmt("2023-12-25", FieldFormat::DdMmmYyyy), "25 Dec 2023");
}

#[test]
fn test_format_mmm_dd() {
    assert_eq!(fmt("2023-01-05", FieldFormat::MmmDd), "Jan 5");
    assert_eq!(fmt("2023-06-15", FieldFormat::MmmDd), "Jun 15");
    assert_eq!(fmt("2023-12-25", FieldFormat::MmmDd), "Dec 25");
}

#[test]
fn test_format_mmm_dd_yyyy() {
    assert_eq!(fmt("2023-01-05", FieldFormat::MmmDdYyyy), "Jan 5 2023");
    assert_eq!(fmt("2023-06-15", FieldFormat::MmmDdYyyy), "Jun 15 2023");
    assert_eq!(fmt("2023-12-25", FieldFormat::MmmDdYyyy), "Dec 25 2023");
}

#[test]
fn test_format_mmm_yyyy() {
    assert_eq!(fmt("2023-01-05", FieldFormat::MmmYyyy), "Jan 2023");
    assert_eq!(fmt("2023-06-15", FieldFormat::MmmYyyy), "Jun 2023");
    assert_eq!(fmt("2023-12-25", FieldFormat::MmmYyyy), "Dec 2023");
}

#[test]
fn test_format_mm_dd() {
    assert_eq!(fmt("2023-01-05", FieldFormat::MmDd), "01/05");
    assert_eq!(fmt("2023-06-15", FieldFormat::MmDd), "06/15");
    assert_eq!(fmt("2023-12-25", FieldFormat::MmDd), "12/25");
}

#[test]
fn test_format_mm_dd_yy() {
    assert_eq!(fmt("2023-01-05", FieldFormat::MmDdYy), "01/05/23");
    assert_eq!(fmt("2023-06-15", FieldFormat::MmDdYy), "06/15/23");
    assert_eq!(fmt("2023-12-25", FieldFormat::MmDdYy), "12/25/23");
}

#[test]
fn test_date_only_formats_reject_other_shapes() {
    // The narrow parse accepts year-month-day only; other shapes pass
    // through even when the full candidate table could read them.
    assert_eq!(fmt("07/31/2023 13:30", FieldFormat::DdMmm), "07/31/2023 13:30");
    assert_eq!(fmt("1690810200", FieldFormat::MmDdYy), "1690810200");
    assert_eq!(fmt("2023-02-31", FieldFormat::DdMmm), "2023-02-31");
}
