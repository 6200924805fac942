use crate::units::error::{QuantityKind, UnitError};
use crate::units::parser::{parse_byte_size, parse_time_duration};

// Bare magnitudes ----------------------------------------------------------

#[test]
fn bare_magnitude_defaults_to_bytes() {
    assert_eq!(parse_byte_size("100").unwrap(), 100);
    assert_eq!(parse_byte_size("0").unwrap(), 0);
}

#[test]
fn bare_magnitude_defaults_to_nanoseconds() {
    assert_eq!(parse_time_duration("250").unwrap(), 250);
}

// Suffix resolution --------------------------------------------------------

#[test]
fn size_suffixes_scale_by_1024_steps() {
    assert_eq!(parse_byte_size("1B").unwrap(), 1);
    assert_eq!(parse_byte_size("2KB").unwrap(), 2048);
    assert_eq!(parse_byte_size("1MB").unwrap(), 1_048_576);
    assert_eq!(parse_byte_size("1GB").unwrap(), 1_073_741_824);
    assert_eq!(parse_byte_size("1TB").unwrap(), 1_099_511_627_776);
}

#[test]
fn time_suffixes_scale_to_nanoseconds() {
    assert_eq!(parse_time_duration("5ns").unwrap(), 5);
    assert_eq!(parse_time_duration("3us").unwrap(), 3_000);
    assert_eq!(parse_time_duration("500ms").unwrap(), 500_000_000);
    assert_eq!(parse_time_duration("1s").unwrap(), 1_000_000_000);
    assert_eq!(parse_time_duration("2m").unwrap(), 120_000_000_000);
    assert_eq!(parse_time_duration("1h").unwrap(), 3_600_000_000_000);
}

#[test]
fn suffixes_are_case_insensitive() {
    assert_eq!(parse_byte_size("2kb").unwrap(), 2048);
    assert_eq!(parse_byte_size("2Kb").unwrap(), 2048);
    assert_eq!(parse_byte_size("2kB").unwrap(), 2048);
    assert_eq!(parse_time_duration("500MS").unwrap(), 500_000_000);
    assert_eq!(parse_time_duration("1S").unwrap(), 1_000_000_000);
}

// Fractional magnitudes ----------------------------------------------------

#[test]
fn fractional_magnitudes_truncate_toward_zero() {
    assert_eq!(parse_byte_size("1.5KB").unwrap(), 1536);
    assert_eq!(parse_byte_size("0.5B").unwrap(), 0);
    assert_eq!(parse_time_duration("2.5ns").unwrap(), 2);
    assert_eq!(parse_time_duration("0.25s").unwrap(), 250_000_000);
    assert_eq!(parse_time_duration("1.5h").unwrap(), 5_400_000_000_000);
}

// Whitespace ---------------------------------------------------------------

#[test]
fn whitespace_around_and_inside_literals_is_tolerated() {
    assert_eq!(parse_byte_size("  10KB  ").unwrap(), 10_240);
    assert_eq!(parse_byte_size("10 KB").unwrap(), 10_240);
    assert_eq!(parse_time_duration("\t42ms\n").unwrap(), 42_000_000);
}

// Malformed literals -------------------------------------------------------

#[test]
fn malformed_literals_report_invalid_format() {
    for input in ["", "   ", "KB", "abcKB", "12..5", "1.2.3", "-5KB", "+5KB", "5KB junk"] {
        let err = parse_byte_size(input).unwrap_err();
        assert!(
            matches!(
                err,
                UnitError::InvalidFormat {
                    kind: QuantityKind::Size,
                    ..
                }
            ),
            "expected InvalidFormat for {:?}, got {:?}",
            input,
            err
        );
    }
}

#[test]
fn invalid_format_keeps_the_offending_input() {
    let err = parse_time_duration("oops").unwrap_err();
    assert_eq!(
        err,
        UnitError::InvalidFormat {
            kind: QuantityKind::Time,
            input: "oops".to_string(),
        }
    );
}

// Unknown suffixes ---------------------------------------------------------

#[test]
fn unrecognized_suffix_reports_unknown_unit_not_bad_format() {
    let err = parse_byte_size("5ZB").unwrap_err();
    assert_eq!(
        err,
        UnitError::UnknownUnit {
            kind: QuantityKind::Size,
            unit: "ZB".to_string(),
        }
    );

    let err = parse_time_duration("7d").unwrap_err();
    assert_eq!(
        err,
        UnitError::UnknownUnit {
            kind: QuantityKind::Time,
            unit: "d".to_string(),
        }
    );

    assert!(matches!(
        parse_byte_size("5x").unwrap_err(),
        UnitError::UnknownUnit { .. }
    ));
}

#[test]
fn unit_tables_do_not_cross_kinds() {
    // "ms" is a duration unit, never a size; "KB" is a size, never a duration.
    assert!(matches!(
        parse_byte_size("5ms").unwrap_err(),
        UnitError::UnknownUnit {
            kind: QuantityKind::Size,
            ..
        }
    ));
    assert!(matches!(
        parse_time_duration("5KB").unwrap_err(),
        UnitError::UnknownUnit {
            kind: QuantityKind::Time,
            ..
        }
    ));
}
