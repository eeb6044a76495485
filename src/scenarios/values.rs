//! Scenarios over plain in-memory values: arithmetic, absent references,
//! indexing, casts, ordering, and parsing.
//!
//! Each one uses the checked route (`checked_div`, `get`, `downcast`,
//! validated sort keys, `str::parse`) so the fault surfaces as a
//! classified error instead of a panic.

use std::any::Any;
use std::collections::HashMap;

use crate::error::FaultError;

/// Integer division with a zero divisor.
pub fn divide_by_zero() -> Result<(), FaultError> {
    let _quotient = checked_divide(10, 0)?;
    Ok(())
}

fn checked_divide(dividend: i64, divisor: i64) -> Result<i64, FaultError> {
    dividend
        .checked_div(divisor)
        .ok_or_else(|| FaultError::InvalidArithmetic {
            operation: format!("{dividend} / {divisor}"),
        })
}

/// Using a setting that was never configured.
pub fn read_absent_setting() -> Result<(), FaultError> {
    let settings: HashMap<&str, &str> = HashMap::from([("listen", "0.0.0.0:8080")]);
    let hostname = settings
        .get("hostname")
        .ok_or_else(|| FaultError::InvalidReference {
            context: "reading the 'hostname' setting".to_string(),
        })?;
    let _ = hostname.len();
    Ok(())
}

/// Indexing a five-element array at position ten.
pub fn index_past_len() -> Result<(), FaultError> {
    let samples = [12u32, 7, 31, 4, 18];
    let index = 10;
    let value = samples.get(index).ok_or(FaultError::OutOfRange {
        index,
        len: samples.len(),
    })?;
    let _ = value;
    Ok(())
}

/// Downcasting a type-erased integer to a string.
pub fn downcast_mismatch() -> Result<(), FaultError> {
    let boxed: Box<dyn Any> = Box::new(123i32);
    let text = boxed
        .downcast::<String>()
        .map_err(|_| FaultError::InvalidConversion {
            from: "i32",
            to: "String",
        })?;
    let _ = text.len();
    Ok(())
}

/// Ordering entries by a label that one of them is missing.
pub fn sort_with_missing_label() -> Result<(), FaultError> {
    let mut entries: Vec<(Option<&str>, u32)> =
        vec![(Some("cpu"), 91), (None, 12), (Some("mem"), 48)];
    sort_by_label(&mut entries)?;
    Ok(())
}

/// Sort entries by label. Every label must be present; an absent one
/// rejects the whole sort and leaves the input order unchanged.
fn sort_by_label(entries: &mut [(Option<&str>, u32)]) -> Result<(), FaultError> {
    if let Some(position) = entries.iter().position(|(label, _)| label.is_none()) {
        return Err(FaultError::InvalidArgument {
            reason: format!("cannot order entries: entry {position} has no label"),
        });
    }
    entries.sort_by_key(|(label, _)| *label);
    Ok(())
}

/// Parsing text that is not a number.
pub fn parse_garbage() -> Result<(), FaultError> {
    let _value = parse_number("abc")?;
    Ok(())
}

/// Parse trimmed decimal text, keeping the native parse error as detail.
fn parse_number(raw: &str) -> Result<i32, FaultError> {
    raw.trim()
        .parse()
        .map_err(|err| FaultError::malformed_input(raw, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FaultKind;

    #[test]
    fn division_with_nonzero_divisor_succeeds() {
        assert_eq!(checked_divide(10, 2).unwrap(), 5);
    }

    #[test]
    fn division_by_zero_is_invalid_arithmetic() {
        let err = checked_divide(10, 0).unwrap_err();
        assert_eq!(err.kind(), FaultKind::InvalidArithmetic);
        assert!(err.to_string().contains("10 / 0"));
    }

    #[test]
    fn absent_setting_is_invalid_reference() {
        let err = read_absent_setting().unwrap_err();
        assert_eq!(err.kind(), FaultKind::InvalidReference);
    }

    #[test]
    fn index_past_len_reports_index_and_length() {
        let err = index_past_len().unwrap_err();
        assert_eq!(err.kind(), FaultKind::OutOfRange);
        assert_eq!(err.to_string(), "index 10 is out of bounds for length 5");
    }

    #[test]
    fn downcast_to_wrong_type_is_invalid_conversion() {
        let err = downcast_mismatch().unwrap_err();
        assert_eq!(err.kind(), FaultKind::InvalidConversion);
    }

    #[test]
    fn downcast_to_matching_type_succeeds() {
        let boxed: Box<dyn Any> = Box::new(123i32);
        assert_eq!(*boxed.downcast::<i32>().unwrap(), 123);
    }

    #[test]
    fn sort_with_all_labels_present_orders_entries() {
        let mut entries = vec![(Some("mem"), 48), (Some("cpu"), 91)];
        sort_by_label(&mut entries).unwrap();
        assert_eq!(entries[0].0, Some("cpu"));
        assert_eq!(entries[1].0, Some("mem"));
    }

    #[test]
    fn sort_with_missing_label_is_rejected_without_reordering() {
        let mut entries = vec![(Some("mem"), 48), (None, 12), (Some("cpu"), 91)];
        let err = sort_by_label(&mut entries).unwrap_err();
        assert_eq!(err.kind(), FaultKind::InvalidArgument);
        assert!(err.to_string().contains("entry 1"));
        assert_eq!(entries[0].0, Some("mem"));
        assert_eq!(entries[2].0, Some("cpu"));
    }

    #[test]
    fn well_formed_number_parses_without_a_report() {
        assert_eq!(parse_number("42").unwrap(), 42);
        assert_eq!(parse_number(" 42 ").unwrap(), 42);
    }

    #[test]
    fn garbage_text_is_malformed_input() {
        let err = parse_number("abc").unwrap_err();
        assert_eq!(err.kind(), FaultKind::MalformedInput);
        assert!(err.to_string().contains("abc"));
    }
}
